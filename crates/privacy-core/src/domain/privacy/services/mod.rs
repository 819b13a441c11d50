// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence_filter_service::PresenceFilterService;
pub use privacy_domain_service::PrivacyDomainService;
pub use privacy_list_service::PrivacyListService;

pub mod impls;
mod presence_filter_service;
mod privacy_domain_service;
mod privacy_list_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::presence_filter_service::MockPresenceFilterService;
    pub use super::privacy_domain_service::MockPrivacyDomainService;
    pub use super::privacy_list_service::MockPrivacyListService;
}
