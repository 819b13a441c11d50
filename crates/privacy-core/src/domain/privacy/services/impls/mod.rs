// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence_filter_service::{PresenceFilterService, PresenceFilterServiceDependencies};
pub use privacy_domain_service::{PrivacyDomainService, PrivacyDomainServiceDependencies};

mod presence_filter_service;
mod privacy_domain_service;
