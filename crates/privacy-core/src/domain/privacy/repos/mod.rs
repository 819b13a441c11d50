// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use privacy_indicators_repository::PrivacyIndicatorsRepository;
pub use privacy_lists_repository::{PrivacyListsReadOnlyRepository, PrivacyListsRepository};

mod privacy_indicators_repository;
mod privacy_lists_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::privacy_indicators_repository::MockPrivacyIndicatorsRepository;
    pub use super::privacy_lists_repository::MockPrivacyListsReadOnlyRepository;
}
