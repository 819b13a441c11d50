// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_privacy_indicators_repository::InMemoryPrivacyIndicatorsRepository;
pub use in_memory_privacy_lists_repository::InMemoryPrivacyListsRepository;

mod in_memory_privacy_indicators_repository;
mod in_memory_privacy_lists_repository;
mod privacy_list_service;
