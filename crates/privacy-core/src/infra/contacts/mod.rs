// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use caching_contacts_repository::CachingContactsRepository;

mod caching_contacts_repository;
mod contacts_service;
