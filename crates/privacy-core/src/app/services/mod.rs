// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use connection_service::ConnectionService;
pub use contact_list_service::ContactListService;
pub use privacy_service::PrivacyService;

mod account_service;
mod connection_service;
mod contact_list_service;
mod privacy_service;
