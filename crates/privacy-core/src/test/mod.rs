// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::{
    MockAppDependencies, MockPresenceFilterServiceDependencies,
    MockPrivacyDomainServiceDependencies,
};


pub mod mock_data {
    pub use super::mock_app_dependencies::mock_account_jid as account_jid;
}

#[macro_export]
macro_rules! user_id {
    ($jid:expr) => {
        $crate::dtos::UserId::from($jid.parse::<jid::BareJid>().unwrap())
    };
}
