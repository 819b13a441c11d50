// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;

mod connection_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::connection_service::MockConnectionService;
}
