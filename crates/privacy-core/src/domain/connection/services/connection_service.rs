// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use secrecy::Secret;

use privacy_xmpp::ConnectionError;

use crate::domain::connection::models::ServerFeatures;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, jid: &FullJid, password: Secret<String>)
        -> Result<(), ConnectionError>;
    async fn disconnect(&self);

    /// Queries the features the server advertises via disco#info.
    async fn load_server_features(&self) -> Result<ServerFeatures>;
}
