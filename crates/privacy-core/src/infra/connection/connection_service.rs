// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use secrecy::Secret;
use tracing::info;

use privacy_xmpp::{mods, ns, ConnectionError};

use crate::domain::connection::models::ServerFeatures;
use crate::domain::connection::services::ConnectionService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ConnectionService for XMPPClient {
    async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.client.connect(jid, password).await
    }

    async fn disconnect(&self) {
        self.client.disconnect()
    }

    async fn load_server_features(&self) -> Result<ServerFeatures> {
        let caps = self.client.get_mod::<mods::Caps>();
        let info = caps.query_server_features().await?;

        let server_features = ServerFeatures {
            privacy_lists: info.features.iter().any(|f| f.var == ns::PRIVACY),
        };
        info!("Loaded server features {:?}", server_features);

        Ok(server_features)
    }
}
