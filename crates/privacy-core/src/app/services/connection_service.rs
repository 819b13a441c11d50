// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::FullJid;
use secrecy::Secret;
use tracing::{error, warn};

use privacy_proc_macros::InjectDependencies;
use privacy_xmpp::ConnectionError;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectionService, DynContactsRepository,
    DynPresenceService, DynPrivacyDomainService, DynPrivacyIndicatorsRepository,
};
use crate::client_event::ConnectionEvent;
use crate::domain::connection::models::ConnectionProperties;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ConnectionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connection_service: DynConnectionService,
    #[inject]
    contacts_repo: DynContactsRepository,
    #[inject]
    presence_service: DynPresenceService,
    #[inject]
    privacy_domain_service: DynPrivacyDomainService,
    #[inject]
    privacy_indicators_repo: DynPrivacyIndicatorsRepository,
}

impl ConnectionService {
    pub async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        // Unset until the server features are known. Privacy operations issued in between fail
        // as "not connected" rather than latching the session as unsupported.
        self.ctx.reset_connection_properties();
        self.connection_service.connect(jid, password).await?;

        let server_features = match self.connection_service.load_server_features().await {
            Ok(features) => features,
            Err(err) => {
                warn!(
                    "Failed to load server features. Privacy lists are disabled for this session. {}",
                    err
                );
                Default::default()
            }
        };
        self.ctx.set_connection_properties(ConnectionProperties {
            connected_jid: jid.clone(),
            server_features,
        });

        self.presence_service
            .broadcast_presence(&self.ctx.available_presence())
            .await
            .map_err(|err| ConnectionError::Generic {
                msg: err.to_string(),
            })?;

        if let Err(err) = self.privacy_domain_service.initialize().await {
            error!("Failed to load privacy lists. Reason: {}", err.to_string());
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ConnectionStatusChanged {
                event: ConnectionEvent::Connect,
            });

        Ok(())
    }

    pub async fn disconnect(&self) -> Result<()> {
        self.connection_service.disconnect().await;
        self.ctx.reset_connection_properties();
        self.privacy_domain_service.clear_cache().await?;
        self.contacts_repo.clear_cache().await?;
        self.privacy_indicators_repo.clear();
        Ok(())
    }
}
