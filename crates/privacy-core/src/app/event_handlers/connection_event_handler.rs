// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use privacy_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynContactsRepository, DynPrivacyDomainService,
    DynPrivacyIndicatorsRepository,
};
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::{ClientEvent, ConnectionEvent as ClientConnectionEvent};

#[derive(InjectDependencies)]
pub struct ConnectionEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    contacts_repo: DynContactsRepository,
    #[inject]
    privacy_domain_service: DynPrivacyDomainService,
    #[inject]
    privacy_indicators_repo: DynPrivacyIndicatorsRepository,
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    async fn handle_connection_event(&self, event: ConnectionEvent) -> Result<()> {
        match event {
            ConnectionEvent::Connected => {
                // We'll send an event from our `connect` method since we need to gather
                // information about the server first.
            }
            ConnectionEvent::Disconnected { error } => {
                info!("Connection was closed. Resetting session state.");
                self.ctx.reset_connection_properties();
                self.privacy_domain_service.clear_cache().await?;
                self.contacts_repo.clear_cache().await?;
                self.privacy_indicators_repo.clear();

                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Disconnect { error },
                    });
            }
        }
        Ok(())
    }
}
