// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use privacy_xmpp::client::ConnectorProvider;
use privacy_xmpp::IDProvider;

use crate::app::deps::{AppConfig, AppContext, AppDependencies};
use crate::app::event_handlers::{
    ConnectionEventHandler, PrivacyEventHandler, ServerEventHandlerQueue,
};
use crate::app::services::{AccountService, ConnectionService, ContactListService, PrivacyService};
use crate::client::ClientInner;
use crate::infra::events::ClientEventDispatcher;
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::infra::xmpp::{XMPPClient, XMPPClientBuilder};
use crate::{Client, ClientDelegate};

pub struct ClientBuilder {
    app_config: AppConfig,
    builder: XMPPClientBuilder,
    delegates: Vec<Arc<dyn ClientDelegate>>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            builder: XMPPClient::builder(),
            delegates: vec![],
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    /// Delegates added here receive events from the very first connection on. More can be added
    /// later through `Client::add_delegate`.
    pub fn add_delegate(mut self, delegate: Arc<dyn ClientDelegate>) -> Self {
        self.delegates.push(delegate);
        self
    }

    pub fn build(self) -> Client {
        let server_event_handler_queue = Arc::new(ServerEventHandlerQueue::new());

        let xmpp_client = Arc::new(
            {
                let handler_queue = server_event_handler_queue.clone();
                self.builder
                    .set_request_timeout(self.app_config.request_timeout)
                    .set_event_handler(move |event| {
                        let handler_queue = handler_queue.clone();
                        async move { handler_queue.handle_event(event).await }
                    })
            }
            .build(),
        );

        let event_dispatcher = Arc::new(ClientEventDispatcher::new());
        for delegate in self.delegates {
            event_dispatcher.add_delegate(delegate);
        }

        let dependencies: AppDependencies = PlatformDependencies {
            ctx: AppContext::new(self.app_config),
            client_event_dispatcher: event_dispatcher.clone(),
            xmpp: xmpp_client,
        }
        .into();

        server_event_handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)),
            Box::new(PrivacyEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            connection: ConnectionService::from(&dependencies),
            contact_list: ContactListService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            event_dispatcher: event_dispatcher.clone(),
            privacy: PrivacyService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
