// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use privacy_xmpp::client::ConnectorProvider;
use privacy_xmpp::{mods, Client, ClientBuilder, Event, IDProvider};

#[derive(Clone)]
pub struct XMPPClient {
    pub(crate) client: Arc<Client>,
}

impl XMPPClient {
    pub fn builder() -> XMPPClientBuilder {
        XMPPClientBuilder {
            builder: Client::builder(),
        }
    }
}

pub struct XMPPClientBuilder {
    builder: ClientBuilder,
}

impl XMPPClientBuilder {
    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_request_timeout(mut self, timeout: Duration) -> Self {
        self.builder = self.builder.set_request_timeout(timeout);
        self
    }

    pub fn set_event_handler<T, F>(mut self, handler: T) -> Self
    where
        T: Fn(Event) -> F + Send + Sync + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        self.builder = self.builder.set_event_handler(handler);
        self
    }

    pub fn build(self) -> XMPPClient {
        let client = self
            .builder
            .add_mod(mods::Caps::default())
            .add_mod(mods::Privacy::default())
            .add_mod(mods::Roster::default())
            .add_mod(mods::Status::default())
            .build();

        XMPPClient {
            client: Arc::new(client),
        }
    }
}
