// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use parking_lot::RwLock;
use secrecy::Secret;

use crate::client::client::ClientInner;
use crate::client::module_context::ModuleContextInner;
use crate::client::{Client, ModuleContext, ModuleLookup};
use crate::connector::{
    Connection, ConnectionError, ConnectionEventHandler, Connector, PinnedFuture,
};
use crate::deps::{IDProvider, UUIDProvider};
use crate::mods::{AnyModule, Module};
use crate::Event;

pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;
pub type EventHandler = Box<dyn Fn(Event) -> PinnedFuture<()> + Send + Sync>;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct ClientBuilder {
    connector_provider: ConnectorProvider,
    id_provider: Box<dyn IDProvider>,
    event_handler: EventHandler,
    request_timeout: Duration,
    mods: ModuleLookup,
}

impl ClientBuilder {
    pub fn new() -> Self {
        ClientBuilder {
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            id_provider: Box::new(UUIDProvider::new()),
            event_handler: Box::new(|_| Box::pin(async {}) as PinnedFuture<_>),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            mods: vec![],
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Box::new(id_provider);
        self
    }

    pub fn set_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn set_event_handler<T, F>(mut self, handler: T) -> Self
    where
        T: Fn(Event) -> F + Send + Sync + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        self.event_handler = Box::new(move |event| Box::pin(handler(event)) as PinnedFuture<_>);
        self
    }

    /// Registers `module`, replacing a previously registered module of the same type.
    pub fn add_mod<M: Module>(mut self, module: M) -> Self {
        let type_id = TypeId::of::<M>();
        self.mods.retain(|(id, _)| id != &type_id);
        self.mods.push((type_id, Box::new(module) as Box<dyn AnyModule>));
        self
    }

    pub fn build(self) -> Client {
        let context = ModuleContext {
            inner: Arc::new(ModuleContextInner {
                jid: RwLock::new(None),
                connection: RwLock::new(None),
                event_handler: self.event_handler,
                pending_requests: parking_lot::Mutex::new(HashMap::new()),
                id_provider: self.id_provider,
                request_timeout: self.request_timeout,
            }),
        };

        let mut mods = self.mods;
        for (_, module) in mods.iter_mut() {
            module.register_with(context.clone());
        }

        Client {
            inner: Arc::new(ClientInner {
                connector_provider: self.connector_provider,
                context,
                mods,
            }),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct UndefinedConnector {}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _jid: &FullJid,
        _password: Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        Err(ConnectionError::Generic {
            msg: "No connector configured.".to_string(),
        })
    }
}
