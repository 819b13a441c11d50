// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use jid::FullJid;
use secrecy::Secret;

use privacy_xmpp::ConnectionError;

use crate::app::deps::DynAppContext;
use crate::app::services::{AccountService, ConnectionService, ContactListService, PrivacyService};
use crate::client_builder::ClientBuilder;
use crate::infra::events::{ClientEventDispatcher, DelegateId};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub contact_list: ContactListService,
    pub privacy: PrivacyService,
    pub(crate) connection: ConnectionService,
    pub(crate) ctx: DynAppContext,
    pub(crate) event_dispatcher: Arc<ClientEventDispatcher>,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.connection.connect(jid, password).await
    }

    pub async fn disconnect(&self) -> Result<()> {
        self.connection.disconnect().await
    }

    pub fn connected_jid(&self) -> Option<FullJid> {
        self.ctx.connected_jid().ok()
    }

    /// Registers `delegate` to receive all subsequent `ClientEvent`s.
    pub fn add_delegate(&self, delegate: Arc<dyn ClientDelegate>) -> DelegateId {
        self.event_dispatcher.add_delegate(delegate)
    }

    /// Returns `true` if a delegate was registered under `id`.
    pub fn remove_delegate(&self, id: DelegateId) -> bool {
        self.event_dispatcher.remove_delegate(id)
    }
}
