// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::Result;
use jid::FullJid;
use minidom::Element;
use secrecy::Secret;
use tracing::error;

use crate::client::builder::{ClientBuilder, ConnectorProvider};
use crate::client::{Event, ModuleContext, ModuleLookup};
use crate::connector::{ConnectionError, ConnectionEvent, PinnedFuture};
use crate::mods::AnyModule;
use crate::util::XMPPElement;
use crate::Event as ClientEvent;

#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.disconnect();

        *self.inner.context.inner.jid.write() = Some(jid.clone());

        let weak_inner = Arc::downgrade(&self.inner);
        let connection = (self.inner.connector_provider)()
            .connect(
                jid,
                password,
                Box::new(move |event| {
                    let weak_inner = weak_inner.clone();
                    Box::pin(async move {
                        if let Some(inner) = weak_inner.upgrade() {
                            inner.handle_event(event)
                        }
                    }) as PinnedFuture<_>
                }),
            )
            .await?;

        self.inner.context.inner.connection.write().replace(connection);

        for (_, module) in self.inner.mods.iter() {
            if let Err(err) = module.handle_connect() {
                error!("Encountered error in module. {}", err);
            }
        }

        self.inner
            .context
            .schedule_event(ClientEvent::Client(Event::Connected));

        Ok(())
    }

    pub fn disconnect(&self) {
        self.inner.context.disconnect()
    }

    pub fn connected_jid(&self) -> Option<FullJid> {
        self.inner.context.full_jid()
    }

    pub fn get_mod<M: AnyModule + Clone>(&self) -> M {
        let Some((_, module)) = self
            .inner
            .mods
            .iter()
            .find(|(id, _)| id == &TypeId::of::<M>())
        else {
            panic!("Could not find requested module.")
        };
        match module.as_any().downcast_ref::<M>() {
            Some(module) => module.clone(),
            None => panic!("Module registered under a foreign TypeId."),
        }
    }

    pub fn send_raw_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        self.inner.context.send_stanza(stanza)
    }
}

pub(super) struct ClientInner {
    pub connector_provider: ConnectorProvider,
    pub context: ModuleContext,
    pub mods: ModuleLookup,
}

impl ClientInner {
    fn handle_event(&self, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Disconnected { error } => {
                self.context.disconnect();
                self.context
                    .schedule_event(ClientEvent::Client(Event::Disconnected { error }))
            }
            ConnectionEvent::Stanza(stanza) => self.handle_stanza(stanza),
        }
    }

    fn handle_stanza(&self, stanza: Element) {
        #[cfg(feature = "trace-stanzas")]
        tracing::info!(direction = "IN", "{}", String::from(&stanza));

        let element = match XMPPElement::try_from(stanza) {
            Ok(element) => element,
            Err(err) => {
                error!("Failed to parse stanza. {}", err);
                return;
            }
        };

        let element = match element {
            XMPPElement::IQ(iq) => match self.context.fulfill_request(iq) {
                Some(iq) => XMPPElement::IQ(iq),
                None => return,
            },
            XMPPElement::Message(_) | XMPPElement::Presence(_) => element,
        };

        for (_, module) in self.mods.iter() {
            if let Err(err) = module.handle_element(&element) {
                error!("Encountered error in module. {}", err);
            }
        }
    }
}
