// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use minidom::Element;
use parking_lot::Mutex;
use secrecy::Secret;

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};

pub struct Connector {
    connection: Arc<Connection>,
}

impl Connector {
    pub fn provider(connection: Arc<Connection>) -> ConnectorProvider {
        Box::new(move || {
            Box::new(Connector {
                connection: connection.clone(),
            })
        })
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        _jid: &FullJid,
        _password: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        *self.connection.event_handler.lock() = Some(Arc::new(event_handler));
        Ok(Box::new(ConnectionHandle {
            connection: self.connection.clone(),
        }))
    }
}

/// Answers sent stanzas with the elements returned by the handler.
pub type SentStanzaHandler = dyn FnMut(&Element) -> Vec<Element> + Send;

/// An in-memory connection which records everything sent through it.
#[derive(Default)]
pub struct Connection {
    sent_stanzas: Mutex<Vec<Element>>,
    stanza_handler: Mutex<Option<Box<SentStanzaHandler>>>,
    event_handler: Mutex<Option<Arc<ConnectionEventHandler>>>,
}

impl Connection {
    pub fn set_stanza_handler<F>(&self, handler: F)
    where
        F: FnMut(&Element) -> Vec<Element> + Send + 'static,
    {
        *self.stanza_handler.lock() = Some(Box::new(handler))
    }

    pub fn sent_stanzas(&self) -> Vec<Element> {
        self.sent_stanzas.lock().clone()
    }

    pub fn sent_stanza_strings(&self) -> Vec<String> {
        self.sent_stanzas.lock().iter().map(String::from).collect()
    }

    pub fn reset(&self) {
        self.sent_stanzas.lock().clear()
    }

    /// Feeds `stanza` into the client as if it had been read off the wire.
    pub async fn receive_stanza(&self, stanza: impl Into<Element>) {
        let Some(handler) = self.event_handler.lock().clone() else {
            return;
        };
        (handler)(ConnectionEvent::Stanza(stanza.into())).await
    }

    pub async fn simulate_disconnect(&self, error: Option<ConnectionError>) {
        let Some(handler) = self.event_handler.lock().clone() else {
            return;
        };
        (handler)(ConnectionEvent::Disconnected { error }).await
    }
}

struct ConnectionHandle {
    connection: Arc<Connection>,
}

impl ConnectionTrait for ConnectionHandle {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        let responses = match self.connection.stanza_handler.lock().as_mut() {
            Some(handler) => (handler)(&stanza),
            None => vec![],
        };

        self.connection.sent_stanzas.lock().push(stanza);

        let Some(event_handler) = self.connection.event_handler.lock().clone() else {
            return Ok(());
        };

        for response in responses {
            let fut = (event_handler)(ConnectionEvent::Stanza(response));
            tokio::spawn(async move { fut.await });
        }

        Ok(())
    }

    fn disconnect(&self) {}
}
