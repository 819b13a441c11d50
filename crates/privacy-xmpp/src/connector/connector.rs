// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use minidom::Element;
use secrecy::Secret;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{msg:?}")]
    Generic { msg: String },
}

/// Receives everything the transport reads off the wire.
pub type ConnectionEventHandler = Box<dyn Fn(ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

/// The transport seam. Implementations open a stream for `jid` and feed incoming stanzas into
/// `event_handler`.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[derive(Debug)]
pub enum ConnectionEvent {
    Disconnected { error: Option<ConnectionError> },
    Stanza(Element),
}

pub trait Connection: Send + Sync {
    fn send_stanza(&self, stanza: Element) -> Result<()>;
    fn disconnect(&self);
}
