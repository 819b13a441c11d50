// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use jid::{BareJid, FullJid, Jid};
use minidom::Element;
use parking_lot::{Mutex, RwLock};
use tokio::sync::oneshot;
use tracing::error;
use xmpp_parsers::iq::{Iq, IqType};

use crate::client::EventHandler;
use crate::connector::{Connection, PinnedFuture};
use crate::deps::{IDProvider, UUIDProvider};
use crate::util::RequestError;
use crate::Event;

type PendingResponse = oneshot::Sender<Result<Option<Element>, RequestError>>;

/// Shared by all modules of a client. Owns the connection and correlates IQ responses with
/// the requests that are waiting for them.
#[derive(Clone)]
pub struct ModuleContext {
    pub(super) inner: Arc<ModuleContextInner>,
}

pub(super) struct ModuleContextInner {
    pub jid: RwLock<Option<FullJid>>,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub event_handler: EventHandler,
    pub pending_requests: Mutex<HashMap<String, PendingResponse>>,
    pub id_provider: Box<dyn IDProvider>,
    pub request_timeout: Duration,
}

impl ModuleContext {
    pub(crate) async fn send_iq(&self, iq: Iq) -> Result<Option<Element>, RequestError> {
        let id = iq.id.clone();
        let (sender, receiver) = oneshot::channel();
        self.inner
            .pending_requests
            .lock()
            .insert(id.clone(), sender);

        if let Err(err) = self.send_stanza(iq) {
            self.inner.pending_requests.lock().remove(&id);
            return Err(RequestError::Generic {
                msg: err.to_string(),
            });
        }

        match tokio::time::timeout(self.inner.request_timeout, receiver).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(RequestError::Disconnected),
            Err(_) => {
                self.inner.pending_requests.lock().remove(&id);
                error!("Request with id '{}' timed out.", id);
                Err(RequestError::TimedOut { id })
            }
        }
    }

    pub(crate) fn send_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        let Some(conn) = &*self.inner.connection.read() else {
            return Err(RequestError::Disconnected.into());
        };
        let stanza = stanza.into();
        #[cfg(feature = "trace-stanzas")]
        tracing::info!(direction = "OUT", "{}", String::from(&stanza));
        conn.send_stanza(stanza)
    }

    pub(crate) fn full_jid(&self) -> Option<FullJid> {
        self.inner.jid.read().clone()
    }

    pub(crate) fn bare_jid(&self) -> Option<BareJid> {
        self.full_jid().map(FullJid::into_bare)
    }

    /// The domain part of the connected account.
    pub(crate) fn server_jid(&self) -> Result<Jid, RequestError> {
        let bare = self.bare_jid().ok_or(RequestError::Disconnected)?.to_string();
        let domain = bare
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or(&bare);
        Ok(Jid::from_str(domain)?)
    }

    pub(crate) fn generate_id(&self) -> String {
        self.inner.id_provider.new_id()
    }

    pub(crate) fn schedule_event(&self, event: Event) {
        let fut = (self.inner.event_handler)(event);
        tokio::spawn(async move { fut.await });
    }

    /// Hands a received IQ response to the request waiting for it. Returns the IQ if nobody
    /// was waiting so that modules get a chance to handle it.
    pub(super) fn fulfill_request(&self, iq: Iq) -> Option<Iq> {
        let result = match &iq.payload {
            IqType::Result(_) | IqType::Error(_) => {
                self.inner.pending_requests.lock().remove(&iq.id)
            }
            IqType::Get(_) | IqType::Set(_) => None,
        };

        let Some(sender) = result else {
            return Some(iq);
        };

        let response = match iq.payload {
            IqType::Result(payload) => Ok(payload),
            IqType::Error(err) => Err(RequestError::Rejected { err }),
            IqType::Get(_) | IqType::Set(_) => Err(RequestError::UnexpectedResponse),
        };

        // The requesting future might have timed out in the meantime.
        _ = sender.send(response);
        None
    }

    pub(super) fn disconnect(&self) {
        if let Some(conn) = self.inner.connection.write().take() {
            conn.disconnect()
        }
        // Dropping the senders fails all pending requests.
        self.inner.pending_requests.lock().clear();
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        ModuleContext {
            inner: Arc::new(ModuleContextInner {
                jid: RwLock::new(None),
                connection: Default::default(),
                event_handler: Box::new(|_| Box::pin(async {}) as PinnedFuture<_>),
                pending_requests: Default::default(),
                id_provider: Box::new(UUIDProvider::new()),
                request_timeout: Duration::from_secs(15),
            }),
        }
    }
}
