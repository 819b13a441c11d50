// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::RwLock;
use tracing::error;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::{Client, ClientDelegate, ClientEvent};

/// Identifies a delegate registered with `Client::add_delegate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelegateId(u64);

/// Forwards every event to all registered delegates in registration order.
pub struct ClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegates: RwLock<Vec<(DelegateId, Arc<dyn ClientDelegate>)>>,
    next_delegate_id: AtomicU64,
}

impl ClientEventDispatcher {
    pub fn new() -> Self {
        Self {
            client_inner: Default::default(),
            delegates: Default::default(),
            next_delegate_id: AtomicU64::new(1),
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client_inner.set(client_inner).is_err() {
            error!("Tried to set client_inner on ClientEventDispatcher more than once.");
        }
    }

    pub fn add_delegate(&self, delegate: Arc<dyn ClientDelegate>) -> DelegateId {
        let id = DelegateId(self.next_delegate_id.fetch_add(1, Ordering::Relaxed));
        self.delegates.write().push((id, delegate));
        id
    }

    pub fn remove_delegate(&self, id: DelegateId) -> bool {
        let mut delegates = self.delegates.write();
        let count = delegates.len();
        delegates.retain(|(delegate_id, _)| delegate_id != &id);
        delegates.len() != count
    }
}

impl ClientEventDispatcherTrait for ClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        // Delegates may (un)register delegates while handling the event.
        let delegates = self
            .delegates
            .read()
            .iter()
            .map(|(_, delegate)| delegate.clone())
            .collect::<Vec<_>>();

        let client = Client::from(client_inner);
        for delegate in delegates {
            delegate.handle_event(client.clone(), event.clone());
        }
    }
}
