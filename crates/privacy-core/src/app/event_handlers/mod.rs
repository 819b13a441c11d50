// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use connection_event_handler::ConnectionEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use privacy_event_handler::PrivacyEventHandler;
pub use privacy_xmpp::Event as XMPPEvent;
pub use server_event::*;

use crate::ClientEvent;

mod connection_event_handler;
mod event_handler_queue;
mod privacy_event_handler;
mod server_event;

/// `ServerEventHandler` is a trait representing a handler for events received from the server.
///
/// If `handle_event` returns `None`, the event has been consumed and no further processing
/// should be done. If it returns `Some(event)`, the event is passed on to the next handler.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
