// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::error;

use crate::app::event_handlers::{ServerEvent, ServerEventHandler, XMPPEvent};
use crate::infra::xmpp::event_parser::parse_xmpp_event;

pub struct ServerEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn ServerEventHandler>>>,
}

impl ServerEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn ServerEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            error!("Tried to set handlers on ServerEventHandlerQueue more than once.");
        }
    }

    pub async fn handle_event(&self, event: XMPPEvent) {
        let events = match parse_xmpp_event(event) {
            Ok(events) => events,
            Err(err) => {
                error!("Failed to parse XMPP event. {}", err);
                return;
            }
        };

        for event in events {
            self.handle_server_event(event).await;
        }
    }

    pub async fn handle_server_event(&self, event: ServerEvent) {
        let Some(handlers) = self.handlers.get() else {
            error!("Handlers were not set in ServerEventHandlerQueue. Dropping {:?}.", event);
            return;
        };

        let mut event = event;

        for handler in handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return;
                }
            }
        }
    }
}
