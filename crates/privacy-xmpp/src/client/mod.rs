// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;

pub use builder::{ClientBuilder, ConnectorProvider, EventHandler};
pub use client::Client;
pub use module_context::ModuleContext;

use crate::connector::ConnectionError;
use crate::mods::AnyModule;

mod builder;
mod client;
mod module_context;

pub(crate) type ModuleLookup = Vec<(TypeId, Box<dyn AnyModule>)>;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}
