// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use jid::FullJid;
use parking_lot::RwLock;

use crate::domain::connection::models::{ConnectionProperties, ServerFeatures};
use crate::domain::presence::models::{OutboundPresence, OwnPresence};
use crate::domain::privacy::models::DEFAULT_CATCH_ALL_ORDER;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How long to wait for the response to a request before failing it.
    pub request_timeout: Duration,
    /// The order of the allow-everything rule in lists created on demand.
    pub catch_all_rule_order: u32,
    /// The name of the list which hides our presence from everyone.
    pub invisible_list_name: String,
    /// The priority of the presence we send after a contact was unblocked.
    pub real_presence_priority: i8,
}

pub struct AppContext {
    pub connection_properties: RwLock<Option<ConnectionProperties>>,
    pub own_presence: RwLock<OwnPresence>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            connection_properties: Default::default(),
            own_presence: Default::default(),
            config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(15),
            catch_all_rule_order: DEFAULT_CATCH_ALL_ORDER,
            invisible_list_name: "invisible".to_string(),
            real_presence_priority: 1,
        }
    }
}

impl AppContext {
    pub fn connected_jid(&self) -> Result<FullJid> {
        self.connection_properties
            .read()
            .as_ref()
            .map(|p| p.connected_jid.clone())
            .ok_or(anyhow::anyhow!(
                "Failed to read the user's JID since the client is not connected."
            ))
    }

    pub fn server_features(&self) -> Result<ServerFeatures> {
        self.connection_properties
            .read()
            .as_ref()
            .map(|p| p.server_features.clone())
            .ok_or(anyhow::anyhow!(
                "Failed to read the server features since the client is not connected."
            ))
    }

    pub fn is_invisible_list_name(&self, name: &str) -> bool {
        self.config.invisible_list_name.eq_ignore_ascii_case(name)
    }
}

impl AppContext {
    pub fn own_presence(&self) -> OwnPresence {
        self.own_presence.read().clone()
    }

    pub fn set_own_presence(&self, presence: OwnPresence) {
        *self.own_presence.write() = presence;
    }

    /// The presence we broadcast, carrying the priority of our own presence.
    pub fn available_presence(&self) -> OutboundPresence {
        self.own_presence.read().to_broadcast()
    }

    /// The presence directed at a contact that should see us as we are again.
    pub fn real_presence(&self) -> OutboundPresence {
        self.own_presence
            .read()
            .to_outbound(self.config.real_presence_priority)
    }
}

impl AppContext {
    pub fn set_connection_properties(&self, properties: ConnectionProperties) {
        self.connection_properties.write().replace(properties);
    }

    pub fn reset_connection_properties(&self) {
        self.connection_properties.write().take();
    }
}
