// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::Jid;

use privacy_xmpp::mods;

use crate::domain::presence::models::OutboundPresence;
use crate::domain::presence::services::PresenceService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl PresenceService for XMPPClient {
    async fn send_presence_to(&self, to: &Jid, presence: &OutboundPresence) -> Result<()> {
        self.send_presence(Some(to.clone()), presence)
    }

    async fn broadcast_presence(&self, presence: &OutboundPresence) -> Result<()> {
        self.send_presence(None, presence)
    }
}

impl XMPPClient {
    fn send_presence(&self, to: Option<Jid>, presence: &OutboundPresence) -> Result<()> {
        let status = self.client.get_mod::<mods::Status>();

        match presence {
            OutboundPresence::Unavailable => status.send_unavailable(to),
            OutboundPresence::Available {
                availability,
                status: status_text,
                priority,
            } => status.send_available(
                to,
                (*availability).into(),
                status_text.as_deref(),
                *priority,
            ),
        }
    }
}
