// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::Jid;

use crate::domain::presence::models::OutboundPresence;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PresenceService: Send + Sync {
    /// Sends `presence` to `to` only, bypassing the regular broadcast.
    async fn send_presence_to(&self, to: &Jid, presence: &OutboundPresence) -> Result<()>;
    async fn broadcast_presence(&self, presence: &OutboundPresence) -> Result<()>;
}
