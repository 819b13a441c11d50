// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::debug;

use privacy_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynPresenceService};
use crate::domain::presence::models::OwnPresence;
use crate::dtos::Availability;

#[derive(InjectDependencies)]
pub struct AccountService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    presence_service: DynPresenceService,
}

impl AccountService {
    pub fn availability(&self) -> Availability {
        self.ctx.own_presence().availability
    }

    /// Updates and broadcasts our presence. Contacts blocked by the active list keep seeing us
    /// as unavailable since the server filters the broadcast.
    pub async fn set_presence(
        &self,
        availability: Availability,
        status: Option<&str>,
    ) -> Result<()> {
        debug!("Setting presence to {} ({:?})", availability, status);

        let presence = OwnPresence {
            availability,
            status: status.map(ToString::to_string),
            priority: self.ctx.own_presence().priority,
        };
        self.update_presence(presence).await
    }

    pub async fn set_priority(&self, priority: i8) -> Result<()> {
        debug!("Setting presence priority to {}", priority);

        let presence = OwnPresence {
            priority,
            ..self.ctx.own_presence()
        };
        self.update_presence(presence).await
    }

    async fn update_presence(&self, presence: OwnPresence) -> Result<()> {
        self.ctx.set_own_presence(presence);

        if self.ctx.connected_jid().is_err() {
            return Ok(());
        }

        self.presence_service
            .broadcast_presence(&self.ctx.available_presence())
            .await
    }
}
