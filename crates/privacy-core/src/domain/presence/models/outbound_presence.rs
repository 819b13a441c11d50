// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::Availability;

/// The presence the user configured for the account.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnPresence {
    pub availability: Availability,
    pub status: Option<String>,
    /// The priority of this resource (RFC 6121 §4.7.2.3).
    pub priority: i8,
}

/// A presence stanza about to be sent, either broadcast or directed at a single entity.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundPresence {
    Unavailable,
    Available {
        availability: Availability,
        status: Option<String>,
        priority: i8,
    },
}

impl OwnPresence {
    /// Our presence as broadcast to everyone.
    pub fn to_broadcast(&self) -> OutboundPresence {
        self.to_outbound(self.priority)
    }

    pub fn to_outbound(&self, priority: i8) -> OutboundPresence {
        OutboundPresence::Available {
            availability: self.availability,
            status: self.status.clone(),
            priority,
        }
    }
}
