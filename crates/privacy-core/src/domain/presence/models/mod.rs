// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use outbound_presence::{OutboundPresence, OwnPresence};

mod outbound_presence;
