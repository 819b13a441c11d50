// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connected_client::{ClientTestAdditions, ConnectedClient};
pub use connector::{Connection, Connector};
pub use incrementing_id_provider::IncrementingIDProvider;

mod connector;

/// The account every `ConnectedClient` is logged in with.
pub const OUR_JID: &str = "test@prose.org/test";

#[macro_export]
macro_rules! jid {
    ($jid:expr) => {
        $jid.parse::<jid::Jid>().unwrap()
    };
}

#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

#[macro_export]
macro_rules! full {
    ($jid:expr) => {
        $jid.parse::<jid::FullJid>().unwrap()
    };
}
