// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connector::{
    Connection, ConnectionError, ConnectionEvent, ConnectionEventHandler, Connector, PinnedFuture,
};

mod connector;
