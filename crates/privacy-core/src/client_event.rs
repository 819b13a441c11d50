// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use privacy_xmpp::ConnectionError;

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// The blocked indicator of these contacts changed.
    ContactChanged { ids: Vec<UserId> },

    /// Privacy lists were loaded, created, edited or removed.
    PrivacyListsChanged,

    /// The server accepted `name` as the active list of this session.
    PrivacyListActivated { name: String },

    /// The list `name` is no longer active. No list is active now.
    PrivacyListDeactivated { name: String },

    PrivacyListSetAsDefault { name: String },

    PrivacyListRemovedAsDefault { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
}
