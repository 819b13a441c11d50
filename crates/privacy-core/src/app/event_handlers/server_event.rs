// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use privacy_xmpp::ConnectionError;

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Event related to the connection status.
    Connection(ConnectionEvent),
    /// Events about privacy lists which were modified on the server.
    PrivacyList(PrivacyListEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrivacyListEvent {
    pub name: String,
    pub r#type: PrivacyListEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrivacyListEventType {
    /// The list was created, edited or deleted, possibly by another resource.
    Changed,
}

impl From<ConnectionEvent> for ServerEvent {
    fn from(value: ConnectionEvent) -> Self {
        Self::Connection(value)
    }
}

impl From<PrivacyListEvent> for ServerEvent {
    fn from(value: PrivacyListEvent) -> Self {
        Self::PrivacyList(value)
    }
}
