// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::FullJid;

use crate::domain::connection::models::ServerFeatures;

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionProperties {
    pub connected_jid: FullJid,
    pub server_features: ServerFeatures,
}
