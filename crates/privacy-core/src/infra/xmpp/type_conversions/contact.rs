// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::roster;

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::UserId;

impl From<roster::Item> for Contact {
    fn from(value: roster::Item) -> Self {
        Contact {
            id: UserId::from(value.jid),
            name: value.name,
            groups: value.groups.into_iter().map(|group| group.0).collect(),
        }
    }
}
