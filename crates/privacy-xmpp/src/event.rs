// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::{client, mods};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Client(client::Event),
    Privacy(mods::privacy::Event),
}
