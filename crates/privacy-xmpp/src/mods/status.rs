// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;
use xmpp_parsers::presence;
use xmpp_parsers::presence::Presence;

use crate::client::ModuleContext;
use crate::mods::Module;

#[derive(Default, Clone)]
pub struct Status {
    ctx: ModuleContext,
}

impl Module for Status {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context;
    }
}

/// XMPP: Instant Messaging and Presence
/// https://xmpp.org/rfcs/rfc6121.html#presence
///
/// A `to` of `None` broadcasts the presence, otherwise it is sent as directed presence.
impl Status {
    pub fn send_unavailable(&self, to: Option<Jid>) -> Result<()> {
        let mut presence = Presence::new(presence::Type::Unavailable);
        presence.to = to;
        self.ctx.send_stanza(presence)
    }

    pub fn send_available(
        &self,
        to: Option<Jid>,
        show: Option<presence::Show>,
        status: Option<&str>,
        priority: i8,
    ) -> Result<()> {
        let mut presence = Presence::new(presence::Type::None);
        presence.to = to;
        presence.show = show;
        presence.priority = priority;
        if let Some(status) = status {
            presence.set_status("", status);
        }
        self.ctx.send_stanza(presence)
    }
}
