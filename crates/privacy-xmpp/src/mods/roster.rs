// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::iq::Iq;
use xmpp_parsers::roster::Roster as Query;

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::util::RequestError;

/// RFC 6121: Managing the Roster
/// https://xmpp.org/rfcs/rfc6121.html#roster
#[derive(Default, Clone)]
pub struct Roster {
    ctx: ModuleContext,
}

impl Module for Roster {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }
}

impl Roster {
    pub async fn load_roster(&self) -> Result<Query, RequestError> {
        let response = self
            .ctx
            .send_iq(Iq::from_get(
                self.ctx.generate_id(),
                Query {
                    ver: None,
                    items: vec![],
                },
            ))
            .await?
            .ok_or(RequestError::UnexpectedResponse)?;

        Ok(Query::try_from(response)?)
    }
}
