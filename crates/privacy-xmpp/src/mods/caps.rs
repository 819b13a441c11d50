// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::disco::{DiscoInfoQuery, DiscoInfoResult};
use xmpp_parsers::iq::Iq;

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::util::RequestError;

/// XEP-0030: Service Discovery
/// https://xmpp.org/extensions/xep-0030.html
#[derive(Default, Clone)]
pub struct Caps {
    ctx: ModuleContext,
}

impl Module for Caps {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }
}

impl Caps {
    /// Asks our own server which features it supports.
    pub async fn query_server_features(&self) -> Result<DiscoInfoResult, RequestError> {
        let query = Iq::from_get(self.ctx.generate_id(), DiscoInfoQuery { node: None })
            .with_to(self.ctx.server_jid()?);

        let Some(payload) = self.ctx.send_iq(query).await? else {
            return Err(RequestError::UnexpectedResponse);
        };

        Ok(DiscoInfoResult::try_from(payload)?)
    }
}
