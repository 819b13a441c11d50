// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;
use minidom::Element;
use tracing::warn;
use xmpp_parsers::iq::{Iq, IqType};

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::mods::Module;
use crate::ns;
use crate::stanza::privacy::{ListSelection, PrivacyList, PrivacyQuery};
use crate::util::RequestError;

/// XEP-0016: Privacy Lists
/// https://xmpp.org/extensions/xep-0016.html
#[derive(Default, Clone)]
pub struct Privacy {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The server pushed a change of the list `name`, made by this or another resource.
    ListChanged { name: String },
}

impl Module for Privacy {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn handle_iq_stanza(&self, stanza: &Iq) -> Result<()> {
        let IqType::Set(payload) = &stanza.payload else {
            return Ok(());
        };

        if !payload.is("query", ns::PRIVACY) {
            return Ok(());
        }

        // Only our own server may push list changes.
        if let Some(from) = &stanza.from {
            let is_own_account = self
                .ctx
                .bare_jid()
                .map(|bare| &Jid::from(bare) == from)
                .unwrap_or(false);

            if !is_own_account {
                warn!("Ignoring privacy list push from foreign entity {}.", from);
                return Ok(());
            }
        }

        let query = PrivacyQuery::try_from(payload.clone())?;

        self.ctx.send_stanza(Iq {
            from: None,
            to: stanza.from.clone(),
            id: stanza.id.clone(),
            payload: IqType::Result(None),
        })?;

        for list in query.lists {
            self.ctx
                .schedule_event(ClientEvent::Privacy(Event::ListChanged { name: list.name }));
        }

        Ok(())
    }
}

impl Privacy {
    /// Loads the names of all lists together with the current active and default selection.
    pub async fn load_privacy_lists(&self) -> Result<PrivacyQuery, RequestError> {
        let response = self.get(PrivacyQuery::default()).await?;

        let Some(response) = response else {
            return Ok(PrivacyQuery::default());
        };

        Ok(PrivacyQuery::try_from(response)?)
    }

    pub async fn load_privacy_list(&self, name: &str) -> Result<PrivacyList, RequestError> {
        let response = self
            .get(PrivacyQuery::request_list(name))
            .await?
            .ok_or(RequestError::UnexpectedResponse)?;

        PrivacyQuery::try_from(response)?
            .lists
            .into_iter()
            .find(|list| list.name == name)
            .ok_or(RequestError::UnexpectedResponse)
    }

    /// Creates the list or replaces all of its items.
    pub async fn save_privacy_list(&self, list: PrivacyList) -> Result<(), RequestError> {
        if list.items.is_empty() {
            return Err(RequestError::Generic {
                msg: format!("Refusing to save list '{}' without items.", list.name),
            });
        }

        self.set(PrivacyQuery {
            lists: vec![list],
            ..Default::default()
        })
        .await
    }

    pub async fn delete_privacy_list(&self, name: &str) -> Result<(), RequestError> {
        self.set(PrivacyQuery::request_list(name)).await
    }

    /// Activates the list `name` for this session or declines the active list if `name` is
    /// `None`.
    pub async fn set_active_list(&self, name: Option<&str>) -> Result<(), RequestError> {
        self.set(PrivacyQuery::active_list(Self::selection(name)))
            .await
    }

    /// Makes `name` the default list of the account or declines the default list if `name`
    /// is `None`.
    pub async fn set_default_list(&self, name: Option<&str>) -> Result<(), RequestError> {
        self.set(PrivacyQuery::default_list(Self::selection(name)))
            .await
    }
}

impl Privacy {
    fn selection(name: Option<&str>) -> ListSelection {
        match name {
            Some(name) => ListSelection::Named(name.to_string()),
            None => ListSelection::Declined,
        }
    }

    async fn get(&self, query: PrivacyQuery) -> Result<Option<Element>, RequestError> {
        self.ctx
            .send_iq(Iq {
                from: None,
                to: None,
                id: self.ctx.generate_id(),
                payload: IqType::Get(query.into()),
            })
            .await
    }

    async fn set(&self, query: PrivacyQuery) -> Result<(), RequestError> {
        self.ctx
            .send_iq(Iq {
                from: None,
                to: None,
                id: self.ctx.generate_id(),
                payload: IqType::Set(query.into()),
            })
            .await?;
        Ok(())
    }
}
