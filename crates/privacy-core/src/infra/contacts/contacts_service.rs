// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use xmpp_parsers::roster::Subscription;

use privacy_xmpp::mods;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::services::ContactsService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ContactsService for XMPPClient {
    async fn load_contacts(&self) -> Result<Vec<Contact>> {
        let roster = self.client.get_mod::<mods::Roster>();
        let items = roster.load_roster().await?.items;

        Ok(items
            .into_iter()
            .filter(|item| item.subscription != Subscription::Remove)
            .map(Contact::from)
            .collect())
    }
}
