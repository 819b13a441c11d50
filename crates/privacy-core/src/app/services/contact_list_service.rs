// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use privacy_proc_macros::InjectDependencies;

use crate::app::deps::{DynContactsRepository, DynPrivacyIndicatorsRepository};
use crate::dtos::Contact;

#[derive(InjectDependencies)]
pub struct ContactListService {
    #[inject]
    contacts_repo: DynContactsRepository,
    #[inject]
    privacy_indicators_repo: DynPrivacyIndicatorsRepository,
}

impl ContactListService {
    /// Returns the roster, flagging the contacts blocked by the active privacy list.
    pub async fn load_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts_repo.get_all().await?;
        Ok(contacts
            .into_iter()
            .map(|contact| Contact {
                is_blocked: self.privacy_indicators_repo.is_blocked(&contact.id),
                id: contact.id,
                name: contact.name,
                groups: contact.groups,
            })
            .collect())
    }
}
