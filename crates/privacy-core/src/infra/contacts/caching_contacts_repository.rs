// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::app::deps::DynContactsService;
use crate::domain::contacts::models::Contact;
use crate::domain::contacts::repos::ContactsRepository;

/// Loads the roster once per session.
pub struct CachingContactsRepository {
    service: DynContactsService,
    contacts: RwLock<Option<Vec<Contact>>>,
}

impl CachingContactsRepository {
    pub fn new(service: DynContactsService) -> Self {
        Self {
            service,
            contacts: Default::default(),
        }
    }
}

#[async_trait]
impl ContactsRepository for CachingContactsRepository {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        self.load_contacts_if_needed().await?;
        Ok(self.contacts.read().clone().unwrap_or_default())
    }

    async fn clear_cache(&self) -> Result<()> {
        self.contacts.write().take();
        Ok(())
    }
}

impl CachingContactsRepository {
    async fn load_contacts_if_needed(&self) -> Result<()> {
        if self.contacts.read().is_some() {
            return Ok(());
        }

        let contacts = self.service.load_contacts().await?;
        self.contacts.write().replace(contacts);
        Ok(())
    }
}
