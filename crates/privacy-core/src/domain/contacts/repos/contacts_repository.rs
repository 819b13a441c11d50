// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::contacts::models::Contact;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactsRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Contact>>;
    async fn clear_cache(&self) -> Result<()>;
}
