// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::privacy::models::{PrivacyList, PrivacyListNames};

/// The server side list store.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PrivacyListService: Send + Sync {
    async fn load_privacy_list_names(&self) -> Result<PrivacyListNames>;
    /// Returns `None` if the server does not know a list named `name`.
    async fn load_privacy_list(&self, name: &str) -> Result<Option<PrivacyList>>;
    /// Creates the list or replaces all of its rules.
    async fn save_privacy_list(&self, list: &PrivacyList) -> Result<()>;
    async fn delete_privacy_list(&self, name: &str) -> Result<()>;

    async fn set_active_list(&self, name: &str) -> Result<()>;
    async fn decline_active_list(&self) -> Result<()>;
    async fn set_default_list(&self, name: &str) -> Result<()>;
    async fn decline_default_list(&self) -> Result<()>;
}
