// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::privacy::models::{PrivacyList, PrivacyRule};

/// Keeps the cached privacy lists in sync with the server. All operations are no-ops when
/// the server does not support privacy lists.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PrivacyDomainService: Send + Sync {
    /// Discovers server support and loads all lists. Runs at most once per session.
    async fn initialize(&self) -> Result<()>;

    /// Returns the cached list or creates an unrestricted list named `name` on the server.
    async fn get_privacy_list(&self, name: &str) -> Result<Option<PrivacyList>>;
    /// All cached lists except the invisible list.
    async fn get_privacy_lists(&self) -> Result<Vec<PrivacyList>>;
    async fn get_active_list(&self) -> Result<Option<PrivacyList>>;
    async fn get_default_list(&self) -> Result<Option<PrivacyList>>;

    async fn set_list_as_active(&self, name: &str) -> Result<()>;
    async fn set_list_as_default(&self, name: &str) -> Result<()>;
    async fn decline_active_list(&self) -> Result<()>;
    async fn decline_default_list(&self) -> Result<()>;
    async fn remove_privacy_list(&self, name: &str) -> Result<()>;

    async fn add_rule(&self, list_name: &str, rule: PrivacyRule) -> Result<()>;
    async fn remove_rule(&self, list_name: &str, order: u32) -> Result<()>;

    async fn go_to_invisible(&self) -> Result<()>;
    async fn go_to_visible(&self) -> Result<()>;
    /// Asks the server whether the invisible list is active.
    async fn is_globally_invisible_list_active(&self) -> Result<bool>;
    async fn is_privacy_active(&self) -> Result<bool>;

    /// Handles a list change pushed by the server.
    async fn handle_list_changed(&self, name: &str) -> Result<()>;
    async fn clear_cache(&self) -> Result<()>;
}
