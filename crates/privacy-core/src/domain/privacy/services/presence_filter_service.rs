// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::privacy::models::{PrivacyList, PrivacyRule};

/// Mirrors the rules of the active list onto roster contacts and sends directed presence to
/// the entities whose outgoing presence a rule filters.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PresenceFilterService: Send + Sync {
    async fn set_indicators_for_list(&self, list: &PrivacyList) -> Result<()>;
    async fn remove_indicators_for_list(&self, list: &PrivacyList) -> Result<()>;

    /// Applies `rule` if the list named `list_name` is active.
    async fn rule_added(&self, list_name: &str, rule: &PrivacyRule) -> Result<()>;
    /// Reverts `rule` if the list named `list_name` is active.
    async fn rule_removed(&self, list_name: &str, rule: &PrivacyRule) -> Result<()>;
}
