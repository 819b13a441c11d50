// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::Display;

use anyhow::Result;
use tracing::error;

use privacy_proc_macros::InjectDependencies;

use crate::app::deps::{DynPrivacyDomainService, DynPrivacyIndicatorsRepository};
use crate::dtos::{PrivacyList, PrivacyRule, UserId};

/// Manages the privacy lists of the connected account.
///
/// Failed requests are logged and reported as `false`, `None` or an empty list. The local state
/// is left untouched in that case.
#[derive(InjectDependencies)]
pub struct PrivacyService {
    #[inject]
    privacy_domain_service: DynPrivacyDomainService,
    #[inject]
    privacy_indicators_repo: DynPrivacyIndicatorsRepository,
}

impl PrivacyService {
    /// Returns the list named `name`, creating an unrestricted list if it doesn't exist yet.
    pub async fn get_privacy_list(&self, name: &str) -> Option<PrivacyList> {
        log_failure(
            format!("load privacy list '{}'", name),
            self.privacy_domain_service.get_privacy_list(name).await,
        )
        .flatten()
    }

    /// Returns all lists of the account except the one used for invisibility.
    pub async fn get_privacy_lists(&self) -> Vec<PrivacyList> {
        log_failure(
            "load privacy lists",
            self.privacy_domain_service.get_privacy_lists().await,
        )
        .unwrap_or_default()
    }

    pub async fn get_active_list(&self) -> Option<PrivacyList> {
        log_failure(
            "load active privacy list",
            self.privacy_domain_service.get_active_list().await,
        )
        .flatten()
    }

    pub async fn get_default_list(&self) -> Option<PrivacyList> {
        log_failure(
            "load default privacy list",
            self.privacy_domain_service.get_default_list().await,
        )
        .flatten()
    }

    pub async fn has_active_list(&self) -> bool {
        self.get_active_list().await.is_some()
    }

    pub async fn has_default_list(&self) -> bool {
        self.get_default_list().await.is_some()
    }

    pub async fn set_list_as_active(&self, name: &str) -> bool {
        log_failure(
            format!("activate privacy list '{}'", name),
            self.privacy_domain_service.set_list_as_active(name).await,
        )
        .is_some()
    }

    pub async fn set_list_as_default(&self, name: &str) -> bool {
        log_failure(
            format!("set privacy list '{}' as default", name),
            self.privacy_domain_service.set_list_as_default(name).await,
        )
        .is_some()
    }

    pub async fn decline_active_list(&self) -> bool {
        log_failure(
            "decline active privacy list",
            self.privacy_domain_service.decline_active_list().await,
        )
        .is_some()
    }

    pub async fn decline_default_list(&self) -> bool {
        log_failure(
            "decline default privacy list",
            self.privacy_domain_service.decline_default_list().await,
        )
        .is_some()
    }

    pub async fn remove_privacy_list(&self, name: &str) -> bool {
        log_failure(
            format!("remove privacy list '{}'", name),
            self.privacy_domain_service.remove_privacy_list(name).await,
        )
        .is_some()
    }

    /// Adds `rule` to the list named `list_name`, creating the list if needed.
    pub async fn add_rule(&self, list_name: &str, rule: PrivacyRule) -> bool {
        log_failure(
            format!("add rule to privacy list '{}'", list_name),
            self.privacy_domain_service.add_rule(list_name, rule).await,
        )
        .is_some()
    }

    pub async fn remove_rule(&self, list_name: &str, order: u32) -> bool {
        log_failure(
            format!("remove rule {} from privacy list '{}'", order, list_name),
            self.privacy_domain_service.remove_rule(list_name, order).await,
        )
        .is_some()
    }

    /// Hides our presence from everyone until `go_to_visible` is called.
    pub async fn go_to_invisible(&self) -> bool {
        log_failure(
            "go invisible",
            self.privacy_domain_service.go_to_invisible().await,
        )
        .is_some()
    }

    /// Leaves invisible mode and reactivates the list that was active before.
    pub async fn go_to_visible(&self) -> bool {
        log_failure(
            "go visible",
            self.privacy_domain_service.go_to_visible().await,
        )
        .is_some()
    }

    pub async fn is_globally_invisible_list_active(&self) -> bool {
        log_failure(
            "determine invisibility",
            self.privacy_domain_service
                .is_globally_invisible_list_active()
                .await,
        )
        .unwrap_or(false)
    }

    /// Returns `true` if the server supports privacy lists.
    pub async fn is_privacy_active(&self) -> bool {
        log_failure(
            "determine privacy list support",
            self.privacy_domain_service.is_privacy_active().await,
        )
        .unwrap_or(false)
    }

    /// The contacts blocked by the active list.
    pub fn blocked_contacts(&self) -> Vec<UserId> {
        self.privacy_indicators_repo.get_all()
    }

    pub fn is_contact_blocked(&self, id: &UserId) -> bool {
        self.privacy_indicators_repo.is_blocked(id)
    }
}

fn log_failure<T>(action: impl Display, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!("Failed to {}. {}", action, err);
            None
        }
    }
}
