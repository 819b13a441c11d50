// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// Tracks which roster contacts carry the "blocked" indicator.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PrivacyIndicatorsRepository: Send + Sync {
    /// Returns `true` if the indicator of `contact` changed.
    fn set_blocked(&self, contact: &UserId, is_blocked: bool) -> bool;
    fn is_blocked(&self, contact: &UserId) -> bool;
    /// Returns all blocked contacts sorted by id.
    fn get_all(&self) -> Vec<UserId>;
    fn clear(&self);
}
