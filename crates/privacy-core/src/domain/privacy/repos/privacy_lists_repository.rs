// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::privacy::models::PrivacyList;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait PrivacyListsReadOnlyRepository: Send + Sync {
    fn get(&self, name: &str) -> Option<PrivacyList>;
    /// Returns all lists sorted by name.
    fn get_all(&self) -> Vec<PrivacyList>;
    fn get_active(&self) -> Option<PrivacyList>;
    fn get_default(&self) -> Option<PrivacyList>;
}

pub trait PrivacyListsRepository: PrivacyListsReadOnlyRepository {
    /// Inserts or replaces `list`. The flags of `list` are applied as they are.
    fn put(&self, list: PrivacyList);

    /// Marks the list named `name` as active and all others as inactive. Passing `None`
    /// deactivates every list. Returns the previously active list.
    fn set_active(&self, name: Option<&str>) -> Option<PrivacyList>;

    /// Same as `set_active` but for the default flag.
    fn set_default(&self, name: Option<&str>) -> Option<PrivacyList>;

    fn delete(&self, name: &str) -> Option<PrivacyList>;
    fn delete_all(&self);
}
