// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::privacy::models::PrivacyList;
use crate::domain::privacy::repos::{PrivacyListsReadOnlyRepository, PrivacyListsRepository};

/// Session scoped cache of the account's privacy lists, keyed by name.
pub struct InMemoryPrivacyListsRepository {
    lists: RwLock<HashMap<String, PrivacyList>>,
}

impl InMemoryPrivacyListsRepository {
    pub fn new() -> Self {
        Self {
            lists: Default::default(),
        }
    }
}

impl PrivacyListsReadOnlyRepository for InMemoryPrivacyListsRepository {
    fn get(&self, name: &str) -> Option<PrivacyList> {
        self.lists.read().get(name).cloned()
    }

    fn get_all(&self) -> Vec<PrivacyList> {
        let mut lists = self.lists.read().values().cloned().collect::<Vec<_>>();
        lists.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
        lists
    }

    fn get_active(&self) -> Option<PrivacyList> {
        self.lists
            .read()
            .values()
            .find(|list| list.is_active)
            .cloned()
    }

    fn get_default(&self) -> Option<PrivacyList> {
        self.lists
            .read()
            .values()
            .find(|list| list.is_default)
            .cloned()
    }
}

impl PrivacyListsRepository for InMemoryPrivacyListsRepository {
    fn put(&self, list: PrivacyList) {
        let mut lists = self.lists.write();

        if list.is_active {
            lists.values_mut().for_each(|l| l.is_active = false);
        }
        if list.is_default {
            lists.values_mut().for_each(|l| l.is_default = false);
        }

        lists.insert(list.name.clone(), list);
    }

    fn set_active(&self, name: Option<&str>) -> Option<PrivacyList> {
        let mut lists = self.lists.write();
        let previous = lists.values().find(|list| list.is_active).cloned();

        for list in lists.values_mut() {
            list.is_active = Some(list.name.as_str()) == name;
        }

        previous
    }

    fn set_default(&self, name: Option<&str>) -> Option<PrivacyList> {
        let mut lists = self.lists.write();
        let previous = lists.values().find(|list| list.is_default).cloned();

        for list in lists.values_mut() {
            list.is_default = Some(list.name.as_str()) == name;
        }

        previous
    }

    fn delete(&self, name: &str) -> Option<PrivacyList> {
        self.lists.write().remove(name)
    }

    fn delete_all(&self) {
        self.lists.write().clear()
    }
}
