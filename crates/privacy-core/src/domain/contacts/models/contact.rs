// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// A roster entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: UserId,
    pub name: Option<String>,
    pub groups: Vec<String>,
}

impl Contact {
    pub fn is_member_of(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}
