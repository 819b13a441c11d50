// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::privacy::repos::PrivacyIndicatorsRepository;
use crate::domain::shared::models::UserId;

pub struct InMemoryPrivacyIndicatorsRepository {
    blocked_contacts: RwLock<HashSet<UserId>>,
}

impl InMemoryPrivacyIndicatorsRepository {
    pub fn new() -> Self {
        Self {
            blocked_contacts: Default::default(),
        }
    }
}

impl PrivacyIndicatorsRepository for InMemoryPrivacyIndicatorsRepository {
    fn set_blocked(&self, contact: &UserId, is_blocked: bool) -> bool {
        let mut blocked_contacts = self.blocked_contacts.write();
        if is_blocked {
            blocked_contacts.insert(contact.clone())
        } else {
            blocked_contacts.remove(contact)
        }
    }

    fn is_blocked(&self, contact: &UserId) -> bool {
        self.blocked_contacts.read().contains(contact)
    }

    fn get_all(&self) -> Vec<UserId> {
        let mut contacts = self
            .blocked_contacts
            .read()
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        contacts.sort();
        contacts
    }

    fn clear(&self) {
        self.blocked_contacts.write().clear()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_reports_changes_only() -> anyhow::Result<()> {
        let repo = InMemoryPrivacyIndicatorsRepository::new();
        let romeo = UserId::from_str("romeo@prose.org")?;

        assert!(repo.set_blocked(&romeo, true));
        assert!(!repo.set_blocked(&romeo, true));
        assert!(repo.is_blocked(&romeo));
        assert_eq!(repo.get_all(), vec![romeo.clone()]);

        assert!(repo.set_blocked(&romeo, false));
        assert!(!repo.set_blocked(&romeo, false));
        assert!(repo.get_all().is_empty());

        Ok(())
    }
}
