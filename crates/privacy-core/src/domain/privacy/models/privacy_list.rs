// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::privacy::models::{PrivacyAction, PrivacyRule, PrivacySubject, StanzaFilter};

/// Order of the allow-everything rule of a freshly created list.
pub const DEFAULT_CATCH_ALL_ORDER: u32 = 999_999;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PrivacyListError {
    #[error("A rule with order {order} already exists in list '{list}'.")]
    DuplicateOrder { list: String, order: u32 },
    #[error("List '{list}' has no rule with order {order}.")]
    RuleNotFound { list: String, order: u32 },
    #[error("Cannot remove the last rule of list '{list}'. Delete the list instead.")]
    LastRule { list: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrivacyList {
    pub name: String,
    rules: Vec<PrivacyRule>,
    pub is_active: bool,
    pub is_default: bool,
}

impl PrivacyList {
    pub fn new(name: impl Into<String>, mut rules: Vec<PrivacyRule>) -> Self {
        rules.sort_by_key(|rule| rule.order);
        PrivacyList {
            name: name.into(),
            rules,
            is_active: false,
            is_default: false,
        }
    }

    /// A list which restricts nothing.
    pub fn catch_all(name: impl Into<String>, order: u32) -> Self {
        Self::new(name, vec![PrivacyRule::allow_everyone(order)])
    }

    /// A list which blocks outgoing presence to everyone.
    pub fn invisible(name: impl Into<String>) -> Self {
        Self::new(
            name,
            vec![PrivacyRule::new(PrivacySubject::Everyone, PrivacyAction::Deny, 1)
                .with_filter(StanzaFilter::presence_out())],
        )
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

impl PrivacyList {
    /// Rules sorted by ascending order.
    pub fn rules(&self) -> &[PrivacyRule] {
        &self.rules
    }

    pub fn rule(&self, order: u32) -> Option<&PrivacyRule> {
        self.rules.iter().find(|rule| rule.order == order)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn add_rule(&mut self, rule: PrivacyRule) -> Result<(), PrivacyListError> {
        if self.rule(rule.order).is_some() {
            return Err(PrivacyListError::DuplicateOrder {
                list: self.name.clone(),
                order: rule.order,
            });
        }

        let idx = self.rules.partition_point(|r| r.order < rule.order);
        self.rules.insert(idx, rule);
        Ok(())
    }

    /// Removes and returns the rule with `order`. The last rule cannot be removed since a list
    /// without rules cannot exist on the server.
    pub fn remove_rule(&mut self, order: u32) -> Result<PrivacyRule, PrivacyListError> {
        let Some(idx) = self.rules.iter().position(|rule| rule.order == order) else {
            return Err(PrivacyListError::RuleNotFound {
                list: self.name.clone(),
                order,
            });
        };

        if self.rules.len() == 1 {
            return Err(PrivacyListError::LastRule {
                list: self.name.clone(),
            });
        }

        Ok(self.rules.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sorts_rules_by_order() {
        let list = PrivacyList::new(
            "work",
            vec![
                PrivacyRule::allow_everyone(10),
                PrivacyRule::deny(PrivacySubject::Group("Family".to_string()), 2),
            ],
        );

        assert_eq!(
            list.rules().iter().map(|r| r.order).collect::<Vec<_>>(),
            vec![2, 10]
        );
    }

    #[test]
    fn test_add_rule_rejects_duplicate_order() {
        let mut list = PrivacyList::catch_all("work", DEFAULT_CATCH_ALL_ORDER);

        assert_eq!(
            list.add_rule(PrivacyRule::deny(PrivacySubject::Everyone, DEFAULT_CATCH_ALL_ORDER)),
            Err(PrivacyListError::DuplicateOrder {
                list: "work".to_string(),
                order: DEFAULT_CATCH_ALL_ORDER
            })
        );

        list.add_rule(PrivacyRule::deny(PrivacySubject::Group("Work".to_string()), 5))
            .unwrap();
        list.add_rule(PrivacyRule::deny(PrivacySubject::Group("Family".to_string()), 1))
            .unwrap();

        assert_eq!(
            list.rules().iter().map(|r| r.order).collect::<Vec<_>>(),
            vec![1, 5, DEFAULT_CATCH_ALL_ORDER]
        );
    }

    #[test]
    fn test_remove_rule() {
        let mut list = PrivacyList::catch_all("work", 100);
        list.add_rule(PrivacyRule::deny(PrivacySubject::Group("Work".to_string()), 5))
            .unwrap();

        assert_eq!(
            list.remove_rule(7),
            Err(PrivacyListError::RuleNotFound {
                list: "work".to_string(),
                order: 7
            })
        );
        assert_eq!(
            list.remove_rule(5),
            Ok(PrivacyRule::deny(PrivacySubject::Group("Work".to_string()), 5))
        );
        assert_eq!(
            list.remove_rule(100),
            Err(PrivacyListError::LastRule {
                list: "work".to_string()
            })
        );
    }

    #[test]
    fn test_invisible_list() {
        let list = PrivacyList::invisible("invisible");
        assert!(list.has_name("Invisible"));
        assert_eq!(list.rules().len(), 1);
        assert!(list.rules()[0].is_deny());
        assert!(list.rules()[0].filters_presence_out());
        assert_eq!(list.rules()[0].subject, PrivacySubject::Everyone);
    }
}
