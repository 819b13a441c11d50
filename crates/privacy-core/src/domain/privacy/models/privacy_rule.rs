// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;

/// The entities a rule applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum PrivacySubject {
    /// The fall-through rule without a type, matching every entity.
    Everyone,
    Jid(Jid),
    /// All roster contacts in the named group.
    Group(String),
    Subscription(SubscriptionState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Both,
    To,
    From,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PrivacyAction {
    Allow,
    Deny,
}

/// The stanza kinds a rule is restricted to. A rule without any flag applies to everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StanzaFilter {
    pub message: bool,
    pub iq: bool,
    pub presence_in: bool,
    pub presence_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrivacyRule {
    pub subject: PrivacySubject,
    pub action: PrivacyAction,
    /// Unique within the owning list. Lower values are evaluated first.
    pub order: u32,
    pub filter: StanzaFilter,
}

impl StanzaFilter {
    pub fn presence_out() -> Self {
        StanzaFilter {
            presence_out: true,
            ..Default::default()
        }
    }
}

impl PrivacyRule {
    pub fn new(subject: PrivacySubject, action: PrivacyAction, order: u32) -> Self {
        PrivacyRule {
            subject,
            action,
            order,
            filter: Default::default(),
        }
    }

    pub fn allow_everyone(order: u32) -> Self {
        Self::new(PrivacySubject::Everyone, PrivacyAction::Allow, order)
    }

    pub fn deny(subject: PrivacySubject, order: u32) -> Self {
        Self::new(subject, PrivacyAction::Deny, order)
    }

    pub fn with_filter(mut self, filter: StanzaFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn is_deny(&self) -> bool {
        self.action == PrivacyAction::Deny
    }

    pub fn filters_presence_out(&self) -> bool {
        self.filter.presence_out
    }
}
