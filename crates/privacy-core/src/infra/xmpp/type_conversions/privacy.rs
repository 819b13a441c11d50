// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use privacy_xmpp::stanza::privacy as xmpp;

use crate::domain::privacy::models::{
    PrivacyAction, PrivacyList, PrivacyListNames, PrivacyRule, PrivacySubject, StanzaFilter,
    SubscriptionState,
};

impl From<xmpp::PrivacyQuery> for PrivacyListNames {
    fn from(value: xmpp::PrivacyQuery) -> Self {
        PrivacyListNames {
            names: value.lists.into_iter().map(|list| list.name).collect(),
            active: value
                .active
                .and_then(|selection| selection.name().map(ToString::to_string)),
            default: value
                .default
                .and_then(|selection| selection.name().map(ToString::to_string)),
        }
    }
}

impl From<xmpp::PrivacyList> for PrivacyList {
    fn from(value: xmpp::PrivacyList) -> Self {
        PrivacyList::new(
            value.name,
            value.items.into_iter().map(PrivacyRule::from).collect(),
        )
    }
}

impl From<&PrivacyList> for xmpp::PrivacyList {
    fn from(value: &PrivacyList) -> Self {
        xmpp::PrivacyList {
            name: value.name.clone(),
            items: value.rules().iter().cloned().map(xmpp::Item::from).collect(),
        }
    }
}

impl From<xmpp::Item> for PrivacyRule {
    fn from(value: xmpp::Item) -> Self {
        let subject = match value.subject {
            None => PrivacySubject::Everyone,
            Some(xmpp::ItemSubject::Jid(jid)) => PrivacySubject::Jid(jid),
            Some(xmpp::ItemSubject::Group(group)) => PrivacySubject::Group(group),
            Some(xmpp::ItemSubject::Subscription(subscription)) => {
                PrivacySubject::Subscription(subscription.into())
            }
        };

        PrivacyRule {
            subject,
            action: value.action.into(),
            order: value.order,
            filter: StanzaFilter {
                message: value.message,
                iq: value.iq,
                presence_in: value.presence_in,
                presence_out: value.presence_out,
            },
        }
    }
}

impl From<PrivacyRule> for xmpp::Item {
    fn from(value: PrivacyRule) -> Self {
        let subject = match value.subject {
            PrivacySubject::Everyone => None,
            PrivacySubject::Jid(jid) => Some(xmpp::ItemSubject::Jid(jid)),
            PrivacySubject::Group(group) => Some(xmpp::ItemSubject::Group(group)),
            PrivacySubject::Subscription(subscription) => {
                Some(xmpp::ItemSubject::Subscription(subscription.into()))
            }
        };

        xmpp::Item {
            subject,
            action: value.action.into(),
            order: value.order,
            message: value.filter.message,
            iq: value.filter.iq,
            presence_in: value.filter.presence_in,
            presence_out: value.filter.presence_out,
        }
    }
}

impl From<xmpp::Action> for PrivacyAction {
    fn from(value: xmpp::Action) -> Self {
        match value {
            xmpp::Action::Allow => PrivacyAction::Allow,
            xmpp::Action::Deny => PrivacyAction::Deny,
        }
    }
}

impl From<PrivacyAction> for xmpp::Action {
    fn from(value: PrivacyAction) -> Self {
        match value {
            PrivacyAction::Allow => xmpp::Action::Allow,
            PrivacyAction::Deny => xmpp::Action::Deny,
        }
    }
}

impl From<xmpp::Subscription> for SubscriptionState {
    fn from(value: xmpp::Subscription) -> Self {
        match value {
            xmpp::Subscription::Both => SubscriptionState::Both,
            xmpp::Subscription::To => SubscriptionState::To,
            xmpp::Subscription::From => SubscriptionState::From,
            xmpp::Subscription::None => SubscriptionState::None,
        }
    }
}

impl From<SubscriptionState> for xmpp::Subscription {
    fn from(value: SubscriptionState) -> Self {
        match value {
            SubscriptionState::Both => xmpp::Subscription::Both,
            SubscriptionState::To => xmpp::Subscription::To,
            SubscriptionState::From => xmpp::Subscription::From,
            SubscriptionState::None => xmpp::Subscription::None,
        }
    }
}
