// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use jid::Jid;
use minidom::Element;

use crate::ns;
use crate::util::{ElementExt, ParseError};

/// XEP-0016: Privacy Lists
/// https://xmpp.org/extensions/xep-0016.html
///
/// The `<query/>` payload used for every privacy list request, response and push.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrivacyQuery {
    pub active: Option<ListSelection>,
    pub default: Option<ListSelection>,
    pub lists: Vec<PrivacyList>,
}

/// Content of an `<active/>` or `<default/>` element. A missing `name` attribute declines
/// the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ListSelection {
    Named(String),
    Declined,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrivacyList {
    pub name: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// `None` for the fall-through item which matches every entity.
    pub subject: Option<ItemSubject>,
    pub action: Action,
    pub order: u32,
    pub message: bool,
    pub iq: bool,
    pub presence_in: bool,
    pub presence_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemSubject {
    Jid(Jid),
    Group(String),
    Subscription(Subscription),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Subscription {
    Both,
    To,
    From,
    None,
}

impl PrivacyQuery {
    pub fn request_list(name: impl Into<String>) -> Self {
        PrivacyQuery {
            lists: vec![PrivacyList::named(name)],
            ..Default::default()
        }
    }

    pub fn active_list(selection: ListSelection) -> Self {
        PrivacyQuery {
            active: Some(selection),
            ..Default::default()
        }
    }

    pub fn default_list(selection: ListSelection) -> Self {
        PrivacyQuery {
            default: Some(selection),
            ..Default::default()
        }
    }
}

impl PrivacyList {
    /// A list without items. Sent in a `set` it deletes the list, in a `get` it requests it.
    pub fn named(name: impl Into<String>) -> Self {
        PrivacyList {
            name: name.into(),
            items: vec![],
        }
    }
}

impl ListSelection {
    pub fn name(&self) -> Option<&str> {
        match self {
            ListSelection::Named(name) => Some(name),
            ListSelection::Declined => None,
        }
    }
}

impl TryFrom<Element> for PrivacyQuery {
    type Error = ParseError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        root.expect_is("query", ns::PRIVACY)?;

        let mut query = PrivacyQuery::default();

        for child in root.children() {
            match child.name() {
                "active" => query.active = Some(ListSelection::from(child)),
                "default" => query.default = Some(ListSelection::from(child)),
                "list" => query.lists.push(PrivacyList::try_from(child.clone())?),
                _ => (),
            }
        }

        Ok(query)
    }
}

impl From<PrivacyQuery> for Element {
    fn from(value: PrivacyQuery) -> Self {
        Element::builder("query", ns::PRIVACY)
            .append_all(
                value
                    .active
                    .map(|selection| selection.into_element("active")),
            )
            .append_all(
                value
                    .default
                    .map(|selection| selection.into_element("default")),
            )
            .append_all(value.lists.into_iter().map(Element::from))
            .build()
    }
}

impl From<&Element> for ListSelection {
    fn from(value: &Element) -> Self {
        match value.attr("name") {
            Some(name) => ListSelection::Named(name.to_string()),
            None => ListSelection::Declined,
        }
    }
}

impl ListSelection {
    fn into_element(self, name: &str) -> Element {
        Element::builder(name, ns::PRIVACY)
            .attr("name", self.name().map(ToString::to_string))
            .build()
    }
}

impl TryFrom<Element> for PrivacyList {
    type Error = ParseError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        root.expect_is("list", ns::PRIVACY)?;

        let mut items = root
            .children()
            .filter(|child| child.is("item", ns::PRIVACY))
            .map(|child| Item::try_from(child.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        items.sort_by_key(|item| item.order);

        Ok(PrivacyList {
            name: root.attr_req("name")?.to_string(),
            items,
        })
    }
}

impl From<PrivacyList> for Element {
    fn from(value: PrivacyList) -> Self {
        Element::builder("list", ns::PRIVACY)
            .attr("name", value.name)
            .append_all(value.items.into_iter().map(Element::from))
            .build()
    }
}

impl TryFrom<Element> for Item {
    type Error = ParseError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        root.expect_is("item", ns::PRIVACY)?;

        let subject = match root.attr("type") {
            None => None,
            Some(r#type) => {
                let value = root.attr_req("value")?;
                Some(match r#type {
                    "jid" => ItemSubject::Jid(Jid::from_str(value).map_err(|err| {
                        ParseError::Generic {
                            msg: format!("Invalid JID '{}' in privacy item. {}", value, err),
                        }
                    })?),
                    "group" => ItemSubject::Group(value.to_string()),
                    "subscription" => {
                        ItemSubject::Subscription(Subscription::from_str(value).map_err(|_| {
                            ParseError::Generic {
                                msg: format!("Invalid subscription '{}' in privacy item.", value),
                            }
                        })?)
                    }
                    _ => {
                        return Err(ParseError::Generic {
                            msg: format!("Unknown privacy item type '{}'.", r#type),
                        })
                    }
                })
            }
        };

        let action = root.attr_req("action")?;

        Ok(Item {
            subject,
            action: Action::from_str(action).map_err(|_| ParseError::Generic {
                msg: format!("Invalid privacy item action '{}'.", action),
            })?,
            order: root.attr_req("order")?.parse::<u32>()?,
            message: root.has_child("message", ns::PRIVACY),
            iq: root.has_child("iq", ns::PRIVACY),
            presence_in: root.has_child("presence-in", ns::PRIVACY),
            presence_out: root.has_child("presence-out", ns::PRIVACY),
        })
    }
}

impl From<Item> for Element {
    fn from(value: Item) -> Self {
        let (r#type, subject_value) = match value.subject {
            None => (None, None),
            Some(ItemSubject::Jid(jid)) => (Some("jid"), Some(jid.to_string())),
            Some(ItemSubject::Group(group)) => (Some("group"), Some(group)),
            Some(ItemSubject::Subscription(subscription)) => {
                (Some("subscription"), Some(subscription.to_string()))
            }
        };

        let stanza_kinds = [
            ("message", value.message),
            ("iq", value.iq),
            ("presence-in", value.presence_in),
            ("presence-out", value.presence_out),
        ];

        Element::builder("item", ns::PRIVACY)
            .attr("type", r#type)
            .attr("value", subject_value)
            .attr("action", value.action.to_string())
            .attr("order", value.order.to_string())
            .append_all(
                stanza_kinds
                    .into_iter()
                    .filter(|(_, is_set)| *is_set)
                    .map(|(name, _)| Element::builder(name, ns::PRIVACY).build()),
            )
            .build()
    }
}
