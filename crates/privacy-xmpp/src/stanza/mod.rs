// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use privacy::{
    Action, Item, ItemSubject, ListSelection, PrivacyList, PrivacyQuery, Subscription,
};

pub mod ns;
pub mod privacy;
