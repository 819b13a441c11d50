// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use privacy_list::{PrivacyList, PrivacyListError, DEFAULT_CATCH_ALL_ORDER};
pub use privacy_list_names::PrivacyListNames;
pub use privacy_rule::{PrivacyAction, PrivacyRule, PrivacySubject, StanzaFilter, SubscriptionState};

mod privacy_list;
mod privacy_list_names;
mod privacy_rule;
