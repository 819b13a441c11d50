// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::{
    privacy::models::{
        PrivacyAction, PrivacyList, PrivacyRule, PrivacySubject, StanzaFilter, SubscriptionState,
    },
    shared::models::{Availability, UserId},
};

pub use contact::Contact;

mod contact;
