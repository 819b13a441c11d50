// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::dtos::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: UserId,
    pub name: Option<String>,
    pub groups: Vec<String>,
    /// Set if the active privacy list denies this contact.
    pub is_blocked: bool,
}
