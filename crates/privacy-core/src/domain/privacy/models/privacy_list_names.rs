// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The summary the server returns when asked for all lists of the account.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrivacyListNames {
    pub names: Vec<String>,
    pub active: Option<String>,
    pub default: Option<String>,
}
