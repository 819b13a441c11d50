// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerFeatures {
    /// XEP-0016: Privacy Lists
    pub privacy_lists: bool,
}
