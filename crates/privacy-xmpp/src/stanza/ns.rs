// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::ns::*;

/// XEP-0016: Privacy Lists
pub const PRIVACY: &str = "jabber:iq:privacy";
