// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use element_ext::{parse_bool, ElementExt};
pub use request_error::{ParseError, RequestError};
pub use xmpp_element::XMPPElement;

mod element_ext;
mod request_error;
mod xmpp_element;
