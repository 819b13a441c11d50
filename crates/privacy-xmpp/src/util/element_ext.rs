// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;

use crate::util::ParseError;

pub trait ElementExt {
    fn expect_is(&self, name: impl AsRef<str>, ns: impl AsRef<str>) -> Result<(), ParseError>;
    fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError>;
    fn attr_bool(&self, name: impl AsRef<str>) -> Result<Option<bool>, ParseError>;
}

impl ElementExt for Element {
    fn expect_is(&self, name: impl AsRef<str>, ns: impl AsRef<str>) -> Result<(), ParseError> {
        if !self.is(name.as_ref(), ns.as_ref()) {
            return Err(ParseError::Generic {
                msg: format!(
                    "Expected element with name {} and namespace {}. Got {} and {} instead.",
                    name.as_ref(),
                    ns.as_ref(),
                    self.name(),
                    self.ns()
                ),
            });
        }
        Ok(())
    }

    fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError> {
        self.attr(name.as_ref()).ok_or(ParseError::Generic {
            msg: format!(
                "Missing required attribute {} in element {}.",
                name.as_ref(),
                self.name()
            ),
        })
    }

    fn attr_bool(&self, name: impl AsRef<str>) -> Result<Option<bool>, ParseError> {
        self.attr(name.as_ref()).map(parse_bool).transpose()
    }
}

pub fn parse_bool(value: impl AsRef<str>) -> Result<bool, ParseError> {
    match value.as_ref() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ParseError::Generic {
            msg: format!("Invalid boolean value '{}'.", value.as_ref()),
        }),
    }
}
