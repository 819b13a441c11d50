// prose-privacy/privacy-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::stanza_error::{DefinedCondition, StanzaError};

/// Why an IQ request did not produce a usable result.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Request '{id}' timed out")]
    TimedOut { id: String },
    #[error("Not connected")]
    Disconnected,
    #[error("Unexpected response from server")]
    UnexpectedResponse,
    #[error("Server rejected the request ({:?})", err.defined_condition)]
    Rejected { err: StanzaError },
    #[error(transparent)]
    JidError(#[from] jid::Error),
    #[error("Invalid request: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed payload: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    XMPPParseError(#[from] xmpp_parsers::Error),
    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),
}

impl From<xmpp_parsers::Error> for RequestError {
    fn from(value: xmpp_parsers::Error) -> Self {
        Self::ParseError(value.into())
    }
}

impl From<StanzaError> for RequestError {
    fn from(err: StanzaError) -> Self {
        Self::Rejected { err }
    }
}

impl RequestError {
    /// The server knows no list of that name.
    pub fn is_item_not_found_err(&self) -> bool {
        self.condition() == Some(&DefinedCondition::ItemNotFound)
    }

    /// XEP-0016 answers with `conflict` when a list which is active for another resource
    /// gets deleted or declined as default.
    pub fn is_conflict_err(&self) -> bool {
        self.condition() == Some(&DefinedCondition::Conflict)
    }

    pub fn condition(&self) -> Option<&DefinedCondition> {
        match self {
            RequestError::Rejected { err } => Some(&err.defined_condition),
            _ => None,
        }
    }
}
