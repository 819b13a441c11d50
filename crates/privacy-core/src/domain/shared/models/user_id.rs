// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::{BareJid, Jid};

#[derive(Clone, PartialEq, Eq, Hash)]
/// Represents a unique XMPP user identifier without a resource part.
pub struct UserId(BareJid);

impl UserId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    pub fn as_jid(&self) -> Jid {
        Jid::from(self.0.clone())
    }
}

// `jid` 0.10 does not implement `Ord` for `BareJid`; order by the normalized JID string.
impl PartialOrd for UserId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UserId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.to_string().cmp(&other.0.to_string())
    }
}

impl From<BareJid> for UserId {
    fn from(value: BareJid) -> Self {
        UserId(value)
    }
}

impl From<UserId> for Jid {
    fn from(value: UserId) -> Self {
        Jid::from(value.0)
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(s.parse::<BareJid>()?))
    }
}
