// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::presence::Show;

use crate::domain::shared::models::Availability;

impl From<Availability> for Option<Show> {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Available => None,
            Availability::Chat => Some(Show::Chat),
            Availability::Away => Some(Show::Away),
            Availability::ExtendedAway => Some(Show::Xa),
            Availability::DoNotDisturb => Some(Show::Dnd),
        }
    }
}
