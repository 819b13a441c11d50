// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Availability {
    #[default]
    Available,
    Chat,
    Away,
    ExtendedAway,
    DoNotDisturb,
}
