// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod connection;
pub mod contacts;
pub mod events;
pub mod platform_dependencies;
pub mod presence;
pub mod privacy;
pub mod xmpp;
