// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_properties::ConnectionProperties;
pub use server_features::ServerFeatures;

mod connection_properties;
mod server_features;
