// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::{dtos, services};
pub use client::{Client, ClientDelegate};
pub use client_builder::ClientBuilder;
pub use client_event::{ClientEvent, ConnectionEvent};
pub use infra::events::DelegateId;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
