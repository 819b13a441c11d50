// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client_event_dispatcher::{ClientEventDispatcher, DelegateId};

mod client_event_dispatcher;
