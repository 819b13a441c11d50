// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod deps;
pub mod dtos;
pub mod event_handlers;
pub mod services;
