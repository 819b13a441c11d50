// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::Availability;
pub use user_id::UserId;

mod availability;
mod user_id;
