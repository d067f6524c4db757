// courtside-core-client/courtside-utils
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use initials::initials;
pub use string_ext::StringExt;

mod initials;
mod string_ext;
