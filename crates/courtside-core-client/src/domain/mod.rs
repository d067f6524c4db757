// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod messaging;
