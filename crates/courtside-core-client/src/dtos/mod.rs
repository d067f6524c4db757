// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message::{Message, Reaction};

pub use crate::domain::messaging::models::{AudioClip, Gif, Photo, Share, Video};

mod message;
