// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contract::ContractVersion;
pub use error::MessageParseError;
pub use media::{AudioClip, Gif, Photo, Share, Video};
pub use message_mapper::MessageMapper;
pub use server_message::{LegacyServerMessage, ServerMessage, ServerMessageV2, WireReaction};

mod contract;
mod error;
mod media;
mod message_mapper;
mod server_message;
