// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use config::{Configuration, ConfigurationError};
pub use domain::messaging::models::{
    AudioClip, ContractVersion, Gif, LegacyServerMessage, MessageMapper, MessageParseError, Photo,
    ServerMessage, ServerMessageV2, Share, Video, WireReaction,
};

pub mod dtos;

mod config;
mod domain;
pub(crate) mod util;
