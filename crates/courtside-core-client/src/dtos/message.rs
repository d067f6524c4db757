// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::messaging::models::{AudioClip, Gif, Photo, Share, Video};

/// A display-ready chat message, consumed by the rendering layer. Values are
/// short-lived; they are built by the mapper, rendered once and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    /// The sender reduced to initials, e.g. "JD" for "Jane Doe".
    pub sender: String,
    /// Raw epoch milliseconds, echoed through from the wire.
    pub timestamp: i64,
    /// Human-readable rendering of `timestamp`, e.g. "Tue Nov 14 2023 @ 23:13".
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gifs: Option<Vec<Gif>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<Video>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Vec<AudioClip>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<Share>,
}

/// The default value doubles as the placeholder substituted for `null` wire
/// entries to keep the reaction list positionally aligned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reaction {
    pub actor: String,
    pub reaction: String,
}
