// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::{AudioClip, ContractVersion, Gif, MessageParseError, Photo, Share, Video};

/// A reaction as it appears on the wire. Entries inside a message's reaction
/// list may be `null`; their slots must survive mapping so reaction counts
/// stay aligned with the list the renderer iterates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireReaction {
    #[serde(alias = "Actor")]
    pub actor: String,
    #[serde(alias = "Reaction")]
    pub reaction: String,
}

/// Wire shape of the first archive revision. Field names arrive in
/// PascalCase and the export carried no gif, video or audio collections.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LegacyServerMessage {
    pub id: String,
    pub sender: String,
    pub timestamp: i64,
    pub content: String,
    pub photos: Option<Vec<Photo>>,
    pub reactions: Option<Vec<Option<WireReaction>>>,
    pub share: Option<Share>,
    pub r#type: Option<String>,
}

/// Wire shape of the current archive revision: camelCase field names, plus
/// the media collections added after the first export.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerMessageV2 {
    pub id: String,
    pub sender: String,
    pub timestamp: i64,
    pub content: String,
    pub photos: Option<Vec<Photo>>,
    pub reactions: Option<Vec<Option<WireReaction>>>,
    pub gifs: Option<Vec<Gif>>,
    pub videos: Option<Vec<Video>>,
    pub audio: Option<Vec<AudioClip>>,
    pub share: Option<Share>,
    pub r#type: Option<String>,
}

/// A server-shaped message tagged with the contract revision it was read
/// under. The accessors present a uniform view so the mapping logic exists
/// exactly once regardless of the active contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    Legacy(LegacyServerMessage),
    V2(ServerMessageV2),
}

impl ServerMessage {
    /// Deserializes a raw payload against the given contract revision. This
    /// is the single dispatch point for contract drift; a new upstream
    /// revision becomes a new variant here, not another mapper copy.
    ///
    /// No schema validation happens beyond what serde needs to populate the
    /// fields; a payload in the wrong casing parses into defaulted fields
    /// rather than failing.
    pub fn from_json(payload: &str, contract: ContractVersion) -> Result<Self, MessageParseError> {
        let message = match contract {
            ContractVersion::Legacy => Self::Legacy(serde_json::from_str(payload)?),
            ContractVersion::V2 => Self::V2(serde_json::from_str(payload)?),
        };
        Ok(message)
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Legacy(message) => &message.id,
            Self::V2(message) => &message.id,
        }
    }

    pub fn sender(&self) -> &str {
        match self {
            Self::Legacy(message) => &message.sender,
            Self::V2(message) => &message.sender,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Legacy(message) => message.timestamp,
            Self::V2(message) => message.timestamp,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Legacy(message) => &message.content,
            Self::V2(message) => &message.content,
        }
    }

    pub fn photos(&self) -> Option<&[Photo]> {
        match self {
            Self::Legacy(message) => message.photos.as_deref(),
            Self::V2(message) => message.photos.as_deref(),
        }
    }

    pub fn reactions(&self) -> Option<&[Option<WireReaction>]> {
        match self {
            Self::Legacy(message) => message.reactions.as_deref(),
            Self::V2(message) => message.reactions.as_deref(),
        }
    }

    pub fn gifs(&self) -> Option<&[Gif]> {
        match self {
            Self::Legacy(_) => None,
            Self::V2(message) => message.gifs.as_deref(),
        }
    }

    pub fn videos(&self) -> Option<&[Video]> {
        match self {
            Self::Legacy(_) => None,
            Self::V2(message) => message.videos.as_deref(),
        }
    }

    pub fn audio(&self) -> Option<&[AudioClip]> {
        match self {
            Self::Legacy(_) => None,
            Self::V2(message) => message.audio.as_deref(),
        }
    }

    pub fn share(&self) -> Option<&Share> {
        match self {
            Self::Legacy(message) => message.share.as_ref(),
            Self::V2(message) => message.share.as_ref(),
        }
    }
}
