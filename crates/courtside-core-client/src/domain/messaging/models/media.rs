// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// Directory segments the archive export files media under. Anything in
/// front of the first matching segment is an export-specific prefix.
const MEDIA_PATH_SEGMENTS: &[&str] = &["/photos/", "/videos/", "/gifs/", "/audio/"];

fn canonical_media_path(uri: &str) -> &str {
    for segment in MEDIA_PATH_SEGMENTS {
        if let Some(index) = uri.find(segment) {
            return &uri[index..];
        }
    }
    uri
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(alias = "Uri")]
    pub uri: String,
}

impl Photo {
    /// The uri with the export-specific prefix stripped.
    pub fn canonical_uri(&self) -> &str {
        canonical_media_path(&self.uri)
    }

    /// Some exports file `.mp4` clips under photos.
    pub fn is_video(&self) -> bool {
        self.uri.contains(".mp4")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gif {
    #[serde(alias = "Uri")]
    pub uri: String,
}

impl Gif {
    pub fn canonical_uri(&self) -> &str {
        canonical_media_path(&self.uri)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(alias = "Uri")]
    pub uri: String,
}

impl Video {
    pub fn canonical_uri(&self) -> &str {
        canonical_media_path(&self.uri)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    #[serde(alias = "Uri")]
    pub uri: String,
}

impl AudioClip {
    pub fn canonical_uri(&self) -> &str {
        canonical_media_path(&self.uri)
    }
}

/// A shared link and its accompanying text. Passed through to the display
/// shape unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Share {
    #[serde(alias = "Link")]
    pub link: String,
    #[serde(alias = "ShareText", alias = "share_text")]
    pub share_text: String,
}
