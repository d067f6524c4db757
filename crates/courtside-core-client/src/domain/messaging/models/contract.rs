// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Revision of the wire contract the upstream message source currently
/// speaks. Selecting the active revision is a configuration concern; the
/// mapper itself is contract-agnostic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContractVersion {
    /// The first archive export. PascalCase field names; photos, reactions
    /// and shares only.
    Legacy,
    /// The current archive export. camelCase field names; adds gifs, videos
    /// and audio clips.
    #[default]
    V2,
}
