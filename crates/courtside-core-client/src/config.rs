// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use courtside_utils::StringExt;

use crate::domain::messaging::models::ContractVersion;

/// Front-end configuration: which wire contract the upstream source speaks,
/// plus a table resolving raw sender names (aliases, old screen names) to
/// their canonical display names. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub contract: ContractVersion,
    pub participants: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Configuration {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(io::BufReader::new(file))?)
    }

    /// Resolves a raw participant name, typed in whatever casing, to its
    /// canonical display form: title-case each token, then apply the
    /// participant table. Unknown names come back title-cased.
    pub fn canonical_participant(&self, raw: &str) -> String {
        let name = raw.to_title_case();
        self.participants.get(&name).cloned().unwrap_or(name)
    }
}
