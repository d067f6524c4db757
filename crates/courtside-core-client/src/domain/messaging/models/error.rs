// courtside-core-client/courtside-core-client
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error)]
pub enum MessageParseError {
    #[error("Malformed payload: {error}")]
    MalformedPayload { error: String },
}

impl From<serde_json::Error> for MessageParseError {
    fn from(error: serde_json::Error) -> Self {
        MessageParseError::MalformedPayload {
            error: error.to_string(),
        }
    }
}
