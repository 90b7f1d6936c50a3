//! Note API Protocol
//!
//! Endpoints and DTOs of the public note API. Decoding happens here, at the
//! edge; the lifecycle manager only ever sees typed values.

use super::types::{NewNote, NoteId};
use serde::{Deserialize, Serialize};

pub const ENDPOINT_NOTES: &str = "/api/notes";

/// Body of `POST /api/notes`.
///
/// Every field is optional on the wire so that a missing `content` is reported
/// as a validation failure rather than a decode failure.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Time-to-live in seconds.
    #[serde(default, alias = "ttlSeconds")]
    pub expiry_time: Option<i64>,
    #[serde(default)]
    pub burn_after_reading: Option<bool>,
}

impl From<CreateNoteRequest> for NewNote {
    fn from(req: CreateNoteRequest) -> Self {
        NewNote {
            title: req.title,
            content: req.content.unwrap_or_default(),
            ttl_seconds: req.expiry_time,
            burn_after_reading: req.burn_after_reading.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteResponse {
    pub success: bool,
    pub id: NoteId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
