//! Store Node Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) spoken between a
//! note node and a remote store node.
//!
//! Keys travel in the URL path; values are opaque strings (the note layer puts
//! JSON records in them, but the store never looks inside).

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Read a single key. Responds 404 when the key is absent.
pub const ENDPOINT_KV_GET: &str = "/kv/get";
/// Unconditional upsert.
pub const ENDPOINT_KV_PUT: &str = "/kv/put";
/// Idempotent removal.
pub const ENDPOINT_KV_DELETE: &str = "/kv/delete";
/// Atomic remove-and-return. Responds 404 when the key is absent.
pub const ENDPOINT_KV_TAKE: &str = "/kv/take";

// --- Data Transfer Objects ---

/// Payload for writing a value.
#[derive(Debug, Serialize, Deserialize)]
pub struct KvPutRequest {
    pub key: String,
    pub value: String,
}

/// Response for get and take requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct KvValueResponse {
    /// `None` indicates the key does not exist.
    pub value: Option<String>,
}

/// Acknowledgment for put and delete requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct KvAckResponse {
    pub success: bool,
}
