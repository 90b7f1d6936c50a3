use crate::storage::kv::StoreError;

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("{0}")]
    Validation(String),

    #[error("note does not exist")]
    NotFound,

    #[error("note has expired")]
    Expired,

    #[error("failed to allocate a note id after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("note record could not be encoded or decoded: {0}")]
    CorruptRecord(#[from] serde_json::Error),
}

impl NoteError {
    /// Transport status for this condition.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NoteError::Validation(_) => StatusCode::BAD_REQUEST,
            NoteError::NotFound => StatusCode::NOT_FOUND,
            NoteError::Expired => StatusCode::GONE,
            NoteError::AllocationExhausted { .. }
            | NoteError::StoreUnavailable(_)
            | NoteError::CorruptRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-side conditions are the caller's fault and are never retried.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}
