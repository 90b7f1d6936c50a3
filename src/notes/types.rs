use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key namespace for note records inside a shared store.
pub const NOTE_KEY_PREFIX: &str = "note:";

/// Short, case-sensitive alphanumeric identifier of a note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NoteId(pub String);

impl NoteId {
    /// The store key holding this note's record.
    pub fn store_key(&self) -> String {
        format!("{}{}", NOTE_KEY_PREFIX, self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The persisted note record.
///
/// This is also the body returned to a reader, so the field names follow the
/// camelCase record format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// `None` means the note never expires by time.
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub burn_after_reading: bool,
    #[serde(default)]
    pub views: u64,
}

impl Note {
    /// True once `expires_at` lies strictly in the past.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at < now)
    }
}

/// A validated-on-create request for a new note.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: String,
    /// Non-positive or absent means no expiry.
    pub ttl_seconds: Option<i64>,
    pub burn_after_reading: bool,
}

impl NewNote {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_ttl_seconds(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = Some(ttl_seconds);
        self
    }

    pub fn burn_after_reading(mut self) -> Self {
        self.burn_after_reading = true;
        self
    }
}
