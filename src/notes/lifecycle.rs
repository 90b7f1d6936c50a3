//! Note Lifecycle Manager
//!
//! Owns every state transition of a note record:
//!
//! ```text
//! create ──► live ──read──► live (views + 1, record rewritten)
//!              │
//!              ├──read, expires_at < now──► deleted, Expired
//!              └──read, burn_after_reading──► deleted, final view returned
//! ```
//!
//! The store is the only source of truth. The manager keeps no cache and runs
//! no background sweep; expiry is enforced lazily, on the read that notices it.

use super::allocator::{DEFAULT_ID_LENGTH, DEFAULT_MAX_ATTEMPTS, IdGenerator, allocate};
use super::clock::Clock;
use super::error::NoteError;
use super::types::{NewNote, Note, NoteId};
use crate::storage::kv::{KvStore, StoreError};

use chrono::TimeDelta;
use std::sync::Arc;

/// Tunables for id allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSettings {
    pub id_length: usize,
    pub max_id_attempts: usize,
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            max_id_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub struct NoteManager {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    ids: IdGenerator,
    max_id_attempts: usize,
}

impl NoteManager {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>, settings: NoteSettings) -> Self {
        Self::with_ids(
            store,
            clock,
            IdGenerator::new(settings.id_length),
            settings.max_id_attempts,
        )
    }

    pub fn with_ids(
        store: Arc<dyn KvStore>,
        clock: Arc<dyn Clock>,
        ids: IdGenerator,
        max_id_attempts: usize,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            max_id_attempts,
        }
    }

    /// Stores a new note and returns its id.
    pub async fn create(&self, new_note: NewNote) -> Result<NoteId, NoteError> {
        if new_note.content.is_empty() {
            return Err(NoteError::Validation("content must not be empty".to_string()));
        }

        let created_at = self.clock.now();
        let expires_at = match new_note.ttl_seconds {
            Some(ttl) if ttl > 0 => Some(
                TimeDelta::try_seconds(ttl)
                    .and_then(|ttl| created_at.checked_add_signed(ttl))
                    .ok_or_else(|| {
                        NoteError::Validation("expiry time is out of range".to_string())
                    })?,
            ),
            _ => None,
        };

        let id = self.allocate_id().await?;

        let note = Note {
            id: id.clone(),
            title: new_note.title.unwrap_or_default(),
            content: new_note.content,
            created_at,
            expires_at,
            burn_after_reading: new_note.burn_after_reading,
            views: 0,
        };

        let record = serde_json::to_string(&note)?;
        self.store.put(&id.store_key(), record).await?;

        tracing::info!(
            "Created note {} (expires_at={:?}, burn_after_reading={})",
            id,
            note.expires_at,
            note.burn_after_reading
        );
        Ok(id)
    }

    /// Reads a note, applying expiry, burn and view counting.
    pub async fn read(&self, id: &NoteId) -> Result<Note, NoteError> {
        let key = id.store_key();

        let record = self.store.get(&key).await?.ok_or(NoteError::NotFound)?;
        let mut note: Note = serde_json::from_str(&record)?;

        if note.is_expired(self.clock.now()) {
            tracing::debug!("Note {} expired, deleting", id);
            self.store.delete(&key).await?;
            return Err(NoteError::Expired);
        }

        if note.burn_after_reading {
            // Only the reader that actually removes the record may deliver it,
            // and it delivers the record it removed.
            let Some(taken) = self.store.take(&key).await? else {
                tracing::debug!("Note {} was burned by a concurrent read", id);
                return Err(NoteError::NotFound);
            };
            let mut burned: Note = serde_json::from_str(&taken)?;
            burned.views = burned.views.saturating_add(1);
            tracing::debug!("Note {} burned after reading", id);
            return Ok(burned);
        }

        note.views = note.views.saturating_add(1);
        self.store.put(&key, serde_json::to_string(&note)?).await?;
        tracing::debug!("Note {} read, views={}", id, note.views);
        Ok(note)
    }

    async fn allocate_id(&self) -> Result<NoteId, NoteError> {
        let store = &self.store;
        allocate(
            || self.ids.next_id(),
            |candidate| async move {
                let existing = store.get(&candidate.store_key()).await?;
                Ok::<_, StoreError>(existing.is_some())
            },
            self.max_id_attempts,
        )
        .await
    }
}
