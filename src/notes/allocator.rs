//! Identifier Allocator
//!
//! Mints short random note ids and probes the store until it finds one that is
//! not in use. Nothing is reserved: a concurrent create may pick the same id
//! between our probe and our write. With 62^8 possible ids and a bounded retry
//! this is accepted rather than prevented.
//!
//! Characters are drawn with `rand::distr::Alphanumeric`, which uses rejection
//! sampling over the 62-symbol alphabet. A naive `byte % 62` draw would favour
//! the first few symbols slightly, since 62 is not a power of two.

use super::error::NoteError;
use super::types::NoteId;
use crate::storage::kv::StoreError;

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::sync::{Mutex, PoisonError};

pub const DEFAULT_ID_LENGTH: usize = 8;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Draws one candidate id of `length` characters.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> NoteId {
    let id: String = rng
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();
    NoteId(id)
}

/// Finds an unused id.
///
/// `next_candidate` is the entropy source; `is_taken` reports whether a
/// candidate already has a record. At most `max_attempts` candidates are
/// probed before giving up with `AllocationExhausted`. A failing probe aborts
/// immediately with the store error.
pub async fn allocate<G, P, Fut>(
    mut next_candidate: G,
    mut is_taken: P,
    max_attempts: usize,
) -> Result<NoteId, NoteError>
where
    G: FnMut() -> NoteId,
    P: FnMut(NoteId) -> Fut,
    Fut: Future<Output = Result<bool, StoreError>>,
{
    for attempt in 1..=max_attempts {
        let candidate = next_candidate();
        if !is_taken(candidate.clone()).await? {
            return Ok(candidate);
        }
        tracing::warn!(
            "Note id collision on attempt {}/{}",
            attempt,
            max_attempts
        );
    }

    tracing::warn!("Note id allocation exhausted after {} attempts", max_attempts);
    Err(NoteError::AllocationExhausted {
        attempts: max_attempts,
    })
}

/// Shared id source for concurrent requests.
///
/// The rng sits behind a mutex that is only held while drawing, never across
/// a store probe.
pub struct IdGenerator {
    rng: Mutex<StdRng>,
    length: usize,
}

impl IdGenerator {
    pub fn new(length: usize) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            length,
        }
    }

    /// Deterministic sequence, for tests.
    pub fn seeded(length: usize, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn next_id(&self) -> NoteId {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_id(&mut *rng, self.length)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}
