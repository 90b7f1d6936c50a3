//! Notes Module
//!
//! The note lifecycle: short-id allocation, lazy time-based expiry and
//! burn-after-reading, all on top of a flat key-value store.
//!
//! ## Core Concepts
//! - **Allocation**: Ids are 8 random alphanumeric characters. Collisions are probed
//!   against the store and retried a bounded number of times.
//! - **Lazy Expiry**: A note past its `expiresAt` is deleted by the first read that
//!   notices it. Nothing sweeps the store in the background.
//! - **Burn After Reading**: The first successful read removes the record and still
//!   returns the final view to that reader.
//!
//! ## Submodules
//! - **`allocator`**: Candidate generation and the bounded collision-retry loop.
//! - **`lifecycle`**: `NoteManager`, the create/read state machine.
//! - **`clock`**: Injectable time source (`SystemClock`, `ManualClock`).
//! - **`handlers`**: Axum handlers and the public router.
//! - **`protocol`**: Endpoints and request/response DTOs.

pub mod allocator;
pub mod clock;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod protocol;
pub mod types;
