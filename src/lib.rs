//! Ephemeral Notes Library
//!
//! A self-destructing note service: clients submit text, get back a short id, and
//! later trade that id for the text as many times as the note's policy allows.
//!
//! ## Architecture Modules
//! - **`notes`**: The note lifecycle. Allocates ids under collision risk, enforces
//!   time-based expiry lazily on read and burns one-time notes after their first read.
//! - **`storage`**: The flat key-value store the lifecycle is built on, with an
//!   in-memory backend, an HTTP client for a remote store node, and the routes
//!   that let a node act as one.
//! - **`config`**: Command-line and environment configuration of a node.

pub mod config;
pub mod notes;
pub mod storage;
