//! Storage Module
//!
//! The key-value collaborator that note records live in.
//!
//! ## Core Concepts
//! - **Contract**: `KvStore` offers get / put / delete plus an optional
//!   delete-and-return `take`. No transactions, no listing, no TTL.
//! - **Backends**: `MemoryKvStore` keeps entries in-process; `RemoteKvStore` talks to
//!   a store node over HTTP and owns the retry policy.
//! - **Store Node**: Any node can expose its memory store through the `/kv` routes so
//!   that several note nodes share one source of truth.

pub mod handlers;
pub mod kv;
pub mod memory;
pub mod protocol;
pub mod remote;
