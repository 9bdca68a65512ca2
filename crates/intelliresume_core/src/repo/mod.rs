//! Persistence port and its implementations.
//!
//! # Responsibility
//! - Define the string-keyed durable store contract (`KeyValueStore`).
//! - Provide typed load/save helpers for the three resume aggregates.
//!
//! # Invariants
//! - Values are serialized JSON text.
//! - Loading never fails: unreadable or unparsable values fall back to a
//!   caller-supplied default.

pub mod kv_repo;
pub mod resume_repo;
