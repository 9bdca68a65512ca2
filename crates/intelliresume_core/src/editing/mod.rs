//! Inline editing primitives.
//!
//! # Responsibility
//! - Model the display/edit cycle of a single text field.
//! - Provide index-targeted list edits shared by every nested list.
//!
//! # Invariants
//! - A committed value is always trimmed.
//! - Committing a value equal (after trimming) to the current one yields no
//!   update.
//! - Index-targeted edits with an out-of-range index change nothing.

pub mod field;
pub mod list;

pub use field::{EditKey, EditableField, KeyOutcome};
