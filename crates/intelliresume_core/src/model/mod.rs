//! Resume domain model.
//!
//! # Responsibility
//! - Define the Shared Profile and Role Variant records and their list items.
//! - Provide field-level setters used by editing flows.
//! - Hold bundled demo data and identifier generation.
//!
//! # Invariants
//! - Every list item carries a locally-unique identifier used as a stable key.
//! - Serialized field names match the persisted storage shape (camelCase).

pub mod demo;
pub mod id;
pub mod profile;
pub mod role;

use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Parse error for field selectors coming from text input (CLI arguments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError {
    /// Field family, for example `profile` or `project`.
    pub kind: &'static str,
    /// Rejected raw value.
    pub value: String,
    /// Accepted values for this family.
    pub expected: &'static [&'static str],
}

impl Display for FieldParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown {} field `{}`; expected {}",
            self.kind,
            self.value,
            self.expected.join("|")
        )
    }
}

impl Error for FieldParseError {}

/// Replaces `slot` with `value` and reports whether the stored text changed.
pub(crate) fn assign(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Reads an explicit `null` as the type's empty value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
