//! Identifier generation for roles and list items.
//!
//! Identifiers are `<prefix>_<token>` strings. Generators are injected into
//! the resume service so tests can produce deterministic identifiers.

use std::time::{SystemTime, UNIX_EPOCH};

pub const ROLE_ID_PREFIX: &str = "role";
pub const SKILL_ID_PREFIX: &str = "skillcat";
pub const PROJECT_ID_PREFIX: &str = "proj";
pub const EDUCATION_ID_PREFIX: &str = "edu";

/// Source of fresh identifiers.
pub trait IdGenerator {
    /// Returns a new identifier starting with `<prefix>_`.
    fn next_id(&mut self, prefix: &str) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self, prefix: &str) -> String {
        (**self).next_id(prefix)
    }
}

/// Epoch-millisecond tokens, bumped so one generator never repeats a token.
///
/// Two generators (e.g. two processes) created in the same millisecond can
/// still collide.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last_token: u64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        let token = now_ms.max(self.last_token + 1);
        self.last_token = token;
        format!("{prefix}_{token}")
    }
}

/// Deterministic counter tokens, shared across prefixes.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: u64,
}

impl SequenceIdGenerator {
    /// Starts at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts at `first`; useful to stay clear of ids already in demo data.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        let token = self.next;
        self.next += 1;
        format!("{prefix}_{token}")
    }
}
