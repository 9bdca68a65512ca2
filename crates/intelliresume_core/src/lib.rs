//! Core domain logic for IntelliResume.
//! This crate is the single source of truth for resume state and its
//! persistence rules.

pub mod config;
pub mod db;
pub mod editing;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigOverrides};
pub use editing::{EditKey, EditableField, KeyOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{IdGenerator, SequenceIdGenerator, TimestampIdGenerator};
pub use model::profile::{
    EducationEntry, EducationField, ProfileField, SharedProfile, SharedProfileUpdate,
};
pub use model::role::{
    Project, ProjectField, RoleId, RoleTextField, RoleUpdate, RoleVariant, SkillCategory,
    SkillField,
};
pub use model::FieldParseError;
pub use repo::kv_repo::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use service::resume_service::{
    Confirmation, ResumeResult, ResumeService, ResumeServiceError, ResumeState,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
