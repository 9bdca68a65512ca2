//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve database path and logging settings from explicit overrides,
//!   environment variables and defaults, in that order.
//!
//! # Invariants
//! - Blank override or environment values are ignored.
//! - Resolved paths are absolute.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "INTELLIRESUME_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "INTELLIRESUME_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "INTELLIRESUME_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "intelliresume.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "intelliresume-logs";

/// Values supplied explicitly by the caller (for example CLI flags).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Unvalidated; checked by [`crate::init_logging`].
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves configuration against the process environment.
    pub fn resolve(overrides: &ConfigOverrides) -> Self {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves configuration against an arbitrary environment lookup.
    pub fn resolve_with(overrides: &ConfigOverrides, env: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |explicit: &Option<String>, key: &str| {
            non_blank(explicit.clone()).or_else(|| non_blank(env(key)))
        };

        let db_path = pick(&overrides.db_path, DB_PATH_ENV)
            .map(|raw| absolutize(Path::new(&raw)))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = pick(&overrides.log_level, LOG_LEVEL_ENV)
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = pick(&overrides.log_dir, LOG_DIR_ENV)
            .map(|raw| absolutize(Path::new(&raw)))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigOverrides, DB_PATH_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn overrides_win_over_environment() {
        let overrides = ConfigOverrides {
            db_path: Some("/data/cli.db".to_string()),
            ..ConfigOverrides::default()
        };
        let config = AppConfig::resolve_with(&overrides, env_of(&[(DB_PATH_ENV, "/data/env.db")]));
        assert_eq!(config.db_path, PathBuf::from("/data/cli.db"));
    }

    #[test]
    fn blank_values_fall_through_to_defaults() {
        let overrides = ConfigOverrides {
            log_level: Some("   ".to_string()),
            ..ConfigOverrides::default()
        };
        let config = AppConfig::resolve_with(&overrides, env_of(&[(DB_PATH_ENV, "")]));
        assert_eq!(config.log_level, crate::logging::default_log_level());
        assert!(config.db_path.ends_with("intelliresume.sqlite3"));
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn environment_used_when_no_override() {
        let config = AppConfig::resolve_with(
            &ConfigOverrides::default(),
            env_of(&[(LOG_LEVEL_ENV, "warn")]),
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn relative_paths_are_made_absolute() {
        let overrides = ConfigOverrides {
            db_path: Some("resume.db".to_string()),
            ..ConfigOverrides::default()
        };
        let config = AppConfig::resolve_with(&overrides, env_of(&[]));
        assert!(config.db_path.is_absolute());
        assert!(config.db_path.ends_with("resume.db"));
    }
}
