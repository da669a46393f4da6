//! Connection settings for the census store.
//!
//! Settings come from a JSON secrets document or from the environment:
//!
//! ```text
//! { "path": "/var/lib/census/census.db", "busy_timeout_ms": 2000 }
//! ```
//!
//! or `CENSUS_DB_PATH` / `CENSUS_DB_BUSY_TIMEOUT_MS`.

use crate::DataSourceError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DB_PATH: &str = "CENSUS_DB_PATH";
pub const ENV_BUSY_TIMEOUT_MS: &str = "CENSUS_DB_BUSY_TIMEOUT_MS";

const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Where the census database lives and how to open it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
    /// How long SQLite waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Parse settings from a JSON secrets document.
    pub fn from_json(json: &str) -> Result<Self, DataSourceError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DataSourceError::connection("configuration", e))?;
        config.validate()
    }

    /// Read settings from `CENSUS_DB_PATH` and `CENSUS_DB_BUSY_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, DataSourceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DataSourceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup(ENV_DB_PATH).ok_or_else(|| {
            DataSourceError::connection("configuration", format!("{} is not set", ENV_DB_PATH))
        })?;
        let busy_timeout_ms = match lookup(ENV_BUSY_TIMEOUT_MS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                DataSourceError::connection(
                    "configuration",
                    format!("{} must be a whole number of milliseconds: {}", ENV_BUSY_TIMEOUT_MS, e),
                )
            })?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };
        Self {
            path: PathBuf::from(path),
            busy_timeout_ms,
        }
        .validate()
    }

    fn validate(self) -> Result<Self, DataSourceError> {
        if self.path.as_os_str().is_empty() {
            return Err(DataSourceError::connection(
                "configuration",
                "database path is empty",
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parses_json_with_default_timeout() {
        let config = StoreConfig::from_json(r#"{"path": "census.db"}"#).unwrap();
        assert_eq!(config, StoreConfig::new("census.db"));
        assert_eq!(config.busy_timeout(), Duration::from_millis(5_000));
    }

    #[test]
    fn parses_json_with_timeout() {
        let config = StoreConfig::from_json(r#"{"path": "census.db", "busy_timeout_ms": 250}"#).unwrap();
        assert_eq!(config.busy_timeout_ms, 250);
    }

    #[test]
    fn malformed_json_is_a_connection_error() {
        let err = StoreConfig::from_json("{ not json").unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = StoreConfig::from_json(r#"{"path": ""}"#).unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn reads_from_lookup() {
        let config = StoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/census.db"),
            (ENV_BUSY_TIMEOUT_MS, "100"),
        ]))
        .unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/census.db"));
        assert_eq!(config.busy_timeout_ms, 100);
    }

    #[test]
    fn missing_path_variable_is_a_connection_error() {
        let err = StoreConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.is_connection());
        assert!(err.to_string().contains(ENV_DB_PATH));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "census.db"),
            (ENV_BUSY_TIMEOUT_MS, "soon"),
        ]))
        .unwrap_err();
        assert!(err.is_connection());
    }
}
