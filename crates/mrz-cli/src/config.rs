//! CLI configuration.
//!
//! Values come from environment variables, then command-line flags
//! override them. Defaults keep the tool usable with no setup.

use std::path::PathBuf;

use mrz_core::EncodePolicy;

/// Default location of the JSON record store.
pub const DEFAULT_DB_PATH: &str = "mrz_records.json";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON record store used by `store` and `lookup`.
    pub db_path: PathBuf,
    /// File that error-level events are appended to, if any.
    pub error_log: Option<PathBuf>,
    /// Policy for fields absent from an encode mapping.
    pub encode_policy: EncodePolicy,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            error_log: None,
            encode_policy: EncodePolicy::FillDefaults,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MRZ_DB_PATH` (default: `mrz_records.json`)
    /// - `MRZ_ERROR_LOG` (default: unset, no error log file)
    /// - `MRZ_ENCODE_POLICY`: `lenient` or `strict` (default: `lenient`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let encode_policy = match get("MRZ_ENCODE_POLICY") {
            Some(raw) => parse_policy(&raw)?,
            None => defaults.encode_policy,
        };
        Ok(Self {
            db_path: get("MRZ_DB_PATH")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            error_log: get("MRZ_ERROR_LOG")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            encode_policy,
        })
    }
}

/// Parse an encode policy name.
pub fn parse_policy(raw: &str) -> Result<EncodePolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "lenient" | "defaults" | "fill-defaults" | "fill_defaults" => {
            Ok(EncodePolicy::FillDefaults)
        }
        "strict" => Ok(EncodePolicy::Strict),
        _ => Err(ConfigError::InvalidPolicy(raw.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid MRZ_ENCODE_POLICY {0:?} (expected \"lenient\" or \"strict\")")]
    InvalidPolicy(String),
}
