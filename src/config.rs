//! # Load Test Configuration
//!
//! Target host, test-account credentials and think-time bounds for the
//! simulated users.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults (`http://localhost:3000`, `john@gmail.com` /
//!    `password`, 1-3 s think time)
//! 2. A YAML file named by `STOREFRONT_CONFIG`
//! 3. Environment variables
//!
//! goose's own `--host` flag still wins over all of these, since the host is
//! handed to goose as a default rather than a fixed value.
//!
//! ## Environment Variables
//!
//! | Variable | Field |
//! |----------|-------|
//! | `STOREFRONT_CONFIG` | path to a YAML file |
//! | `STOREFRONT_HOST` | `host` |
//! | `STOREFRONT_USERNAME` | `username` |
//! | `STOREFRONT_PASSWORD` | `password` |
//! | `STOREFRONT_WAIT_MIN_SECS` | `wait_min_secs` |
//! | `STOREFRONT_WAIT_MAX_SECS` | `wait_max_secs` |
//!
//! ## Example File
//!
//! ```yaml
//! host: http://staging.internal:3000
//! wait_min_secs: 2
//! wait_max_secs: 5
//! ```

use crate::auth::Credentials;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://localhost:3000";
pub const DEFAULT_USERNAME: &str = "john@gmail.com";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_WAIT_MIN_SECS: u64 = 1;
pub const DEFAULT_WAIT_MAX_SECS: u64 = 3;

pub const ENV_CONFIG: &str = "STOREFRONT_CONFIG";
pub const ENV_HOST: &str = "STOREFRONT_HOST";
pub const ENV_USERNAME: &str = "STOREFRONT_USERNAME";
pub const ENV_PASSWORD: &str = "STOREFRONT_PASSWORD";
pub const ENV_WAIT_MIN_SECS: &str = "STOREFRONT_WAIT_MIN_SECS";
pub const ENV_WAIT_MAX_SECS: &str = "STOREFRONT_WAIT_MAX_SECS";

/// Configuration error
///
/// Returned by [`LoadTestConfig::load`] and friends when a source cannot be
/// read or the merged result is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The YAML file could not be read
    Read { path: PathBuf, reason: String },
    /// The YAML file is not valid for [`ConfigFile`]
    Parse { path: PathBuf, reason: String },
    /// A numeric environment variable did not parse
    InvalidNumber { var: &'static str, value: String },
    /// Minimum think time above maximum
    WaitRange { min: u64, max: u64 },
    /// Host is empty after merging all sources
    EmptyHost,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, reason } => {
                write!(f, "failed to read config file {}: {}", path.display(), reason)
            }
            ConfigError::Parse { path, reason } => {
                write!(f, "invalid config file {}: {}", path.display(), reason)
            }
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{var} must be a whole number of seconds, got '{value}'")
            }
            ConfigError::WaitRange { min, max } => {
                write!(f, "wait_min_secs ({min}) must not exceed wait_max_secs ({max})")
            }
            ConfigError::EmptyHost => write!(f, "host must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Optional overrides read from YAML. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub wait_min_secs: Option<u64>,
    pub wait_max_secs: Option<u64>,
}

/// Resolved load test settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    /// Base URL of the storefront backend
    pub host: String,
    /// Test account for Basic auth and login
    pub credentials: Credentials,
    /// Lower bound of the pause between tasks
    pub wait_min_secs: u64,
    /// Upper bound of the pause between tasks
    pub wait_max_secs: u64,
}

impl Default for LoadTestConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            credentials: Credentials::new(DEFAULT_USERNAME, DEFAULT_PASSWORD),
            wait_min_secs: DEFAULT_WAIT_MIN_SECS,
            wait_max_secs: DEFAULT_WAIT_MAX_SECS,
        }
    }
}

impl LoadTestConfig {
    /// Load from the process environment (and the file it points at).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_CONFIG) {
            config.apply_file(&read_file(Path::new(&path))?);
        }
        config.apply_env(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(host) = &file.host {
            self.host = host.clone();
        }
        if let Some(username) = &file.username {
            self.credentials.username = username.clone();
        }
        if let Some(password) = &file.password {
            self.credentials.password = password.clone();
        }
        if let Some(min) = file.wait_min_secs {
            self.wait_min_secs = min;
        }
        if let Some(max) = file.wait_max_secs {
            self.wait_max_secs = max;
        }
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            self.credentials.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.credentials.password = password;
        }
        if let Some(min) = parse_secs(lookup, ENV_WAIT_MIN_SECS)? {
            self.wait_min_secs = min;
        }
        if let Some(max) = parse_secs(lookup, ENV_WAIT_MAX_SECS)? {
            self.wait_max_secs = max;
        }
        Ok(())
    }

    /// Check the merged settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.wait_min_secs > self.wait_max_secs {
            return Err(ConfigError::WaitRange {
                min: self.wait_min_secs,
                max: self.wait_max_secs,
            });
        }
        Ok(())
    }

    /// Think-time bounds, or `None` when both are zero (no pause at all).
    pub fn wait_time(&self) -> Option<(Duration, Duration)> {
        if self.wait_min_secs == 0 && self.wait_max_secs == 0 {
            return None;
        }
        Some((
            Duration::from_secs(self.wait_min_secs),
            Duration::from_secs(self.wait_max_secs),
        ))
    }
}

fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_secs<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
