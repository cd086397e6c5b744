//! Connection settings for the remote task service.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the service base URL.
pub const BASE_URL_VAR: &str = "ROBOTASK_BASE_URL";
/// Environment variable holding the access token.
pub const TOKEN_VAR: &str = "ROBOTASK_TOKEN";
/// Environment variable overriding the API version segment.
pub const API_VERSION_VAR: &str = "ROBOTASK_API_VERSION";
/// Environment variable overriding the per-request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "ROBOTASK_TIMEOUT_SECS";

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v1.1";
/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A missing or unusable setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{0} is not set")]
    Missing(&'static str),
    /// A variable is set to something unparseable.
    #[error("{var} has invalid value {value:?}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Everything needed to reach the task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL, e.g. `https://api.example.com`. A trailing slash is ignored.
    pub base_url: String,
    /// Version path segment, e.g. `v1.1`.
    pub api_version: String,
    /// Access token sent in the `X-Token` header.
    pub token: String,
    /// Upper bound on each request.
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Creates a config with default version and timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the config from the process environment, loading `.env` first if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_overriding(|_| None)
    }

    /// Like [`ServiceConfig::from_env`], but `overrides` is consulted before the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required setting is missing or a value is invalid.
    pub fn from_env_overriding<F>(overrides: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // A missing .env file is fine; real variables still apply.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| overrides(key).or_else(|| std::env::var(key).ok()))
    }

    /// Reads the config through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required key is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var).filter(|v| !v.trim().is_empty()).ok_or(ConfigError::Missing(var))
        };

        let mut config = Self::new(required(BASE_URL_VAR)?, required(TOKEN_VAR)?);
        if let Some(version) = lookup(API_VERSION_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_version = version;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid { var: TIMEOUT_VAR, value: raw.clone() })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Root of the task endpoints, e.g. `https://host/task/v1.1`.
    #[must_use]
    pub fn task_endpoint(&self) -> String {
        self.endpoint("task")
    }

    /// Root of the robot endpoints, e.g. `https://host/robot/v1.1`.
    #[must_use]
    pub fn robot_endpoint(&self) -> String {
        self.endpoint("robot")
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}/{}", self.base_url.trim_end_matches('/'), self.api_version)
    }
}
