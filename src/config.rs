//! Runtime configuration for a sync run

use crate::error::{Result, SyncError};
use crate::logging::Verbosity;
use crate::registry::client::DEFAULT_TIMEOUT;
use crate::transfer::DEFAULT_COPY_TOOL;
use std::time::Duration;

pub const ENV_TIMEOUT: &str = "REGISTRY_SYNC_TIMEOUT";
pub const ENV_VERBOSITY: &str = "REGISTRY_SYNC_VERBOSITY";
pub const ENV_COPY_TOOL: &str = "REGISTRY_SYNC_COPY_TOOL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub source: String,
    pub destination: String,
    pub timeout: Duration,
    pub verbosity: Verbosity,
    pub copy_tool: String,
    pub dry_run: bool,
}

impl SyncConfig {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            timeout: DEFAULT_TIMEOUT,
            verbosity: Verbosity::default(),
            copy_tool: DEFAULT_COPY_TOOL.to_string(),
            dry_run: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_copy_tool(mut self, copy_tool: impl Into<String>) -> Self {
        self.copy_tool = copy_tool.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fill values still at their defaults from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SyncConfig::apply_env`] with an injectable variable source
    pub fn apply_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.timeout == DEFAULT_TIMEOUT {
            if let Some(val) = lookup(ENV_TIMEOUT) {
                let secs: u64 = val.trim().parse().map_err(|_| {
                    SyncError::Config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT, val))
                })?;
                self.timeout = Duration::from_secs(secs);
            }
        }

        if self.verbosity == Verbosity::default() {
            if let Some(val) = lookup(ENV_VERBOSITY) {
                self.verbosity = val
                    .parse::<Verbosity>()
                    .map_err(|e: String| SyncError::Config(format!("{}: {}", ENV_VERBOSITY, e)))?;
            }
        }

        if self.copy_tool == DEFAULT_COPY_TOOL {
            if let Some(val) = lookup(ENV_COPY_TOOL) {
                if !val.trim().is_empty() {
                    self.copy_tool = val.trim().to_string();
                }
            }
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        validate_endpoint("source", &self.source)?;
        validate_endpoint("destination", &self.destination)?;

        if self.timeout.is_zero() {
            return Err(SyncError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if self.copy_tool.trim().is_empty() {
            return Err(SyncError::Validation(
                "Copy tool cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// An endpoint is a bare `host[:port]`: no scheme, no path
fn validate_endpoint(role: &str, endpoint: &str) -> Result<()> {
    if endpoint.trim().is_empty() {
        return Err(SyncError::Validation(format!(
            "The {} registry cannot be empty",
            role
        )));
    }

    if endpoint.contains("://") {
        return Err(SyncError::Validation(format!(
            "Invalid {} registry: {}. Give host:port without a scheme, plain HTTP is always used",
            role, endpoint
        )));
    }

    if endpoint.contains('/') || endpoint.chars().any(char::is_whitespace) {
        return Err(SyncError::Validation(format!(
            "Invalid {} registry: {}. Expected host or host:port",
            role, endpoint
        )));
    }

    Ok(())
}
