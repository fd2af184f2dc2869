//! Configuration file types.

use std::{path::Path, time::Duration};

use circle_api::{DEFAULT_URL, Project};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;

/// Connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, the public CircleCI API when unset.
    pub url: Option<String>,
    /// API token. Prefer the `CIRCLE_TOKEN` environment variable.
    pub token: Option<String>,
}

/// Build singleton overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingletonConfig {
    /// Seconds between two polls.
    pub interval_secs: Option<u64>,
    /// Maximum number of running builds fetched per poll.
    pub limit: Option<u32>,
}

impl SingletonConfig {
    pub fn interval(&self) -> Option<Duration> {
        self.interval_secs.map(Duration::from_secs)
    }
}

/// Contents of a circle-rs TOML configuration file.
///
/// Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    /// Project used when none is given on the command line.
    pub project: Option<Project>,
    #[serde(default)]
    pub singleton: SingletonConfig,
}

impl CircleConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        debug!("Loading config from {}", file_path.display());
        let contents = std::fs::read_to_string(file_path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Serialize configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn api_url(&self) -> &str {
        self.api.url.as_deref().unwrap_or(DEFAULT_URL)
    }

    /// Picks the token: command line first, then environment, then file.
    pub fn token(&self, cli: Option<String>, env: Option<String>) -> Result<String> {
        [cli, env, self.api.token.clone()]
            .into_iter()
            .flatten()
            .find(|token| !token.is_empty())
            .ok_or(Error::TokenMissing)
    }
}
