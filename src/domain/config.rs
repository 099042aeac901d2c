//! Runtime configuration (`config.json`).

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

use super::AppError;
use super::schedule::{TriggerPoint, default_trigger_points};

/// Name of the configuration file looked up in the process working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Immutable process configuration.
///
/// Loaded once at startup and handed to each component; an absent file means
/// the defaults below (no identity, no remote, local-only commits).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Working directory treated as the checkout root.
    pub repo_path: PathBuf,
    #[serde(deserialize_with = "non_empty")]
    pub git_user: Option<String>,
    #[serde(deserialize_with = "non_empty")]
    pub git_email: Option<String>,
    /// Push target for `origin`. Absent disables push.
    #[serde(deserialize_with = "non_empty")]
    pub remote_url: Option<String>,
    pub trigger_times: Vec<TriggerPoint>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            git_user: None,
            git_email: None,
            remote_url: None,
            trigger_times: default_trigger_points(),
        }
    }
}

impl AppConfig {
    fn validate(&self) -> Result<(), String> {
        if self.trigger_times.is_empty() {
            return Err("trigger_times must contain at least one HH:MM entry".to_string());
        }
        if self.repo_path.as_os_str().is_empty() {
            return Err("repo_path must not be empty".to_string());
        }
        Ok(())
    }
}

/// Treat blank strings as unset.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
}

/// Parse and validate configuration from JSON content.
pub fn parse_config_content(content: &str, origin: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = serde_json::from_str(content)
        .map_err(|e| AppError::Config { path: origin.to_string(), details: e.to_string() })?;
    config
        .validate()
        .map_err(|details| AppError::Config { path: origin.to_string(), details })?;
    Ok(config)
}
