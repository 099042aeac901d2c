//! Configuration loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{error, info, warn};

use crate::domain::config::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Read and parse the configuration file at `path`.
pub fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| AppError::Config {
        path: origin.clone(),
        details: if e.kind() == io::ErrorKind::NotFound {
            "file not found".to_string()
        } else {
            e.to_string()
        },
    })?;
    parse_config_content(&content, &origin)
}

/// Load configuration, degrading to defaults when the file is missing or malformed.
pub fn load_or_default(path: &Path) -> AppConfig {
    match read_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded configuration");
            config
        }
        Err(e) if !path.exists() => {
            warn!("{e}; continuing with defaults (no identity, no remote)");
            AppConfig::default()
        }
        Err(e) => {
            error!("{e}; continuing with defaults (no identity, no remote)");
            AppConfig::default()
        }
    }
}
