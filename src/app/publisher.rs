use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{error, info, warn};

use crate::domain::{AppConfig, AppError};
use crate::ports::GitPort;

pub const ORIGIN: &str = "origin";
pub const MAIN_BRANCH: &str = "main";

const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `Auto-generated code at <YYYY-MM-DD HH:MM:SS>`
pub fn commit_message(at: &NaiveDateTime) -> String {
    format!("Auto-generated code at {}", at.format(COMMIT_TIMESTAMP_FORMAT))
}

/// Where a published commit ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed { commit: String },
    LocalOnly { commit: String },
}

impl PublishOutcome {
    pub fn commit(&self) -> &str {
        match self {
            PublishOutcome::Pushed { commit } | PublishOutcome::LocalOnly { commit } => commit,
        }
    }
}

/// Stages, commits and (optionally) pushes a single file.
pub struct RepositoryPublisher<G: GitPort> {
    git: G,
    git_user: Option<String>,
    git_email: Option<String>,
    remote_url: Option<String>,
}

impl<G: GitPort> RepositoryPublisher<G> {
    pub fn new(git: G, config: &AppConfig) -> Self {
        Self {
            git,
            git_user: config.git_user.clone(),
            git_email: config.git_email.clone(),
            remote_url: config.remote_url.clone(),
        }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn publish(&self, path: &Path, at: &NaiveDateTime) -> Result<PublishOutcome, AppError> {
        self.apply_identity();

        self.git.stage(path).inspect_err(|e| error!("Failed to stage {}: {e}", path.display()))?;
        info!("Staged {}", path.display());

        let commit = self
            .git
            .commit(&commit_message(at))
            .inspect_err(|e| error!("Failed to commit: {e}"))?;
        info!(commit = %commit, "Committed changes");

        let Some(url) = self.remote_url.as_deref() else {
            warn!("No remote_url configured; commit kept local-only");
            return Ok(PublishOutcome::LocalOnly { commit });
        };

        self.ensure_origin(url).inspect_err(|e| error!("Failed to configure remote: {e}"))?;
        self.git
            .push(ORIGIN, MAIN_BRANCH)
            .inspect_err(|e| error!("Failed to push to {ORIGIN}/{MAIN_BRANCH}: {e}"))?;
        info!("Pushed to {ORIGIN}/{MAIN_BRANCH}");

        Ok(PublishOutcome::Pushed { commit })
    }

    fn apply_identity(&self) {
        let identity = [("user.name", &self.git_user), ("user.email", &self.git_email)];
        for (key, value) in identity {
            let Some(value) = value else { continue };
            if let Err(e) = self.git.set_config(key, value) {
                warn!("Could not set {key}: {e}");
            }
        }
    }

    // An existing origin is left alone even when its URL differs.
    fn ensure_origin(&self, url: &str) -> Result<(), AppError> {
        if self.git.remote_url(ORIGIN)?.is_none() {
            self.git.add_remote(ORIGIN, url)?;
            info!("Added remote {ORIGIN} -> {url}");
        }
        Ok(())
    }
}
