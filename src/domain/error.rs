use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for autocommit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file could not be read or parsed.
    #[error("Failed to load config '{path}': {details}")]
    Config { path: String, details: String },

    /// Trigger time is not a valid `HH:MM` wall-clock time.
    #[error("Invalid trigger time '{0}': expected HH:MM (00:00-23:59)")]
    InvalidTriggerTime(String),

    /// Artifact could not be written to the working directory.
    #[error("Failed to write artifact to {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested artifact filename is not a plain file name.
    #[error("Invalid artifact filename '{0}': must be a single path component")]
    InvalidFileName(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Worker process could not be spawned, polled, or terminated.
    #[error("Process error: {details}")]
    Process { details: String },

    /// Logger could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    pub(crate) fn git<C: Into<String>>(command: C, details: impl ToString) -> Self {
        AppError::GitError { command: command.into(), details: details.to_string() }
    }

    pub(crate) fn process(details: impl ToString) -> Self {
        AppError::Process { details: details.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_write_names_path_and_keeps_source() {
        let err = AppError::ArtifactWrite {
            path: PathBuf::from("/nope/file.py"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/nope/file.py"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.downcast_ref::<io::Error>().unwrap().kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn git_error_names_command() {
        let err = AppError::git("git push origin main", "rejected");
        assert_eq!(err.to_string(), "Git error running 'git push origin main': rejected");
    }
}
