use crate::domain::AppError;
use std::path::Path;

pub trait GitPort {
    /// Write a key into the repository-local git config.
    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Stage a single file.
    fn stage(&self, path: &Path) -> Result<(), AppError>;

    /// Commit the index on top of HEAD. Returns the new commit SHA.
    fn commit(&self, message: &str) -> Result<String, AppError>;

    /// Get the URL of a named remote, if it exists.
    fn remote_url(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Create a named remote.
    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError>;

    /// Push a branch to the remote.
    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError>;
}
