use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// A recorded `GitPort` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    SetConfig(String, String),
    Stage(PathBuf),
    Commit(String),
    RemoteUrl(String),
    AddRemote(String, String),
    Push(String, String),
}

/// In-memory `GitPort` that records calls and can fail one operation.
#[derive(Default)]
pub struct FakeGit {
    pub calls: Mutex<Vec<GitCall>>,
    pub remotes: Mutex<Vec<(String, String)>>,
    fail_on: Mutex<Option<&'static str>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the named operation (`"set_config"`, `"stage"`, `"commit"`,
    /// `"add_remote"`, `"push"`) return an error.
    pub fn failing_on(operation: &'static str) -> Self {
        let git = Self::default();
        *git.fail_on.lock().unwrap() = Some(operation);
        git
    }

    pub fn with_remote(self, name: &str, url: &str) -> Self {
        self.remotes.lock().unwrap().push((name.to_string(), url.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: GitCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail_on.lock().unwrap() == Some(operation) {
            return Err(AppError::git(format!("fake {operation}"), "injected failure"));
        }
        Ok(())
    }
}

impl GitPort for FakeGit {
    fn set_config(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.record("set_config", GitCall::SetConfig(key.to_string(), value.to_string()))
    }

    fn stage(&self, path: &Path) -> Result<(), AppError> {
        self.record("stage", GitCall::Stage(path.to_path_buf()))
    }

    fn commit(&self, message: &str) -> Result<String, AppError> {
        self.record("commit", GitCall::Commit(message.to_string()))?;
        Ok("fake-sha".into())
    }

    fn remote_url(&self, name: &str) -> Result<Option<String>, AppError> {
        self.record("remote_url", GitCall::RemoteUrl(name.to_string()))?;
        let remotes = self.remotes.lock().unwrap();
        Ok(remotes.iter().find(|(n, _)| n == name).map(|(_, url)| url.clone()))
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        self.record("add_remote", GitCall::AddRemote(name.to_string(), url.to_string()))?;
        self.remotes.lock().unwrap().push((name.to_string(), url.to_string()));
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.record("push", GitCall::Push(remote.to_string(), branch.to_string()))
    }
}
