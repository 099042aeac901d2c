use std::fmt;

use crate::domain::AppError;

/// How a supervised child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// A running worker process owned by the supervisor.
pub trait ManagedChild {
    fn id(&self) -> u32;

    /// Non-blocking liveness check; `Some` once the child has exited.
    fn try_exit(&mut self) -> Result<Option<ChildExit>, AppError>;

    /// Ask the child to stop and reap it.
    fn terminate(&mut self) -> Result<(), AppError>;
}

/// Spawns worker processes.
pub trait ProcessLauncher {
    type Child: ManagedChild;

    fn spawn(&self) -> Result<Self::Child, AppError>;
}
