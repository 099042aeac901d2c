use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::domain::AppError;
use crate::ports::{ChildExit, ManagedChild, ProcessLauncher};

/// Launches the worker as an OS subprocess with its output discarded.
#[derive(Debug, Clone)]
pub struct OsProcessLauncher {
    program: PathBuf,
    args: Vec<String>,
}

impl OsProcessLauncher {
    pub fn new(program: PathBuf) -> Self {
        Self { program, args: Vec::new() }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl ProcessLauncher for OsProcessLauncher {
    type Child = OsChild;

    fn spawn(&self) -> Result<OsChild, AppError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                AppError::process(format!("spawn {} failed: {e}", self.program.display()))
            })?;
        Ok(OsChild { child })
    }
}

/// Handle to a spawned worker.
#[derive(Debug)]
pub struct OsChild {
    child: Child,
}

fn to_exit(status: ExitStatus) -> ChildExit {
    ChildExit { code: status.code() }
}

impl ManagedChild for OsChild {
    fn id(&self) -> u32 {
        self.child.id()
    }

    fn try_exit(&mut self) -> Result<Option<ChildExit>, AppError> {
        self.child
            .try_wait()
            .map(|status| status.map(to_exit))
            .map_err(|e| AppError::process(format!("wait on pid {} failed: {e}", self.id())))
    }

    fn terminate(&mut self) -> Result<(), AppError> {
        if self.try_exit()?.is_some() {
            return Ok(());
        }
        send_terminate(&mut self.child)?;
        self.child
            .wait()
            .map(|_| ())
            .map_err(|e| AppError::process(format!("reap pid {} failed: {e}", self.child.id())))
    }
}

#[cfg(unix)]
fn send_terminate(child: &mut Child) -> Result<(), AppError> {
    let pid = child.id() as libc::pid_t;
    // SAFETY: plain kill(2) on a pid we spawned and have not yet reaped.
    let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
    if rc != 0 {
        let err = std::io::Error::last_os_error();
        if err.raw_os_error() != Some(libc::ESRCH) {
            return Err(AppError::process(format!("SIGTERM to pid {pid} failed: {err}")));
        }
    }
    Ok(())
}

#[cfg(not(unix))]
fn send_terminate(child: &mut Child) -> Result<(), AppError> {
    child.kill().map_err(|e| AppError::process(format!("kill pid {} failed: {e}", child.id())))
}
