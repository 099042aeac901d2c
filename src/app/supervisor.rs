//! Keeps one worker process alive until the supervisor is told to stop.

use std::future::Future;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::AppError;
use crate::ports::{ChildExit, ManagedChild, ProcessLauncher};

/// How often the child is polled for liveness.
pub const LIVENESS_INTERVAL: Duration = Duration::from_secs(10);

/// Result of a liveness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorEvent {
    Alive { pid: u32 },
    Spawned { pid: u32 },
    Respawned { exit: ChildExit, pid: u32 },
    SpawnFailed,
    Stopped,
}

pub struct Supervisor<L: ProcessLauncher> {
    launcher: L,
    child: Option<L::Child>,
    running: bool,
}

impl<L: ProcessLauncher> Supervisor<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher, child: None, running: false }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn child_pid(&self) -> Option<u32> {
        self.child.as_ref().map(|child| child.id())
    }

    pub fn start(&mut self) -> SupervisorEvent {
        self.running = true;
        self.spawn()
    }

    /// Poll the child; respawn it once if it has exited.
    pub fn check(&mut self) -> SupervisorEvent {
        if !self.running {
            return SupervisorEvent::Stopped;
        }
        let Some(child) = self.child.as_mut() else {
            return self.spawn();
        };

        let pid = child.id();
        match child.try_exit() {
            Ok(None) => SupervisorEvent::Alive { pid },
            Ok(Some(exit)) => {
                warn!(pid, "Worker exited ({exit}); restarting");
                self.child = None;
                match self.spawn() {
                    SupervisorEvent::Spawned { pid } => SupervisorEvent::Respawned { exit, pid },
                    other => other,
                }
            }
            Err(e) => {
                error!(pid, "Liveness check failed: {e}");
                SupervisorEvent::Alive { pid }
            }
        }
    }

    /// Clear the running flag, then terminate and reap the child.
    pub fn shutdown(&mut self) -> Result<(), AppError> {
        self.running = false;
        if let Some(mut child) = self.child.take() {
            let pid = child.id();
            child.terminate()?;
            info!(pid, "Worker terminated");
        }
        Ok(())
    }

    fn spawn(&mut self) -> SupervisorEvent {
        match self.launcher.spawn() {
            Ok(child) => {
                let pid = child.id();
                info!(pid, "Worker started");
                self.child = Some(child);
                SupervisorEvent::Spawned { pid }
            }
            Err(e) => {
                error!("Failed to start worker: {e}");
                SupervisorEvent::SpawnFailed
            }
        }
    }
}

/// Listeners for the signals that stop the supervisor.
///
/// Installing replaces the default fatal disposition, so it must happen before
/// the first worker is spawned or an early signal would orphan the worker.
pub struct ShutdownSignals {
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignals {
    /// Must be called from inside a tokio runtime.
    #[cfg(unix)]
    pub fn install() -> Result<Self, AppError> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    /// Name of the first signal delivered since installation.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.interrupt.recv() => "SIGINT",
        }
    }

    #[cfg(windows)]
    pub fn install() -> Result<Self, AppError> {
        Ok(Self { ctrl_c: tokio::signal::windows::ctrl_c()? })
    }

    #[cfg(windows)]
    pub async fn recv(&mut self) -> &'static str {
        self.ctrl_c.recv().await;
        "Ctrl-C"
    }
}

/// Supervise until SIGINT or SIGTERM, then stop the child.
pub async fn run_until_signal<L: ProcessLauncher>(
    supervisor: &mut Supervisor<L>,
) -> Result<(), AppError> {
    let mut signals = ShutdownSignals::install()?;
    supervise_until(supervisor, LIVENESS_INTERVAL, signals.recv()).await
}

/// Start the worker, check it every `interval`, and stop it once `shutdown`
/// resolves with the name of what asked for the stop.
pub async fn supervise_until<L, F>(
    supervisor: &mut Supervisor<L>,
    interval: Duration,
    shutdown: F,
) -> Result<(), AppError>
where
    L: ProcessLauncher,
    F: Future<Output = &'static str>,
{
    tokio::pin!(shutdown);
    supervisor.start();

    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await;

    loop {
        tokio::select! {
            signal = &mut shutdown => {
                info!("Received {signal}, stopping background service");
                break;
            }
            _ = ticker.tick() => {
                supervisor.check();
            }
        }
    }

    supervisor.shutdown()?;
    info!("Background service stopped");
    Ok(())
}
