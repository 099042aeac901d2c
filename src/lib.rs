//! autocommit: generate a small code snippet on a daily schedule, commit it,
//! and push it to the configured remote.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::env;
use std::path::{Path, PathBuf};

use adapters::{GitCommandAdapter, OsProcessLauncher, SystemClock};
use app::supervisor::run_until_signal;
use app::{ArtifactWriter, CyclePipeline, CycleRunner, RepositoryPublisher, Scheduler, Supervisor};

pub use adapters::logging::{SUPERVISOR_LOG_FILE, WORKER_LOG_FILE, init_logging};
pub use app::{CycleReport, PublishOutcome};
pub use domain::{AppConfig, AppError, CONFIG_FILE};

/// Load `config.json` from the working directory, falling back to defaults.
pub fn load_config() -> AppConfig {
    adapters::config_file::load_or_default(Path::new(CONFIG_FILE))
}

fn pipeline(config: &AppConfig) -> Result<CyclePipeline<GitCommandAdapter, SystemClock>, AppError> {
    let root = std::path::absolute(&config.repo_path)?;
    let publisher = RepositoryPublisher::new(GitCommandAdapter::new(root.clone()), config);
    Ok(CyclePipeline::new(ArtifactWriter::new(root), publisher, SystemClock))
}

/// Run a single generate, write and publish cycle.
pub fn run_once(config: &AppConfig) -> Result<CycleReport, AppError> {
    pipeline(config)?.run_cycle()
}

/// Run the polling scheduler forever.
pub fn run_scheduler(config: &AppConfig) -> Result<(), AppError> {
    let mut scheduler = Scheduler::new(SystemClock, pipeline(config)?, config.trigger_times.clone());
    scheduler.run()
}

/// The worker binary installed next to the running executable.
pub fn default_worker_path() -> Result<PathBuf, AppError> {
    let exe = env::current_exe()?;
    let dir = exe.parent().unwrap_or(Path::new("."));
    Ok(dir.join(format!("autocommit{}", env::consts::EXE_SUFFIX)))
}

/// Keep `worker` running in scheduler mode until SIGINT or SIGTERM.
pub fn supervise(worker: PathBuf) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let mut supervisor = Supervisor::new(OsProcessLauncher::new(worker));
    runtime.block_on(run_until_signal(&mut supervisor))
}
