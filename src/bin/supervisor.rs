use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "autocommit-supervisor")]
#[command(version)]
#[command(about = "Keep the autocommit scheduler running in the background", long_about = None)]
struct Cli {
    /// Worker executable to supervise (defaults to `autocommit` next to this binary)
    #[arg(long, value_name = "PATH")]
    worker: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match autocommit::init_logging(Path::new(autocommit::SUPERVISOR_LOG_FILE)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.worker {
        Some(worker) => Ok(worker),
        None => autocommit::default_worker_path(),
    }
    .and_then(|worker| {
        info!("Supervising {}", worker.display());
        autocommit::supervise(worker)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Background service failed: {e}");
            ExitCode::FAILURE
        }
    }
}
