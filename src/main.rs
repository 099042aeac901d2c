use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "autocommit")]
#[command(version)]
#[command(
    about = "Generate a code snippet on a daily schedule and commit it to git",
    long_about = None
)]
struct Cli {
    /// Run a single cycle immediately and exit
    #[arg(long)]
    once: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match autocommit::init_logging(Path::new(autocommit::WORKER_LOG_FILE)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = autocommit::load_config();

    let result = if cli.once {
        autocommit::run_once(&config).map(|report| {
            info!("Process completed: {}", report.path.display());
        })
    } else {
        autocommit::run_scheduler(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Process failed: {e}");
            ExitCode::FAILURE
        }
    }
}
