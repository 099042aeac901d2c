pub mod config_file;
pub mod git_command;
pub mod logging;
pub mod os_process;
pub mod system_clock;

pub use git_command::GitCommandAdapter;
pub use os_process::{OsChild, OsProcessLauncher};
pub use system_clock::SystemClock;
