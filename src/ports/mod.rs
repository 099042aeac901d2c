mod clock;
mod git;
mod process;

pub use clock::Clock;
pub use git::GitPort;
pub use process::{ChildExit, ManagedChild, ProcessLauncher};
