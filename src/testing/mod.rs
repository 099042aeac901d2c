mod fake_clock;
mod fake_git;
mod fake_process;

pub use fake_clock::FakeClock;
pub use fake_git::{FakeGit, GitCall};
pub use fake_process::FakeLauncher;
