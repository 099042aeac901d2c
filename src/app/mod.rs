pub mod cycle;
pub mod generator;
pub mod publisher;
pub mod scheduler;
pub mod supervisor;
pub mod writer;

pub use cycle::{CyclePipeline, CycleReport, CycleRunner};
pub use publisher::{PublishOutcome, RepositoryPublisher};
pub use scheduler::Scheduler;
pub use supervisor::Supervisor;
pub use writer::ArtifactWriter;
