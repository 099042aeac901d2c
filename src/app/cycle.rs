use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::app::generator;
use crate::app::publisher::{PublishOutcome, RepositoryPublisher};
use crate::app::writer::ArtifactWriter;
use crate::domain::AppError;
use crate::ports::{Clock, GitPort};

/// Result of one successful generate, write and publish pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub path: PathBuf,
    pub outcome: PublishOutcome,
}

/// Something the scheduler can fire.
pub trait CycleRunner {
    fn run_cycle(&mut self) -> Result<CycleReport, AppError>;
}

/// Generate, then write, then publish.
pub struct CyclePipeline<G: GitPort, C: Clock> {
    writer: ArtifactWriter,
    publisher: RepositoryPublisher<G>,
    clock: C,
    rng: StdRng,
}

impl<G: GitPort, C: Clock> CyclePipeline<G, C> {
    pub fn new(writer: ArtifactWriter, publisher: RepositoryPublisher<G>, clock: C) -> Self {
        Self::with_rng(writer, publisher, clock, StdRng::from_entropy())
    }

    pub fn with_rng(
        writer: ArtifactWriter,
        publisher: RepositoryPublisher<G>,
        clock: C,
        rng: StdRng,
    ) -> Self {
        Self { writer, publisher, clock, rng }
    }

    pub fn publisher(&self) -> &RepositoryPublisher<G> {
        &self.publisher
    }
}

impl<G: GitPort, C: Clock> CycleRunner for CyclePipeline<G, C> {
    fn run_cycle(&mut self) -> Result<CycleReport, AppError> {
        info!("Starting code generation and push process");

        let now = self.clock.now();
        let artifact = generator::generate(&mut self.rng, now);
        info!(kind = %artifact.kind, "Generated snippet");

        let path = self
            .writer
            .write_artifact(&artifact)
            .inspect_err(|e| error!("Failed to write artifact: {e}"))?;
        let outcome = self.publisher.publish(&path, &now)?;

        info!("Cycle finished: {}", path.display());
        Ok(CycleReport { path, outcome })
    }
}
