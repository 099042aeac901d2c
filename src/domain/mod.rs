pub mod artifact;
pub mod config;
pub mod error;
pub mod schedule;
pub mod validation;

pub use artifact::{ContentKind, GeneratedArtifact};
pub use config::{AppConfig, CONFIG_FILE};
pub use error::AppError;
pub use schedule::TriggerPoint;
