use std::fs;
use std::path::PathBuf;

use chrono::Local;
use rand::seq::SliceRandom;
use tracing::info;

use crate::domain::artifact::{artifact_file_name, supported_extensions};
use crate::domain::validation::validate_file_name;
use crate::domain::{AppError, GeneratedArtifact};

/// Persists snippet text into the working directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Write `text` verbatim and return the path written.
    ///
    /// Without a `filename` the name is `auto_generated_<now>.<ext>` where
    /// `ext` is drawn at random, independent of the content. An existing file
    /// of the same name is overwritten.
    pub fn write(&self, text: &str, filename: Option<&str>) -> Result<PathBuf, AppError> {
        let name = match filename {
            Some(name) => {
                if !validate_file_name(name) {
                    return Err(AppError::InvalidFileName(name.to_string()));
                }
                name.to_string()
            }
            None => {
                let extensions = supported_extensions();
                let ext = extensions.choose(&mut rand::thread_rng()).copied().unwrap_or("py");
                artifact_file_name(&Local::now().naive_local(), ext)
            }
        };
        self.write_named(text, &name)
    }

    /// Write a generated artifact under a name whose extension matches its kind.
    pub fn write_artifact(&self, artifact: &GeneratedArtifact) -> Result<PathBuf, AppError> {
        self.write_named(&artifact.content, &artifact.file_name())
    }

    fn write_named(&self, text: &str, name: &str) -> Result<PathBuf, AppError> {
        let path = self.root.join(name);
        fs::write(&path, text)
            .map_err(|source| AppError::ArtifactWrite { path: path.clone(), source })?;
        info!("Generated file: {}", path.display());
        Ok(path)
    }
}
