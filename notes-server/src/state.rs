//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::domain::Note;
use crate::error::Result;
use crate::repository::{load_seed, MemoryRepository, Repository};

pub struct AppState {
    pub config: ServerConfig,
    pub notes: Arc<dyn Repository<Note>>,
}

impl AppState {
    /// Loads the seed file when configured, built-in notes otherwise.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let notes = match &config.seed_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading notes from seed file");
                load_seed(path)?
            }
            None => Note::defaults(),
        };
        let repo = MemoryRepository::new(notes)?;
        tracing::info!(count = repo.len(), "Notes loaded");

        Ok(Self::with_repository(config, Arc::new(repo)))
    }

    pub fn with_repository(config: ServerConfig, notes: Arc<dyn Repository<Note>>) -> Self {
        Self { config, notes }
    }
}
