//! Seed Loading
//!
//! Reads the notes to serve from a JSON file.

use std::path::Path;

use crate::domain::{DomainError, DomainResult, Note};

/// Load a JSON array of `{id, text}` objects
pub fn load_seed(path: &Path) -> DomainResult<Vec<Note>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Internal(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_seed(&raw)
        .map_err(|e| DomainError::InvalidInput(format!("{}: {}", path.display(), e)))
}

fn parse_seed(raw: &str) -> Result<Vec<Note>, serde_json::Error> {
    serde_json::from_str(raw)
}
