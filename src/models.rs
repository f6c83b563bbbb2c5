//! Frontend Models
//!
//! Data structures matching the notes API.

use serde::{Deserialize, Serialize};

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: String,
}

impl Note {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}
