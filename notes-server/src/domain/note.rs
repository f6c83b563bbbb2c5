//! Note domain entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A note: an identifier paired with display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub text: String,
}

impl Entity for Note {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Note {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    /// Notes served when no seed file is configured
    pub fn defaults() -> Vec<Note> {
        vec![Note::new(1, "Buy milk"), Note::new(2, "Call mom")]
    }
}
