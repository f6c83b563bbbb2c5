//! Notes Display Model
//!
//! What the notes list shows for a given query state, kept free of DOM code.

use std::collections::HashSet;

use crate::models::Note;
use crate::query::QueryState;

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesDisplay {
    /// Loading indicator, no items
    Loading,
    /// Error line with the failure message
    Failed { message: String },
    /// One list item per note, in response order
    List(Vec<Note>),
}

impl NotesDisplay {
    pub fn from_state(state: &QueryState<Vec<Note>>) -> Self {
        match state {
            QueryState::Pending => Self::Loading,
            QueryState::Error(err) => Self::Failed {
                message: err.message().to_string(),
            },
            QueryState::Success(notes) => Self::List(unique_by_id(notes)),
        }
    }

    /// Number of list items rendered
    pub fn item_count(&self) -> usize {
        match self {
            Self::List(notes) => notes.len(),
            _ => 0,
        }
    }

    /// Full error line, e.g. "Error: Failed to fetch"
    pub fn error_line(&self) -> Option<String> {
        match self {
            Self::Failed { message } => Some(format!("Error: {}", message)),
            _ => None,
        }
    }
}

/// Ids are list keys; a repeated id keeps its first occurrence.
fn unique_by_id(notes: &[Note]) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .iter()
        .filter(|note| seen.insert(note.id))
        .cloned()
        .collect()
}
