//! Notes handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::domain::Note;
use crate::error::{Result, ServerError};
use crate::repository::Repository;
use crate::state::AppState;

/// `GET /api/notes`
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>> {
    let notes = state
        .notes
        .list()
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    tracing::debug!(count = notes.len(), "Listing notes");
    Ok(Json(notes))
}
