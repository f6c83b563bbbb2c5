//! Notes API
//!
//! Browser fetch bindings for the notes endpoint.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::Note;
use crate::query::QueryError;

pub const NOTES_ENDPOINT: &str = "/api/notes";

/// `GET /api/notes`, decoded as a list of notes.
pub async fn fetch_notes() -> Result<Vec<Note>, QueryError> {
    let result = request_notes().await;
    match &result {
        Ok(notes) => {
            web_sys::console::log_1(&format!("[Notes] Loaded {} notes", notes.len()).into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[Notes] Error loading {}: {}", NOTES_ENDPOINT, e).into());
        }
    }
    result
}

async fn request_notes() -> Result<Vec<Note>, QueryError> {
    let window = web_sys::window().ok_or_else(|| QueryError::new("no window available"))?;

    let response = JsFuture::from(window.fetch_with_str(NOTES_ENDPOINT))
        .await
        .map_err(QueryError::from_js)?;
    let response: Response = response.dyn_into().map_err(QueryError::from_js)?;

    if !response.ok() {
        return Err(status_error(response.status(), &response.status_text()));
    }

    let body = JsFuture::from(response.text().map_err(QueryError::from_js)?)
        .await
        .map_err(QueryError::from_js)?;
    let body = body
        .as_string()
        .ok_or_else(|| QueryError::new("response body is not text"))?;

    decode_notes(&body)
}

/// Decode a response body as a JSON array of notes.
pub fn decode_notes(body: &str) -> Result<Vec<Note>, QueryError> {
    serde_json::from_str(body).map_err(QueryError::from)
}

fn status_error(status: u16, status_text: &str) -> QueryError {
    let status_text = status_text.trim();
    if status_text.is_empty() {
        QueryError::new(format!("request failed with status {}", status))
    } else {
        QueryError::new(format!("request failed with status {} {}", status, status_text))
    }
}
