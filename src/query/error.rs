//! Query Error
//!
//! The single error type every failed query collapses into.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

const UNKNOWN_ERROR: &str = "unknown error";

/// A failed query. Only carries the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    /// Build an error; blank messages become "unknown error" so the UI never shows an empty one.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self { message: UNKNOWN_ERROR.to_string() }
        } else {
            Self { message }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convert a rejected promise or thrown JS value.
    pub fn from_js(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Self::new(String::from(err.message()));
        }
        match value.as_string() {
            Some(text) => Self::new(text),
            None => Self::new(format!("{:?}", value)),
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
