//! Handlers Layer
//!
//! HTTP handlers bridging requests to the repository.

mod health;
mod notes;

pub use health::health;
pub use notes::list_notes;
