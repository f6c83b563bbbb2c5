//! Domain Layer
//!
//! Domain entities and core abstractions.
//! No external dependencies except serde and thiserror.

mod entity;
mod note;

pub use entity::{Entity, DomainError, DomainResult};
pub use note::Note;
