//! Repository Layer - Core Traits
//!
//! Abstract read access to entities.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Read-only repository
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List all entities in storage order
    async fn list(&self) -> DomainResult<Vec<T>>;
}
