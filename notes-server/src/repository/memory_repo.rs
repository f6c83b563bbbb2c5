//! In-memory Repository
//!
//! Immutable after construction; ids must be unique.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Entity};
use super::traits::Repository;

pub struct MemoryRepository<T: Entity> {
    entities: Vec<T>,
}

impl<T: Entity> MemoryRepository<T> {
    /// Rejects duplicate ids, they are used as list keys by the UI
    pub fn new(entities: Vec<T>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.id()) {
                return Err(DomainError::Conflict(format!("duplicate id {}", entity.id())));
            }
        }
        Ok(Self { entities })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[async_trait]
impl<T: Entity + 'static> Repository<T> for MemoryRepository<T> {
    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.entities.clone())
    }
}
