//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory_repo;
mod seed;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use memory_repo::MemoryRepository;
pub use seed::load_seed;
