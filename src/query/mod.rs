//! Query Layer
//!
//! Shared query cache, query state and the `use_query` hook.

mod error;
mod state;
mod cache;
mod hook;

pub use error::QueryError;
pub use state::QueryState;
pub use cache::{QueryCache, QueryClient, use_query_client};
pub use hook::use_query;
