//! UI Components
//!
//! Leptos components for the notes page.

mod query_client_provider;
mod notes_list;

pub use query_client_provider::QueryClientProvider;
pub use notes_list::Notes;
