//! Query Client Provider Component
//!
//! Gives its subtree a shared query cache.

use leptos::prelude::*;

use crate::query::QueryClient;

#[component]
pub fn QueryClientProvider(children: Children) -> impl IntoView {
    provide_context(QueryClient::new());
    children()
}
