//! Notes Frontend App
//!
//! Root component: a query client scope around the notes list.

use leptos::prelude::*;

use crate::components::{Notes, QueryClientProvider};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <QueryClientProvider>
            <Notes />
        </QueryClientProvider>
    }
}
