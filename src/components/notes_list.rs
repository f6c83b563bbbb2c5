//! Notes List Component
//!
//! Loads the notes once on mount and renders loading, error or the list.

use leptos::prelude::*;

use crate::api;
use crate::display::{NotesDisplay, LOADING_TEXT};
use crate::query::use_query;

pub const NOTES_QUERY_KEY: &str = "notes";

#[component]
pub fn Notes() -> impl IntoView {
    let notes = use_query(NOTES_QUERY_KEY, api::fetch_notes);

    move || match notes.with(NotesDisplay::from_state) {
        NotesDisplay::Loading => view! { <span>{LOADING_TEXT}</span> }.into_any(),
        failed @ NotesDisplay::Failed { .. } => {
            view! { <span>{failed.error_line()}</span> }.into_any()
        }
        NotesDisplay::List(items) => view! {
            <ul>
                <For
                    each=move || items.clone()
                    key=|note| note.id
                    children=|note| view! { <li>{note.text}</li> }
                />
            </ul>
        }
        .into_any(),
    }
}
