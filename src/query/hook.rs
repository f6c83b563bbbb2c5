//! `use_query` Hook
//!
//! Runs one fetch per mount and exposes its state as a signal.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{use_query_client, QueryError, QueryState};

/// Issue `fetcher` once when the calling component mounts.
///
/// Starts as `Success` when the shared cache already holds data for `key`,
/// otherwise `Pending`. A failure does not clear cached data. No retries.
pub fn use_query<T, F, Fut>(key: &'static str, fetcher: F) -> ReadSignal<QueryState<T>>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, QueryError>> + 'static,
{
    let client = use_query_client();
    let initial = client
        .cached::<T>(key)
        .map(QueryState::Success)
        .unwrap_or_default();
    let (state, set_state) = signal(initial);

    // Tracks nothing, so this runs exactly once per mount
    Effect::new(move |_| {
        client.record_fetch(key);
        let request = fetcher();
        spawn_local(async move {
            let result = request.await;
            if let Ok(data) = &result {
                client.store_success(key, data);
            }
            set_state.set(QueryState::from_result(result));
        });
    });

    state
}
