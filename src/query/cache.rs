//! Query Cache
//!
//! Last successful data per query key, shared through context.
//! Uses reactive_stores so the whole cache lives in one store.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Cached data and bookkeeping for one query key
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CacheEntry {
    /// Last successful result, stored untyped
    pub data: Option<Value>,
    /// Number of fetches issued for this key
    pub fetches: u32,
}

/// All cache entries, keyed by query key
#[derive(Clone, Debug, Default, Store)]
pub struct QueryCache {
    pub entries: HashMap<String, CacheEntry>,
}

impl QueryCache {
    /// Last successful data for `key`, if it still decodes as `T`.
    pub fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = self.entries.get(key)?.data.as_ref()?;
        serde_json::from_value(data.clone()).ok()
    }

    pub fn store_success<T: Serialize>(&mut self, key: &str, data: &T) {
        // Data that cannot be represented as JSON is simply not cached
        if let Ok(value) = serde_json::to_value(data) {
            self.entries.entry(key.to_string()).or_default().data = Some(value);
        }
    }

    pub fn record_fetch(&mut self, key: &str) {
        self.entries.entry(key.to_string()).or_default().fetches += 1;
    }

    pub fn fetch_count(&self, key: &str) -> u32 {
        self.entries.get(key).map(|entry| entry.fetches).unwrap_or(0)
    }

    /// Drop cached data for `key`; the fetch count is kept.
    pub fn invalidate(&mut self, key: &str) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.data = None;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Handle to the shared cache, provided by `QueryClientProvider`
#[derive(Clone, Copy)]
pub struct QueryClient {
    store: Store<QueryCache>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            store: Store::new(QueryCache::default()),
        }
    }

    pub fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.store.read_untracked().cached(key)
    }

    pub fn store_success<T: Serialize>(&self, key: &str, data: &T) {
        self.store.write().store_success(key, data);
    }

    pub fn record_fetch(&self, key: &str) {
        self.store.write().record_fetch(key);
    }

    pub fn fetch_count(&self, key: &str) -> u32 {
        self.store.read_untracked().fetch_count(key)
    }

    pub fn invalidate(&self, key: &str) {
        self.store.write().invalidate(key);
    }

    pub fn clear(&self) {
        self.store.write().clear();
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the query client from context
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}
