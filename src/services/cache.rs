use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use serde_json::Value;
use tracing::debug;

/// Cache scope for a trip's detail view (trip plus destinations).
pub const DETAIL_DESTINATION: &str = "detail_destination";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub scope: &'static str,
    pub id: String,
}

impl QueryKey {
    pub fn detail_destination(trip_id: impl Into<String>) -> Self {
        Self {
            scope: DETAIL_DESTINATION,
            id: trip_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stale: bool,
}

/// Client-side cache of fetched query results. Mutations never write results
/// into it; they mark the affected key stale and the next read refetches.
/// Ownership of the authoritative data stays with the remote API.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, CacheEntry>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: QueryKey, value: Value) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(key, CacheEntry { value, stale: false });
    }

    /// The cached value, unless the entry is missing or has been invalidated.
    pub fn fresh(&self, key: &QueryKey) -> Option<Value> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| entry.value.clone())
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries.get(key).map(|entry| entry.stale).unwrap_or(false)
    }

    /// Mark an entry stale without dropping the cached value.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        if let Some(entry) = entries.get_mut(key) {
            entry.stale = true;
            debug!(scope = key.scope, id = %key.id, "cache entry invalidated");
        }
    }
}
