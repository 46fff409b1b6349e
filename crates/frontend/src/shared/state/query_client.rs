use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use super::query_cache::{minutes_to_ms, QueryCache, QueryKey};

/// Entries older than this are never served, whatever the entity window
const MAX_ENTRY_AGE_MINUTES: u32 = 60;

/// Shared read cache plus a per-entity revision counter.
///
/// Lists read [`QueryClient::revision`] inside their loading effect so that a
/// successful mutation (which bumps the revision) makes them refetch.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    revisions: RwSignal<HashMap<String, u64>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new()),
            revisions: RwSignal::new(HashMap::new()),
        }
    }

    fn now_ms() -> f64 {
        js_sys::Date::now()
    }

    /// Fresh cached value, if any
    pub fn read<T: DeserializeOwned>(&self, key: &QueryKey, stale_minutes: u32) -> Option<T> {
        let now = Self::now_ms();
        let value = self.cache.with_value(|cache| {
            cache
                .get_fresh(key, now, minutes_to_ms(stale_minutes))
                .cloned()
        })?;
        serde_json::from_value(value).ok()
    }

    pub fn write<T: Serialize>(&self, key: QueryKey, value: &T) {
        let now = Self::now_ms();
        if let Ok(json) = serde_json::to_value(value) {
            self.cache.update_value(|cache| {
                cache.evict_stale(now, minutes_to_ms(MAX_ENTRY_AGE_MINUTES));
                cache.insert(key, json, now);
            });
        }
    }

    /// Serve from cache while fresh, otherwise run `fetch` and remember its
    /// result. Failures are returned as-is and leave the cache untouched.
    pub async fn fetch_cached<T, F, Fut>(
        &self,
        key: QueryKey,
        stale_minutes: u32,
        fetch: F,
    ) -> Result<T, String>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, String>>,
    {
        if let Some(hit) = self.read::<T>(&key, stale_minutes) {
            log::debug!("cache hit: {} {:?}", key.entity, key.scope);
            return Ok(hit);
        }
        let value = fetch().await?;
        self.write(key, &value);
        Ok(value)
    }

    /// Drop every cached read of an entity and notify mounted lists
    pub fn invalidate(&self, entity: &str) {
        let removed = self
            .cache
            .try_update_value(|cache| cache.invalidate_entity(entity))
            .unwrap_or(0);
        log::debug!("cache invalidated: {} ({} entries)", entity, removed);
        self.revisions.update(|revisions| {
            *revisions.entry(entity.to_string()).or_insert(0) += 1;
        });
    }

    /// Reactive revision of an entity; changes after each invalidation
    pub fn revision(&self, entity: &str) -> u64 {
        self.revisions
            .with(|revisions| revisions.get(entity).copied().unwrap_or(0))
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided")
}
