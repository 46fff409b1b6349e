//! Client-side cache of read results, keyed by entity and query scope.
//!
//! Values are stored as JSON so one cache can hold every entity type. Time is
//! passed in explicitly (milliseconds) so the freshness rules stay testable.

use std::collections::HashMap;

use contracts::domain::common::RecordId;
use serde_json::Value;

/// What part of an entity a cached value describes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryScope {
    /// A list page, keyed by its serialized query string
    List(String),
    Detail(RecordId),
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: String,
    pub scope: QueryScope,
}

impl QueryKey {
    pub fn list(entity: &str, query: &str) -> Self {
        Self {
            entity: entity.to_string(),
            scope: QueryScope::List(query.to_string()),
        }
    }

    pub fn detail(entity: &str, id: RecordId) -> Self {
        Self {
            entity: entity.to_string(),
            scope: QueryScope::Detail(id),
        }
    }

    pub fn stats(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            scope: QueryScope::Stats,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

pub fn minutes_to_ms(minutes: u32) -> f64 {
    f64::from(minutes) * 60_000.0
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached value if it was fetched less than `stale_ms` ago
    pub fn get_fresh(&self, key: &QueryKey, now_ms: f64, stale_ms: f64) -> Option<&Value> {
        let entry = self.entries.get(key)?;
        if now_ms - entry.fetched_at_ms < stale_ms {
            Some(&entry.value)
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: QueryKey, value: Value, now_ms: f64) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at_ms: now_ms,
            },
        );
    }

    pub fn remove(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry of an entity (lists, details and stats). Returns how
    /// many entries were removed.
    pub fn invalidate_entity(&mut self, entity: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.entity != entity);
        before - self.entries.len()
    }

    /// Drop entries that can no longer be served
    pub fn evict_stale(&mut self, now_ms: f64, max_age_ms: f64) {
        self.entries
            .retain(|_, entry| now_ms - entry.fetched_at_ms < max_age_ms);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIVE_MIN: f64 = 5.0 * 60_000.0;

    #[test]
    fn test_fresh_until_stale_window() {
        let mut cache = QueryCache::new();
        let key = QueryKey::detail("a005_link", 7);
        cache.insert(key.clone(), json!({"id": 7}), 1_000.0);

        assert!(cache.get_fresh(&key, 1_000.0, FIVE_MIN).is_some());
        assert!(cache.get_fresh(&key, 1_000.0 + FIVE_MIN - 1.0, FIVE_MIN).is_some());
        assert!(cache.get_fresh(&key, 1_000.0 + FIVE_MIN, FIVE_MIN).is_none());
    }

    #[test]
    fn test_list_keys_differ_by_query() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::list("a001_company", "page=1"), json!([1]), 0.0);

        assert!(cache
            .get_fresh(&QueryKey::list("a001_company", "page=2"), 0.0, FIVE_MIN)
            .is_none());
        assert_eq!(
            cache.get_fresh(&QueryKey::list("a001_company", "page=1"), 0.0, FIVE_MIN),
            Some(&json!([1]))
        );
    }

    #[test]
    fn test_invalidate_entity_drops_all_scopes() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::list("a001_company", ""), json!([]), 0.0);
        cache.insert(QueryKey::detail("a001_company", 1), json!({}), 0.0);
        cache.insert(QueryKey::stats("a001_company"), json!({}), 0.0);
        cache.insert(QueryKey::stats("a002_contact"), json!({}), 0.0);

        assert_eq!(cache.invalidate_entity("a001_company"), 3);
        assert_eq!(cache.len(), 1);
        assert!(cache
            .get_fresh(&QueryKey::stats("a002_contact"), 0.0, FIVE_MIN)
            .is_some());
    }

    #[test]
    fn test_evict_stale() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::stats("a"), json!(1), 0.0);
        cache.insert(QueryKey::stats("b"), json!(2), FIVE_MIN);
        cache.evict_stale(FIVE_MIN + 1.0, FIVE_MIN);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_minutes_to_ms() {
        assert_eq!(minutes_to_ms(30), 1_800_000.0);
    }
}
