//! Generic CRUD client behind every `use_<entity>_api()` hook.
//!
//! Reads go through the [`QueryClient`] cache using the entity's staleness
//! window. Successful mutations invalidate the entity; failures never touch
//! the cache.

use std::marker::PhantomData;

use contracts::domain::common::{Entity, EntityStats, Paginated, RecordId};

use super::api_utils::{endpoint_url, with_query};
use super::http;
use super::state::{use_query_client, QueryClient, QueryKey};

pub struct EntityClient<E: Entity> {
    query: QueryClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for EntityClient<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for EntityClient<E> {}

/// Serialize a list filter as a query string (`search=..&page=1&pageSize=25`)
pub fn query_string<Q: serde::Serialize>(filter: &Q) -> Result<String, String> {
    serde_qs::to_string(filter).map_err(|e| format!("Failed to encode query: {}", e))
}

impl<E: Entity> EntityClient<E> {
    pub fn new(query: QueryClient) -> Self {
        Self {
            query,
            _entity: PhantomData,
        }
    }

    /// Cache namespace of the entity (its full name)
    pub fn cache_key() -> String {
        E::full_name()
    }

    fn collection_url() -> String {
        endpoint_url(E::endpoint())
    }

    fn record_url(id: RecordId) -> String {
        format!("{}/{}", Self::collection_url(), id)
    }

    pub async fn list(&self, filter: &E::Filter) -> Result<Paginated<E>, String> {
        let query = query_string(filter)?;
        let url = with_query(Self::collection_url(), &query);
        self.query
            .fetch_cached(
                QueryKey::list(&Self::cache_key(), &query),
                E::stale_minutes(),
                || http::get_json::<Paginated<E>>(&url),
            )
            .await
    }

    /// `Ok(None)` when the backend answers 404
    pub async fn get_by_id(&self, id: RecordId) -> Result<Option<E>, String> {
        let key = QueryKey::detail(&Self::cache_key(), id);
        if let Some(hit) = self.query.read::<E>(&key, E::stale_minutes()) {
            return Ok(Some(hit));
        }
        let record = http::get_optional::<E>(&Self::record_url(id)).await?;
        if let Some(record) = &record {
            self.query.write(key, record);
        }
        Ok(record)
    }

    pub async fn create(&self, form: &E::FormData) -> Result<E, String> {
        let created: E = http::post_json(&Self::collection_url(), form).await?;
        self.invalidate();
        Ok(created)
    }

    pub async fn update(&self, id: RecordId, form: &E::FormData) -> Result<E, String> {
        let updated: E = http::put_json(&Self::record_url(id), form).await?;
        self.invalidate();
        Ok(updated)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), String> {
        http::delete(&Self::record_url(id)).await?;
        self.invalidate();
        Ok(())
    }

    /// Delete records one by one and invalidate once at the end.
    ///
    /// Returns the number deleted; if any delete failed the error lists them.
    pub async fn delete_many(&self, ids: &[RecordId]) -> Result<usize, String> {
        let mut deleted = 0;
        let mut failures = Vec::new();
        for id in ids {
            match http::delete(&Self::record_url(*id)).await {
                Ok(()) => deleted += 1,
                Err(e) => failures.push(format!("#{}: {}", id, e)),
            }
        }
        if deleted > 0 {
            self.invalidate();
        }
        if failures.is_empty() {
            Ok(deleted)
        } else {
            Err(format!(
                "{} de {} registros no se pudieron eliminar ({})",
                failures.len(),
                ids.len(),
                failures.join("; ")
            ))
        }
    }

    pub async fn stats(&self) -> Result<EntityStats, String> {
        let url = format!("{}/stats", Self::collection_url());
        self.query
            .fetch_cached(QueryKey::stats(&Self::cache_key()), E::stale_minutes(), || {
                http::get_json::<EntityStats>(&url)
            })
            .await
    }

    pub fn invalidate(&self) {
        self.query.invalidate(&Self::cache_key());
    }

    /// Reactive; read it in an effect to refetch after mutations
    pub fn revision(&self) -> u64 {
        self.query.revision(&Self::cache_key())
    }
}

/// Client for entity `E` bound to the app's query cache
pub fn use_entity_api<E: Entity>() -> EntityClient<E> {
    EntityClient::new(use_query_client())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_link::aggregate::{LinkFilter, LinkStatus};
    use contracts::domain::common::ListParams;

    #[test]
    fn test_query_string_uses_wire_names() {
        let mut params = ListParams::with_search("madrid");
        params.set_page(3);
        assert_eq!(
            query_string(&params).unwrap(),
            "search=madrid&page=3&pageSize=25"
        );
    }

    #[test]
    fn test_query_string_flattens_entity_filters() {
        let filter = LinkFilter {
            status: Some(LinkStatus::Active),
            company_id: Some(4),
            ..Default::default()
        };
        let query = query_string(&filter).unwrap();
        assert!(query.contains("status=active"));
        assert!(query.contains("company_id=4"));
        assert!(query.contains("pageSize=25"));
        assert!(!query.contains("date_from"));
    }
}
