use super::{ListParams, RecordId};
use crate::shared::validation::FormSchema;
use serde::{de::DeserializeOwned, Serialize};

/// Query parameters accepted by a list endpoint.
///
/// Every filter embeds the common [`ListParams`] so pagination controls can
/// work on any list without knowing its entity-specific filters.
pub trait ListQuery: Serialize + Clone + Default + PartialEq + Send + Sync + 'static {
    fn list_params(&self) -> &ListParams;
    fn list_params_mut(&mut self) -> &mut ListParams;

    /// Number of entity-specific filters currently set (search excluded)
    fn active_filters(&self) -> usize {
        0
    }
}

impl ListQuery for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        self
    }
}

/// A back-office record exposed by the REST backend.
///
/// Instance methods describe one record, the associated functions describe
/// the entity class (REST endpoint, UI names, cache policy).
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create/update payload, validated before submission
    type FormData: FormSchema
        + Serialize
        + DeserializeOwned
        + Clone
        + Default
        + PartialEq
        + Send
        + Sync
        + 'static;

    /// List filter sent as query parameters
    type Filter: ListQuery;

    fn id(&self) -> RecordId;

    /// Short human-readable label (table cells, tab titles, pickers)
    fn display_name(&self) -> String;

    /// Populate an edit form from a loaded record
    fn to_form(&self) -> Self::FormData;

    /// Entity index in the system (e.g. "a001")
    fn entity_index() -> &'static str;

    /// Collection name (e.g. "company")
    fn collection_name() -> &'static str;

    /// REST path segment under `/api/` (e.g. "companies")
    fn endpoint() -> &'static str;

    /// UI name, singular
    fn element_name() -> &'static str;

    /// UI name, plural
    fn list_name() -> &'static str;

    /// How long cached reads of this entity stay fresh
    fn stale_minutes() -> u32 {
        10
    }

    /// Full system name (e.g. "a001_company"), also used as the list tab key
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }

    /// Tab key of the detail panel for a record, or for a new one
    fn detail_tab_key(id: Option<RecordId>) -> String {
        match id {
            Some(id) => format!("{}_detail_{}", Self::full_name(), id),
            None => format!("{}_detail_new", Self::full_name()),
        }
    }
}

/// Parse the record id out of a detail tab key built by [`Entity::detail_tab_key`].
///
/// Returns `Some(None)` for the "new record" tab and `None` when the key does
/// not belong to this entity.
pub fn parse_detail_tab_key<E: Entity>(key: &str) -> Option<Option<RecordId>> {
    let prefix = format!("{}_detail_", E::full_name());
    let rest = key.strip_prefix(&prefix)?;
    if rest == "new" {
        return Some(None);
    }
    rest.parse::<RecordId>().ok().map(Some)
}
