use contracts::domain::common::{Entity, ListQuery, RecordId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::PICKER_PAGE_SIZE;
use crate::shared::entity_client::use_entity_api;

/// `(id, display name)` of the first records of `E`, for reference pickers.
///
/// Reloads after any mutation of `E`.
pub fn use_reference_options<E: Entity>() -> Signal<Vec<(RecordId, String)>> {
    let api = use_entity_api::<E>();
    let options = RwSignal::new(Vec::new());

    Effect::new(move |_| {
        let _revision = api.revision();
        let mut filter = E::Filter::default();
        filter.list_params_mut().set_page_size(PICKER_PAGE_SIZE);
        spawn_local(async move {
            match api.list(&filter).await {
                Ok(page) => options.set(
                    page.items
                        .iter()
                        .map(|item| (item.id(), item.display_name()))
                        .collect(),
                ),
                Err(e) => log::warn!("{} options failed: {}", E::full_name(), e),
            }
        });
    });

    options.into()
}
