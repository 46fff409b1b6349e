use contracts::domain::common::{Entity, ListQuery, Paginated, RecordId, RowSelection};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::dialog::confirm;
use crate::shared::entity_client::EntityClient;
use crate::shared::toast::{use_toast, ToastService};

/// State and commands of a server-paginated list page.
///
/// The loading effect tracks the filter and the entity revision, so any
/// filter change or successful mutation of `E` reloads the page. Responses
/// that arrive after a newer request was issued are ignored.
pub struct ListController<E: Entity> {
    pub filter: RwSignal<E::Filter>,
    pub data: RwSignal<Paginated<E>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub selection: RwSignal<RowSelection>,
    pub deleting: RwSignal<bool>,
    pub filters_expanded: RwSignal<bool>,
    api: EntityClient<E>,
    toast: ToastService,
    request_seq: StoredValue<u64>,
}

impl<E: Entity> Clone for ListController<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ListController<E> {}

impl<E: Entity> ListController<E> {
    /// `api` is the entity's hook (`use_company_api()`, ...)
    pub fn new(api: EntityClient<E>) -> Self {
        Self::with_filter(api, E::Filter::default())
    }

    pub fn with_filter(api: EntityClient<E>, initial: E::Filter) -> Self {
        let this = Self {
            filter: RwSignal::new(initial),
            data: RwSignal::new(Paginated::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            selection: RwSignal::new(RowSelection::default()),
            deleting: RwSignal::new(false),
            filters_expanded: RwSignal::new(false),
            api,
            toast: use_toast(),
            request_seq: StoredValue::new(0),
        };

        Effect::new(move |_| {
            let filter = this.filter.get();
            let _revision = this.api.revision();
            this.fetch(filter);
        });

        this
    }

    fn fetch(&self, filter: E::Filter) {
        let this = *self;
        this.request_seq.update_value(|seq| *seq += 1);
        let seq = this.request_seq.get_value();
        this.loading.set(true);

        spawn_local(async move {
            let result = this.api.list(&filter).await;
            if this.request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(page) => {
                    let ids: Vec<RecordId> = page.items.iter().map(|item| item.id()).collect();
                    this.selection.update(|s| s.retain_visible(&ids));
                    this.data.set(page);
                    this.error.set(None);
                }
                Err(e) => {
                    log::warn!("{} list failed: {}", E::full_name(), e);
                    this.error
                        .set(Some(format!("No se pudo cargar {}: {}", E::list_name(), e)));
                }
            }
            this.loading.set(false);
        });
    }

    /// Reload bypassing the cache
    pub fn refresh(&self) {
        self.api.invalidate();
    }

    /// Change entity-specific filters; restarts at page 1
    pub fn update_filter(&self, change: impl FnOnce(&mut E::Filter)) {
        self.filter.update(|f| {
            change(f);
            f.list_params_mut().set_page(1);
        });
    }

    pub fn set_search(&self, search: &str) {
        self.filter.update(|f| f.list_params_mut().set_search(search));
    }

    pub fn set_page(&self, page: u32) {
        let last = self.data.with_untracked(|d| d.total_pages());
        self.filter
            .update(|f| f.list_params_mut().set_page(page.min(last)));
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.filter
            .update(|f| f.list_params_mut().set_page_size(page_size));
    }

    /// Clear every filter but keep the page size
    pub fn reset_filters(&self) {
        self.filter.update(|f| {
            let page_size = f.list_params().page_size;
            *f = E::Filter::default();
            f.list_params_mut().set_page_size(page_size);
        });
    }

    pub fn active_filters(&self) -> Signal<usize> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|f| f.active_filters()))
    }

    pub fn visible_ids(&self) -> Signal<Vec<RecordId>> {
        let data = self.data;
        Signal::derive(move || data.with(|d| d.items.iter().map(|i| i.id()).collect()))
    }

    /// Ask for confirmation, then delete every selected row
    pub fn delete_selected(&self) {
        let ids = self.selection.with_untracked(|s| s.ids());
        if ids.is_empty() || self.deleting.get_untracked() {
            return;
        }
        let question = format!(
            "¿Eliminar {} registro(s) de {}? Esta acción no se puede deshacer.",
            ids.len(),
            E::list_name()
        );
        if !confirm(&question) {
            return;
        }

        let this = *self;
        this.deleting.set(true);
        spawn_local(async move {
            match this.api.delete_many(&ids).await {
                Ok(count) => {
                    this.toast
                        .success(format!("{} registro(s) eliminados", count));
                }
                Err(e) => this.toast.error(e),
            }
            this.selection.update(|s| s.clear());
            this.deleting.set(false);
        });
    }
}
