use contracts::domain::common::{DateRange, ListQuery, Paginated, RecordId, RowSelection};
use contracts::projections::p900_billing::{BillingFilter, BillingRecord, BillingTab};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p900_billing::api::{use_billing_api, BillingClient};
use crate::shared::dialog::confirm;
use crate::shared::export::export_csv;
use crate::shared::toast::{use_toast, ToastService};

/// Filter after "Limpiar filtros": the tab status and page size survive
pub fn cleared_filter(tab: BillingTab, page_size: u32) -> BillingFilter {
    let mut filter = BillingFilter::for_tab(tab);
    filter.params.set_page_size(page_size);
    filter
}

pub fn export_filename(tab: BillingTab, page: u32) -> String {
    format!("facturacion_{}_p{}.csv", tab.key(), page)
}

/// State of one billing tab: its query, the loaded page, the row selection
/// and the running bulk action.
#[derive(Clone, Copy)]
pub struct BillingTabState {
    pub tab: BillingTab,
    pub filter: RwSignal<BillingFilter>,
    pub data: RwSignal<Paginated<BillingRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub selection: RwSignal<RowSelection>,
    pub running: RwSignal<bool>,
    pub filters_expanded: RwSignal<bool>,
    api: BillingClient,
    toast: ToastService,
    request_seq: StoredValue<u64>,
}

impl BillingTabState {
    pub fn new(tab: BillingTab) -> Self {
        let this = Self {
            tab,
            filter: RwSignal::new(BillingFilter::for_tab(tab)),
            data: RwSignal::new(Paginated::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            selection: RwSignal::new(RowSelection::default()),
            running: RwSignal::new(false),
            filters_expanded: RwSignal::new(true),
            api: use_billing_api(),
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

    fn fetch(&self, filter: BillingFilter) {
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
                    let ids: Vec<RecordId> = page.items.iter().map(|r| r.id).collect();
                    this.selection.update(|s| s.retain_visible(&ids));
                    this.data.set(page);
                    this.error.set(None);
                }
                Err(e) => {
                    log::warn!("billing {} failed: {}", this.tab.key(), e);
                    this.error
                        .set(Some(format!("No se pudo cargar la facturación: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn refresh(&self) {
        self.api.invalidate();
    }

    pub fn update_filter(&self, change: impl FnOnce(&mut BillingFilter)) {
        self.filter.update(|f| {
            change(f);
            f.params.set_page(1);
        });
    }

    pub fn set_search(&self, search: &str) {
        self.filter.update(|f| f.params.set_search(search));
    }

    pub fn set_period(&self, period: DateRange) {
        self.update_filter(|f| f.period = period);
    }

    pub fn set_page(&self, page: u32) {
        let last = self.data.with_untracked(|d| d.total_pages());
        self.filter.update(|f| f.params.set_page(page.min(last)));
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.filter.update(|f| f.params.set_page_size(page_size));
    }

    pub fn reset_filters(&self) {
        let tab = self.tab;
        self.filter
            .update(|f| *f = cleared_filter(tab, f.params.page_size));
    }

    pub fn active_filters(&self) -> Signal<usize> {
        let filter = self.filter;
        Signal::derive(move || filter.with(|f| f.active_filters()))
    }

    pub fn visible_ids(&self) -> Signal<Vec<RecordId>> {
        let data = self.data;
        Signal::derive(move || data.with(|d| d.items.iter().map(|r| r.id).collect()))
    }

    pub fn can_run_bulk(&self) -> Signal<bool> {
        let (tab, selection, running) = (self.tab, self.selection, self.running);
        Signal::derive(move || tab.can_run_bulk(selection.with(|s| s.len()), running.get()))
    }

    /// Confirm, run the tab's bulk action on the selection, clear it and
    /// report the outcome. A click while running is ignored.
    pub fn run_bulk(&self) {
        let Some(action) = self.tab.bulk_action() else {
            return;
        };
        let ids = self.selection.with_untracked(|s| s.ids());
        if !self.tab.can_run_bulk(ids.len(), self.running.get_untracked()) {
            return;
        }
        if !confirm(&format!("¿{} {} registro(s)?", action.label(), ids.len())) {
            return;
        }

        let this = *self;
        this.running.set(true);
        spawn_local(async move {
            match this.api.run_bulk(action, ids).await {
                Ok(response) => {
                    let summary = response.summary(action);
                    if response.is_complete_success() {
                        this.toast.success(summary);
                    } else {
                        this.toast.error(summary);
                    }
                    this.selection.update(|s| s.clear());
                }
                Err(e) => this
                    .toast
                    .error(format!("{} falló: {}", action.label(), e)),
            }
            this.running.set(false);
        });
    }

    /// CSV of the rows on screen
    pub fn export_visible(&self) {
        let page = self.filter.with_untracked(|f| f.params.page);
        let result = self
            .data
            .with_untracked(|d| export_csv(&d.items, &export_filename(self.tab, page)));
        if let Err(e) = result {
            self.toast.error(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::projections::p900_billing::BillingStatus;

    #[test]
    fn test_cleared_filter_keeps_tab_and_page_size() {
        let filter = cleared_filter(BillingTab::PorFacturar, 50);
        assert_eq!(filter.status, Some(BillingStatus::Accounted));
        assert_eq!(filter.params.page_size, 50);
        assert_eq!(filter.params.page, 1);
        assert_eq!(filter.active_filters(), 0);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(BillingTab::PorContabilizar, 2),
            "facturacion_por_contabilizar_p2.csv"
        );
    }
}
