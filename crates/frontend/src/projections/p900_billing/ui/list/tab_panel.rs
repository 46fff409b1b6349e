use contracts::domain::a001_company::aggregate::Company;
use contracts::projections::p900_billing::{totals_by_currency, BillingRecord, BillingTab};
use leptos::prelude::*;
use thaw::*;

use super::state::BillingTabState;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{DateRangePicker, FilterPanel, PaginationControls};
use crate::shared::date_utils::format_optional_date;
use crate::shared::debounce::debounce_search;
use crate::shared::form::use_reference_options;
use crate::shared::icons::icon;
use crate::shared::list::{or_dash, ReferenceFilter};

fn totals_label(records: &[BillingRecord]) -> String {
    totals_by_currency(records)
        .into_iter()
        .map(|(currency, total)| format!("{:.2} {}", total, currency))
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Last column depends on the stage: accounting date or invoice
fn stage_detail(tab: BillingTab, record: &BillingRecord) -> String {
    match tab {
        BillingTab::PorContabilizar => record.status.label().to_string(),
        BillingTab::PorFacturar => format_optional_date(record.accounted_date),
        BillingTab::Facturado => match &record.invoice_number {
            Some(number) => format!("{} ({})", number, format_optional_date(record.invoice_date)),
            None => "—".to_string(),
        },
    }
}

fn stage_title(tab: BillingTab) -> &'static str {
    match tab {
        BillingTab::PorContabilizar => "Estado",
        BillingTab::PorFacturar => "Contabilizado",
        BillingTab::Facturado => "Factura",
    }
}

#[component]
pub fn BillingTabPanel(tab: BillingTab) -> impl IntoView {
    let state = BillingTabState::new(tab);
    let companies = use_reference_options::<Company>();
    let selectable = tab.bulk_action().is_some();

    let search = RwSignal::new(String::new());
    let apply_search = move || state.set_search(&search.get_untracked());
    debounce_search(search, move |text| state.set_search(&text));

    let bulk_button = tab.bulk_action().map(|action| {
        let enabled = state.can_run_bulk();
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| state.run_bulk()
                disabled=Signal::derive(move || !enabled.get())
            >
                {icon("check")}
                {move || {
                    if state.running.get() {
                        " Procesando...".to_string()
                    } else {
                        match state.selection.with(|s| s.len()) {
                            0 => format!(" {}", action.label()),
                            n => format!(" {} ({})", action.label(), n),
                        }
                    }
                }}
            </Button>
        }
    });

    view! {
        <div class="page__toolbar">
            {bulk_button}
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| state.export_visible()
                disabled=Signal::derive(move || state.data.with(|d| d.items.is_empty()))
            >
                {icon("download")}
                " Exportar CSV"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| state.refresh()
                disabled=Signal::derive(move || state.loading.get())
            >
                {icon("refresh")}
                {move || if state.loading.get() { " Cargando..." } else { " Actualizar" }}
            </Button>
        </div>

        <div class="page__content">
            {move || state.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <FilterPanel
                is_expanded=state.filters_expanded
                active_filters_count=state.active_filters()
                on_clear=Callback::new(move |_| {
                    search.set(String::new());
                    state.reset_filters();
                })
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || state.filter.with(|f| f.params.page))
                        total_pages=Signal::derive(move || state.data.with(|d| d.total_pages()))
                        total_count=Signal::derive(move || state.data.with(|d| d.total))
                        page_size=Signal::derive(move || state.filter.with(|f| f.params.page_size))
                        on_page_change=Callback::new(move |page| state.set_page(page))
                        on_page_size_change=Callback::new(move |size| state.set_page_size(size))
                    />
                }
                .into_any()
                filter_content=move || view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div class="filter-panel__search">
                            <Input value=search placeholder="Orden, concepto o factura..." />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            {icon("search")}
                            " Buscar"
                        </Button>
                        <ReferenceFilter
                            label="Empresa"
                            options=companies
                            value=Signal::derive(move || state.filter.with(|f| f.company_id))
                            on_change=Callback::new(move |id| state.update_filter(|f| f.company_id = id))
                        />
                        <DateRangePicker
                            label="Periodo"
                            range=Signal::derive(move || state.filter.with(|f| f.period.clone()))
                            on_change=Callback::new(move |range| state.set_period(range))
                        />
                    </Flex>
                }
                .into_any()
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {selectable.then(|| view! {
                                <TableHeaderCheckbox visible_ids=state.visible_ids() selection=state.selection />
                            })}
                            <TableHeaderCell>"Orden"</TableHeaderCell>
                            <TableHeaderCell>"Empresa"</TableHeaderCell>
                            <TableHeaderCell>"Concepto"</TableHeaderCell>
                            <TableHeaderCell>"Periodo"</TableHeaderCell>
                            <TableHeaderCell>"Importe"</TableHeaderCell>
                            <TableHeaderCell>{stage_title(tab)}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.data.with(|d| d.items.clone())
                            key=|record| record.id
                            children=move |record: BillingRecord| {
                                let id = record.id;
                                let order_number = or_dash(record.order_number.as_ref());
                                let company_name = record.company_name.clone();
                                let concept = record.concept.clone();
                                let period = record.period_label();
                                let amount = record.amount_label();
                                let detail = stage_detail(tab, &record);
                                view! {
                                    <TableRow>
                                        {selectable.then(|| view! {
                                            <TableCellCheckbox item_id=id selection=state.selection />
                                        })}
                                        <TableCell>{order_number}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{company_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{concept}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{period}</TableCell>
                                        <TableCell class="table__cell--number">{amount}</TableCell>
                                        <TableCell>{detail}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
            <div class="table__totals">
                "Total de la página: "
                {move || state.data.with(|d| totals_label(&d.items))}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::projections::p900_billing::BillingStatus;

    fn invoiced() -> BillingRecord {
        BillingRecord {
            id: 1,
            order_id: None,
            order_number: None,
            company_id: 2,
            company_name: "Redes del Sur".into(),
            concept: "Cuota mensual".into(),
            amount: 80.0,
            currency: "EUR".into(),
            period: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: BillingStatus::Invoiced,
            accounted_date: NaiveDate::from_ymd_opt(2024, 2, 2),
            invoice_number: Some("F-2024-0012".into()),
            invoice_date: NaiveDate::from_ymd_opt(2024, 2, 5),
        }
    }

    #[test]
    fn test_stage_detail() {
        let record = invoiced();
        assert_eq!(
            stage_detail(BillingTab::Facturado, &record),
            "F-2024-0012 (05/02/2024)"
        );
        assert_eq!(stage_detail(BillingTab::PorFacturar, &record), "02/02/2024");
    }

    #[test]
    fn test_totals_label() {
        let mut other = invoiced();
        other.amount = 20.5;
        assert_eq!(totals_label(&[invoiced(), other]), "100.50 EUR");
        assert_eq!(totals_label(&[]), "");
    }
}
