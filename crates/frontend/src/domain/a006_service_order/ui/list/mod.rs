use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a006_service_order::aggregate::{OrderStatus, ServiceOrder};
use leptos::prelude::*;

use crate::shared::components::DateRangePicker;
use crate::shared::date_utils::format_optional_date;
use crate::shared::form::use_reference_options;
use crate::shared::list::{
    choice_options, or_dash, ChoiceFilter, Column, EntityListPage, ListController, ReferenceFilter,
};
use crate::domain::a006_service_order::api::use_service_order_api;

pub fn status_badge(status: OrderStatus) -> (String, &'static str) {
    let modifier = match status {
        OrderStatus::Draft => "neutral",
        OrderStatus::Scheduled => "info",
        OrderStatus::InProgress => "warning",
        OrderStatus::Completed => "success",
        OrderStatus::Cancelled => "error",
    };
    (status.label().to_string(), modifier)
}

#[component]
pub fn ServiceOrderList() -> impl IntoView {
    let list = ListController::new(use_service_order_api());
    let companies = use_reference_options::<Company>();

    let columns = vec![
        Column::strong("Número", |o: &ServiceOrder| o.number.clone()),
        Column::text("Tipo", |o: &ServiceOrder| o.order_type.label().to_string()),
        Column::text("Empresa", |o: &ServiceOrder| or_dash(o.company_name.as_ref())).width(180.0),
        Column::badge("Estado", |o: &ServiceOrder| status_badge(o.status)),
        Column::text("Programada", |o: &ServiceOrder| format_optional_date(o.scheduled_date)),
        Column::text("Descripción", |o: &ServiceOrder| or_dash(o.description.as_ref())).width(240.0),
    ];

    let filters = move || {
        view! {
            <ChoiceFilter
                label="Estado"
                options=choice_options(&OrderStatus::ALL, OrderStatus::code, OrderStatus::label)
                value=Signal::derive(move || {
                    list.filter.with(|f| f.status.map(|s| s.code().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |code: String| {
                    list.update_filter(|f| f.status = OrderStatus::from_code(&code))
                })
            />
            <ReferenceFilter
                label="Empresa"
                options=companies
                value=Signal::derive(move || list.filter.with(|f| f.company_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.company_id = id))
            />
            <DateRangePicker
                label="Fecha programada"
                range=Signal::derive(move || list.filter.with(|f| f.scheduled.clone()))
                on_change=Callback::new(move |range| list.update_filter(|f| f.scheduled = range))
            />
        }
    };

    view! {
        <EntityListPage list=list columns=columns filters=filters search_placeholder="Número o descripción..." />
    }
}
