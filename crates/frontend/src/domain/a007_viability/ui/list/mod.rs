use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a007_viability::aggregate::{ViabilityRequest, ViabilityStatus};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_viability_wizard::ViabilityWizard;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::DateRangePicker;
use crate::shared::date_utils::format_optional_date;
use crate::shared::form::use_reference_options;
use crate::shared::icons::icon;
use crate::shared::list::{
    choice_options, or_dash, ChoiceFilter, Column, EntityListPage, ListController, ReferenceFilter,
};
use crate::domain::a007_viability::api::use_viability_api;

pub fn status_badge(status: ViabilityStatus) -> (String, &'static str) {
    let modifier = match status {
        ViabilityStatus::Requested => "neutral",
        ViabilityStatus::UnderStudy => "info",
        ViabilityStatus::Viable => "success",
        ViabilityStatus::NotViable => "error",
        ViabilityStatus::Cancelled => "neutral",
    };
    (status.label().to_string(), modifier)
}

#[component]
pub fn ViabilityList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let list = ListController::new(use_viability_api());
    let companies = use_reference_options::<Company>();

    let columns = vec![
        Column::strong("Número", |v: &ViabilityRequest| v.number.clone()),
        Column::text("Empresa", |v: &ViabilityRequest| or_dash(v.company_name.as_ref())).width(180.0),
        Column::text("Dirección", |v: &ViabilityRequest| v.address.clone()).width(220.0),
        Column::text("Ciudad", |v: &ViabilityRequest| or_dash(v.city.as_ref())),
        Column::number("Mbps", |v: &ViabilityRequest| v.requested_bandwidth_mbps.to_string()),
        Column::badge("Estado", |v: &ViabilityRequest| status_badge(v.status)),
        Column::text("Solicitada", |v: &ViabilityRequest| format_optional_date(v.requested_date)),
    ];

    let actions = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| {
                    tabs_store.open_tab(&ViabilityWizard::full_name(), ViabilityWizard::display_name())
                }
            >
                {icon("wand")}
                " Asistente"
            </Button>
        }
    };

    let filters = move || {
        view! {
            <ChoiceFilter
                label="Estado"
                options=choice_options(&ViabilityStatus::ALL, ViabilityStatus::code, ViabilityStatus::label)
                value=Signal::derive(move || {
                    list.filter.with(|f| f.status.map(|s| s.code().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |code: String| {
                    list.update_filter(|f| f.status = ViabilityStatus::from_code(&code))
                })
            />
            <ReferenceFilter
                label="Empresa"
                options=companies
                value=Signal::derive(move || list.filter.with(|f| f.company_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.company_id = id))
            />
            <DateRangePicker
                label="Fecha de solicitud"
                range=Signal::derive(move || list.filter.with(|f| f.requested.clone()))
                on_change=Callback::new(move |range| list.update_filter(|f| f.requested = range))
            />
        }
    };

    view! {
        <EntityListPage
            list=list
            columns=columns
            filters=filters
            actions=actions
            search_placeholder="Número, dirección o ciudad..."
        />
    }
}
