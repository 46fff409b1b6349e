use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a005_link::aggregate::{Link, LinkStatus};
use contracts::domain::a011_link_type::aggregate::LinkType;
use leptos::prelude::*;

use crate::shared::components::DateRangePicker;
use crate::shared::date_utils::format_optional_date;
use crate::shared::form::use_reference_options;
use crate::shared::list::{
    choice_options, or_dash, ChoiceFilter, Column, EntityListPage, ListController, ReferenceFilter,
};
use crate::domain::a005_link::api::use_link_api;

pub fn status_badge(status: LinkStatus) -> (String, &'static str) {
    let modifier = match status {
        LinkStatus::Pending | LinkStatus::Provisioning => "info",
        LinkStatus::Active => "success",
        LinkStatus::Suspended => "warning",
        LinkStatus::Cancelled => "neutral",
    };
    (status.label().to_string(), modifier)
}

#[component]
pub fn LinkList() -> impl IntoView {
    let list = ListController::new(use_link_api());
    let companies = use_reference_options::<Company>();
    let link_types = use_reference_options::<LinkType>();

    let columns = vec![
        Column::strong("Código", |l: &Link| l.code.clone()),
        Column::text("Nombre", |l: &Link| l.name.clone()).width(200.0),
        Column::text("Empresa", |l: &Link| or_dash(l.company_name.as_ref())).width(160.0),
        Column::number("Mbps", |l: &Link| or_dash(l.bandwidth_mbps)),
        Column::number("VLAN", |l: &Link| or_dash(l.vlan)),
        Column::badge("Estado", |l: &Link| status_badge(l.status)),
        Column::text("Activación", |l: &Link| format_optional_date(l.activation_date)),
    ];

    let filters = move || {
        view! {
            <ChoiceFilter
                label="Estado"
                options=choice_options(&LinkStatus::ALL, LinkStatus::code, LinkStatus::label)
                value=Signal::derive(move || {
                    list.filter.with(|f| f.status.map(|s| s.code().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |code: String| {
                    list.update_filter(|f| f.status = LinkStatus::from_code(&code))
                })
            />
            <ReferenceFilter
                label="Empresa"
                options=companies
                value=Signal::derive(move || list.filter.with(|f| f.company_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.company_id = id))
            />
            <ReferenceFilter
                label="Tipo de enlace"
                options=link_types
                value=Signal::derive(move || list.filter.with(|f| f.link_type_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.link_type_id = id))
            />
            <DateRangePicker
                label="Activación"
                range=Signal::derive(move || list.filter.with(|f| f.activation.clone()))
                on_change=Callback::new(move |range| list.update_filter(|f| f.activation = range))
            />
        }
    };

    view! {
        <EntityListPage list=list columns=columns filters=filters search_placeholder="Código o nombre..." />
    }
}
