use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a004_circuit::aggregate::{Circuit, CircuitStatus};
use leptos::prelude::*;

use crate::shared::date_utils::format_optional_date;
use crate::shared::form::use_reference_options;
use crate::shared::list::{
    choice_options, or_dash, ChoiceFilter, Column, EntityListPage, ListController, ReferenceFilter,
};
use crate::domain::a004_circuit::api::use_circuit_api;

pub fn status_badge(status: CircuitStatus) -> (String, &'static str) {
    let modifier = match status {
        CircuitStatus::Planned => "info",
        CircuitStatus::Active => "success",
        CircuitStatus::Suspended => "warning",
        CircuitStatus::Decommissioned => "neutral",
    };
    (status.label().to_string(), modifier)
}

fn odf_position(c: &Circuit) -> String {
    match (&c.odf, c.odf_port) {
        (Some(odf), Some(port)) => format!("{} / {}", odf, port),
        (Some(odf), None) => odf.clone(),
        _ => "—".to_string(),
    }
}

#[component]
pub fn CircuitList() -> impl IntoView {
    let list = ListController::new(use_circuit_api());
    let companies = use_reference_options::<Company>();

    let columns = vec![
        Column::strong("Código", |c: &Circuit| c.code.clone()),
        Column::text("Nombre", |c: &Circuit| c.name.clone()).width(180.0),
        Column::text("Empresa", |c: &Circuit| or_dash(c.company_name.as_ref())).width(160.0),
        Column::number("Mbps", |c: &Circuit| or_dash(c.bandwidth_mbps)),
        Column::text("ODF / puerto", odf_position),
        Column::badge("Estado", |c: &Circuit| status_badge(c.status)),
        Column::text("Instalación", |c: &Circuit| format_optional_date(c.installation_date)),
    ];

    let filters = move || {
        view! {
            <ChoiceFilter
                label="Estado"
                options=choice_options(&CircuitStatus::ALL, CircuitStatus::code, CircuitStatus::label)
                value=Signal::derive(move || {
                    list.filter.with(|f| f.status.map(|s| s.code().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |code: String| {
                    list.update_filter(|f| f.status = CircuitStatus::from_code(&code))
                })
            />
            <ReferenceFilter
                label="Empresa"
                options=companies
                value=Signal::derive(move || list.filter.with(|f| f.company_id))
                on_change=Callback::new(move |id| list.update_filter(|f| f.company_id = id))
            />
        }
    };

    view! {
        <EntityListPage list=list columns=columns filters=filters search_placeholder="Código o nombre..." />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_labels() {
        for status in CircuitStatus::ALL {
            let (label, modifier) = status_badge(status);
            assert_eq!(label, status.label());
            assert!(!modifier.is_empty());
        }
    }
}
