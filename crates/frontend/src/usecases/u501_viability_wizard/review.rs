use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a002_contact::aggregate::Contact;
use contracts::domain::a007_viability::aggregate::ViabilityFormData;
use contracts::domain::a010_connection_type::aggregate::ConnectionType;
use contracts::domain::a011_link_type::aggregate::LinkType;
use contracts::domain::common::RecordId;
use contracts::shared::validation::FormErrors;
use leptos::prelude::*;

use crate::shared::form::binding::format_number;
use crate::shared::form::use_reference_options;

fn reference_name(options: &[(RecordId, String)], id: Option<RecordId>) -> String {
    match id {
        Some(id) => options
            .iter()
            .find(|(option_id, _)| *option_id == id)
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| format!("#{}", id)),
        None => "—".to_string(),
    }
}

fn text_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

fn coordinates(form: &ViabilityFormData) -> String {
    match (form.latitude, form.longitude) {
        (Some(lat), Some(lon)) => format!("{}, {}", format_number(Some(lat)), format_number(Some(lon))),
        _ => "—".to_string(),
    }
}

/// Read-only summary of the whole request before it is sent
#[component]
pub fn ViabilityReview(form: RwSignal<ViabilityFormData>, errors: RwSignal<FormErrors>) -> impl IntoView {
    let companies = use_reference_options::<Company>();
    let contacts = use_reference_options::<Contact>();
    let connection_types = use_reference_options::<ConnectionType>();
    let link_types = use_reference_options::<LinkType>();

    let row = |label: &'static str, value: Signal<String>| {
        view! {
            <div class="review__row">
                <dt>{label}</dt>
                <dd>{move || value.get()}</dd>
            </div>
        }
    };

    let company = Signal::derive(move || {
        companies.with(|o| form.with(|f| reference_name(o, f.company_id)))
    });
    let contact = Signal::derive(move || {
        contacts.with(|o| form.with(|f| reference_name(o, f.contact_id)))
    });
    let address = Signal::derive(move || {
        form.with(|f| match f.city.trim() {
            "" => text_or_dash(&f.address),
            city => format!("{}, {}", f.address.trim(), city),
        })
    });
    let position = Signal::derive(move || form.with(coordinates));
    let bandwidth = Signal::derive(move || {
        form.with(|f| match f.requested_bandwidth_mbps {
            Some(mbps) => format!("{} Mbps", format_number(Some(mbps))),
            None => "—".to_string(),
        })
    });
    let connection = Signal::derive(move || {
        connection_types.with(|o| form.with(|f| reference_name(o, f.connection_type_id)))
    });
    let link_type = Signal::derive(move || {
        link_types.with(|o| form.with(|f| reference_name(o, f.link_type_id)))
    });
    let notes = Signal::derive(move || form.with(|f| text_or_dash(&f.notes)));

    view! {
        <dl class="review">
            {row("Empresa", company)}
            {row("Contacto", contact)}
            {row("Dirección", address)}
            {row("Coordenadas", position)}
            {row("Ancho de banda", bandwidth)}
            {row("Tipo de conexión", connection)}
            {row("Tipo de enlace", link_type)}
            {row("Observaciones", notes)}
        </dl>
        {move || (!errors.with(|e| e.is_empty())).then(|| view! {
            <div class="alert alert--error">{errors.with(|e| e.summary())}</div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_name() {
        let options = vec![(1, "Fibra Norte".to_string()), (2, "Redes del Sur".to_string())];
        assert_eq!(reference_name(&options, Some(2)), "Redes del Sur");
        assert_eq!(reference_name(&options, Some(9)), "#9");
        assert_eq!(reference_name(&options, None), "—");
    }

    #[test]
    fn test_coordinates_need_both_values() {
        let mut form = ViabilityFormData {
            latitude: Some(42.5),
            ..Default::default()
        };
        assert_eq!(coordinates(&form), "—");
        form.longitude = Some(-0.75);
        assert_eq!(coordinates(&form), "42.5, -0.75");
    }
}
