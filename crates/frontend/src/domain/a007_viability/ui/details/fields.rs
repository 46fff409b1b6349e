//! Field groups of the viability form, shared by the details panel and the
//! creation wizard (one group per wizard step).

use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a002_contact::aggregate::Contact;
use contracts::domain::a007_viability::aggregate::ViabilityFormData;
use contracts::domain::a010_connection_type::aggregate::ConnectionType;
use contracts::domain::a011_link_type::aggregate::LinkType;
use leptos::prelude::*;

use crate::shared::form::{
    bind_number, bind_ref, bind_text, use_reference_options, FormContext, ReferenceField,
    TextAreaField, TextField,
};

#[component]
pub fn CustomerFields(ctx: FormContext, form: RwSignal<ViabilityFormData>) -> impl IntoView {
    let companies = use_reference_options::<Company>();
    let contacts = use_reference_options::<Contact>();
    let company = bind_ref(form, |f| f.company_id, |f, v| f.company_id = v);
    let contact = bind_ref(form, |f| f.contact_id, |f, v| f.contact_id = v);

    view! {
        <div class="details-form__grid">
            <ReferenceField ctx=ctx field="company_id" binding=company options=companies label="Empresa" />
            <ReferenceField ctx=ctx field="contact_id" binding=contact options=contacts label="Contacto" />
        </div>
    }
}

#[component]
pub fn LocationFields(ctx: FormContext, form: RwSignal<ViabilityFormData>) -> impl IntoView {
    let address = bind_text(form, |f| f.address.clone(), |f, v| f.address = v);
    let city = bind_text(form, |f| f.city.clone(), |f, v| f.city = v);
    let latitude = bind_number(form, |f| f.latitude, |f, v| f.latitude = v);
    let longitude = bind_number(form, |f| f.longitude, |f, v| f.longitude = v);

    view! {
        <div class="details-form__grid">
            <TextField ctx=ctx field="address" binding=address />
            <TextField ctx=ctx field="city" binding=city />
            <TextField ctx=ctx field="latitude" binding=latitude placeholder="-90 a 90" />
            <TextField ctx=ctx field="longitude" binding=longitude placeholder="-180 a 180" />
        </div>
    }
}

#[component]
pub fn ServiceFields(ctx: FormContext, form: RwSignal<ViabilityFormData>) -> impl IntoView {
    let connection_types = use_reference_options::<ConnectionType>();
    let link_types = use_reference_options::<LinkType>();
    let bandwidth = bind_number(
        form,
        |f| f.requested_bandwidth_mbps,
        |f, v| f.requested_bandwidth_mbps = v,
    );
    let connection_type = bind_ref(form, |f| f.connection_type_id, |f, v| f.connection_type_id = v);
    let link_type = bind_ref(form, |f| f.link_type_id, |f, v| f.link_type_id = v);
    let notes = bind_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <div class="details-form__grid">
            <TextField ctx=ctx field="requested_bandwidth_mbps" binding=bandwidth />
            <ReferenceField
                ctx=ctx
                field="connection_type_id"
                binding=connection_type
                options=connection_types
                label="Tipo de conexión"
            />
            <ReferenceField ctx=ctx field="link_type_id" binding=link_type options=link_types label="Tipo de enlace" />
        </div>
        <TextAreaField ctx=ctx field="notes" binding=notes rows=4 />
    }
}
