use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::a005_link::aggregate::{Link, LinkStatus};
use contracts::domain::a010_connection_type::aggregate::ConnectionType;
use contracts::domain::a011_link_type::aggregate::LinkType;
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{
    bind_choice, bind_date, bind_id_input, bind_number, bind_ref, bind_text,
    use_reference_options, ReferenceField, SelectField, TextField,
};

#[component]
pub fn LinkDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Link>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let companies = use_reference_options::<Company>();
    let link_types = use_reference_options::<LinkType>();
    let connection_types = use_reference_options::<ConnectionType>();

    let code = bind_text(form, |f| f.code.clone(), |f, v| f.code = v);
    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let company = bind_ref(form, |f| f.company_id, |f, v| f.company_id = v);
    let link_type = bind_ref(form, |f| f.link_type_id, |f, v| f.link_type_id = v);
    let connection_type = bind_ref(form, |f| f.connection_type_id, |f, v| f.connection_type_id = v);
    // No catalogue endpoint for areas and locations; ids are typed
    let area = bind_id_input(form, |f| f.development_area_id, |f, v| f.development_area_id = v);
    let location = bind_id_input(form, |f| f.location_id, |f, v| f.location_id = v);
    let bandwidth = bind_number(form, |f| f.bandwidth_mbps, |f, v| f.bandwidth_mbps = v);
    let vlan = bind_number(form, |f| f.vlan, |f, v| f.vlan = v);
    let status = bind_choice(
        form,
        |f| f.status.code(),
        |f, code| {
            if let Some(status) = LinkStatus::from_code(code) {
                f.status = status;
            }
        },
    );
    let activation = bind_date(form, |f| f.activation_date, |f, v| f.activation_date = v);

    let statuses = LinkStatus::ALL.iter().map(|s| (s.code(), s.label())).collect::<Vec<_>>();

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|l: &Link| &l.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="code" binding=code />
                <TextField ctx=ctx field="name" binding=name />
                <ReferenceField ctx=ctx field="company_id" binding=company options=companies label="Empresa" />
                <ReferenceField ctx=ctx field="link_type_id" binding=link_type options=link_types label="Tipo de enlace" />
                <ReferenceField
                    ctx=ctx
                    field="connection_type_id"
                    binding=connection_type
                    options=connection_types
                    label="Tipo de conexión"
                />
                <TextField ctx=ctx field="development_area_id" binding=area label="ID área de desarrollo" />
                <TextField ctx=ctx field="location_id" binding=location label="ID ubicación" />
                <TextField ctx=ctx field="bandwidth_mbps" binding=bandwidth />
                <TextField ctx=ctx field="vlan" binding=vlan placeholder="1 - 4094" />
                <SelectField ctx=ctx field="status" binding=status options=statuses label="Estado" />
                <TextField ctx=ctx field="activation_date" binding=activation input_type="date" label="Fecha de activación" />
            </div>
        </EntityDetailsFrame>
    }
}
