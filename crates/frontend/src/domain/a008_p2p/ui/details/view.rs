use contracts::domain::a005_link::aggregate::Link;
use contracts::domain::a008_p2p::aggregate::{P2pRecord, P2pStatus};
use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{
    bind_choice, bind_number, bind_ref, bind_text, use_reference_options, ReferenceField,
    SelectField, TextField,
};

#[component]
pub fn P2pDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<P2pRecord>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let links = use_reference_options::<Link>();

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let point_a = bind_text(form, |f| f.point_a.clone(), |f, v| f.point_a = v);
    let point_b = bind_text(form, |f| f.point_b.clone(), |f, v| f.point_b = v);
    let link = bind_ref(form, |f| f.link_id, |f, v| f.link_id = v);
    let distance = bind_number(form, |f| f.distance_km, |f, v| f.distance_km = v);
    let status = bind_choice(
        form,
        |f| f.status.code(),
        |f, code| {
            if let Some(status) = P2pStatus::from_code(code) {
                f.status = status;
            }
        },
    );
    let statuses = P2pStatus::ALL.iter().map(|s| (s.code(), s.label())).collect::<Vec<_>>();

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|p: &P2pRecord| &p.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="name" binding=name />
                <SelectField ctx=ctx field="status" binding=status options=statuses label="Estado" />
                <TextField ctx=ctx field="point_a" binding=point_a />
                <TextField ctx=ctx field="point_b" binding=point_b />
                <ReferenceField ctx=ctx field="link_id" binding=link options=links label="Enlace" />
                <TextField ctx=ctx field="distance_km" binding=distance />
            </div>
        </EntityDetailsFrame>
    }
}
