use contracts::domain::common::RecordId;
use contracts::system::ftp::FtpConfig;
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{bind_flag, bind_number, bind_text, CheckboxField, TextField};

#[component]
pub fn FtpConfigDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<FtpConfig>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let host = bind_text(form, |f| f.host.clone(), |f, v| f.host = v);
    let port = bind_number(form, |f| f.port, |f, v| f.port = v);
    let username = bind_text(form, |f| f.username.clone(), |f, v| f.username = v);
    let password = bind_text(form, |f| f.password.clone(), |f, v| f.password = v);
    let root_path = bind_text(form, |f| f.root_path.clone(), |f, v| f.root_path = v);
    let passive_mode = bind_flag(form, |f| f.passive_mode, |f, v| f.passive_mode = v);
    let active = bind_flag(form, |f| f.active, |f, v| f.active = v);

    let password_hint = if vm.is_new() { "" } else { "Dejar en blanco para conservar la actual" };

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|c: &FtpConfig| &c.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="name" binding=name />
                <TextField ctx=ctx field="host" binding=host placeholder="ftp.example.net" />
                <TextField ctx=ctx field="port" binding=port input_type="number" />
                <TextField ctx=ctx field="username" binding=username />
                <TextField
                    ctx=ctx
                    field="password"
                    binding=password
                    input_type="password"
                    label="Contraseña"
                    placeholder=password_hint
                />
                <TextField ctx=ctx field="root_path" binding=root_path placeholder="/" />
            </div>
            <CheckboxField ctx=ctx field="passive_mode" binding=passive_mode label="Modo pasivo" />
            <CheckboxField ctx=ctx field="active" binding=active label="Activo" />
        </EntityDetailsFrame>
    }
}
