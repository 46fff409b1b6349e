use contracts::domain::common::RecordId;
use contracts::system::roles::Role;
use contracts::system::users::User;
use leptos::prelude::*;

use super::password_reset::PasswordReset;
use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{
    bind_flag, bind_ref, bind_text, use_reference_options, CheckboxField, ReferenceField, TextField,
};

#[component]
pub fn UserDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<User>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;
    let roles = use_reference_options::<Role>();

    let login = bind_text(form, |f| f.login.clone(), |f, v| f.login = v);
    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let email = bind_text(form, |f| f.email.clone(), |f, v| f.email = v);
    let password = bind_text(form, |f| f.password.clone(), |f, v| f.password = v);
    let role_id = bind_ref(form, |f| f.role_id, |f, v| f.role_id = v);
    let active = bind_flag(form, |f| f.active, |f, v| f.active = v);

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|u: &User| &u.audit>
            <div class="details-form__grid">
                <TextField ctx=ctx field="login" binding=login />
                <TextField ctx=ctx field="name" binding=name />
                <TextField ctx=ctx field="email" binding=email input_type="email" />
                <ReferenceField ctx=ctx field="role_id" binding=role_id options=roles label="Rol" />
                {vm.is_new().then(|| view! {
                    <TextField
                        ctx=ctx
                        field="password"
                        binding=password
                        input_type="password"
                        label="Contraseña"
                    />
                })}
            </div>
            <CheckboxField ctx=ctx field="active" binding=active label="Activo" />
        </EntityDetailsFrame>
        {vm.id.map(|user_id| view! { <PasswordReset user_id=user_id /> })}
    }
}
