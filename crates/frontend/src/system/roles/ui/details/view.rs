use contracts::domain::common::RecordId;
use contracts::system::roles::{Role, PERMISSIONS};
use leptos::prelude::*;

use crate::shared::details::{DetailsViewModel, EntityDetailsFrame};
use crate::shared::form::{bind_text, TextAreaField, TextField};

#[component]
pub fn RoleDetails(id: Option<RecordId>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Role>::new(id);
    let ctx = vm.ctx();
    let form = vm.form;

    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let permissions_error = ctx.error("permissions");
    let busy = vm.busy();

    let permission_rows = PERMISSIONS
        .iter()
        .map(|&(code, label)| {
            let checked = move || form.with(|f| f.permissions.iter().any(|p| p == code));
            view! {
                <label class="permission-list__item">
                    <input
                        type="checkbox"
                        prop:checked=checked
                        disabled=move || busy.get()
                        on:change=move |_| {
                            form.update(|f| f.toggle_permission(code));
                            ctx.revalidate_if_invalid("permissions");
                        }
                    />
                    <span>{label}</span>
                    <code class="permission-list__code">{code}</code>
                </label>
            }
        })
        .collect_view();

    view! {
        <EntityDetailsFrame vm=vm on_close=on_close audit=|r: &Role| &r.audit>
            <TextField ctx=ctx field="name" binding=name />
            <TextAreaField ctx=ctx field="description" binding=description rows=2 />
            <fieldset class="details-form__section">
                <legend>"Permisos"</legend>
                <div class="permission-list">{permission_rows}</div>
                {move || permissions_error.get().map(|message| view! {
                    <div class="form-group__error">{message}</div>
                })}
            </fieldset>
        </EntityDetailsFrame>
    }
}
