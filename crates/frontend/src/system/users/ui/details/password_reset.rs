use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::toast::use_toast;
use crate::system::users::api;

/// Sets a new password for an existing user
#[component]
pub fn PasswordReset(user_id: RecordId) -> impl IntoView {
    let toast = use_toast();
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let submit = move |_| {
        if sending.get_untracked() {
            return;
        }
        let value = password.get_untracked();
        if let Err(message) = api::check_new_password(&value) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        sending.set(true);
        spawn_local(async move {
            match api::reset_password(user_id, value).await {
                Ok(()) => {
                    password.set(String::new());
                    toast.success("Contraseña actualizada");
                }
                Err(e) => toast.error(format!("No se pudo cambiar la contraseña: {}", e)),
            }
            sending.set(false);
        });
    };

    view! {
        <fieldset class="details-form__section">
            <legend>"Restablecer contraseña"</legend>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div class="form-group" class:form-group--invalid=move || error.with(|e| e.is_some())>
                    <label for="new_password">"Nueva contraseña"</label>
                    <input
                        id="new_password"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|message| view! {
                        <div class="form-group__error">{message}</div>
                    })}
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=submit
                    disabled=Signal::derive(move || sending.get())
                >
                    {move || if sending.get() { "Guardando..." } else { "Cambiar" }}
                </Button>
            </Flex>
        </fieldset>
    }
}
