use contracts::domain::common::{AuditFields, Entity};
use leptos::prelude::*;
use thaw::*;

use super::view_model::DetailsViewModel;

use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

/// Header with save/close/delete, error banner, form body and audit block
#[component]
pub fn DetailsFrame(
    /// Detail tab key, used for the page id
    #[prop(into)]
    tab_key: String,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    /// New records have no delete button and no audit block
    is_new: bool,
    #[prop(into)] audit: Signal<Option<AuditFields>>,
    children: Children,
) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id(&tab_key, PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || title.get()}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_save.run(())
                        disabled=saving
                    >
                        {icon("save")}
                        {move || if saving.get() { " Guardando..." } else { " Guardar" }}
                    </Button>
                    {(!is_new).then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_delete.run(())
                            disabled=saving
                        >
                            {icon("delete")} " Eliminar"
                        </Button>
                    })}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        {icon("x")} " Cerrar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert")} " " {e}
                    </div>
                })}

                <div class="details-form">{children()}</div>

                {(!is_new).then(|| view! { <AuditBlock audit=audit /> })}
            </div>
        </PageFrame>
    }
}

/// [`DetailsFrame`] wired to a [`DetailsViewModel`]. Saving or deleting
/// closes the tab through `on_close`.
#[component]
pub fn EntityDetailsFrame<E: Entity>(
    vm: DetailsViewModel<E>,
    on_close: Callback<()>,
    audit: fn(&E) -> &AuditFields,
    children: Children,
) -> impl IntoView {
    view! {
        <DetailsFrame
            tab_key=E::detail_tab_key(vm.id)
            title=vm.title()
            saving=vm.busy()
            error=vm.error
            on_save=Callback::new(move |_| vm.save(Callback::new(move |_| on_close.run(()))))
            on_cancel=on_close
            on_delete=Callback::new(move |_| vm.delete(on_close))
            is_new=vm.is_new()
            audit=vm.audit(audit)
        >
            {children()}
        </DetailsFrame>
    }
}

fn audit_value(date: &Option<String>, uid: Option<i64>) -> String {
    let date = date.as_deref().map(format_datetime).unwrap_or_else(|| "—".to_string());
    match uid {
        Some(uid) => format!("{} (usuario #{})", date, uid),
        None => date,
    }
}

#[component]
fn AuditBlock(audit: Signal<Option<AuditFields>>) -> impl IntoView {
    view! {
        {move || audit.get().map(|a| view! {
            <div class="details-audit">
                <div class="details-audit__row">
                    <span class="details-audit__label">"Creado"</span>
                    <span>{audit_value(&a.create_date, a.create_uid)}</span>
                </div>
                {a.was_modified().then(|| view! {
                    <div class="details-audit__row">
                        <span class="details-audit__label">"Modificado"</span>
                        <span>{audit_value(&a.write_date, a.write_uid)}</span>
                    </div>
                })}
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_value() {
        assert_eq!(audit_value(&None, None), "—");
        assert_eq!(
            audit_value(&Some("2024-03-05T10:20:00Z".into()), Some(7)),
            "05/03/2024 10:20 (usuario #7)"
        );
    }
}
