//! Labelled form inputs with inline error messages.
//!
//! Labels and the required marker come from the form's validation schema
//! through [`FormContext`]; `label` overrides them for fields without rules.

use contracts::domain::common::RecordId;
use leptos::prelude::*;

use super::binding::{FlagBinding, FormContext, IdBinding, TextBinding};

fn resolve_label(ctx: &FormContext, field: &'static str, label: Option<&'static str>) -> &'static str {
    match label {
        Some(label) => label,
        None => ctx.label(field),
    }
}

#[component]
fn FieldShell(
    ctx: FormContext,
    field: &'static str,
    label: &'static str,
    children: Children,
) -> impl IntoView {
    let error = ctx.error(field);
    let required = ctx.is_required(field);

    view! {
        <div class="form-group" class:form-group--invalid=move || error.with(|e| e.is_some())>
            <label for=field>
                {label}
                {required.then(|| view! { <span class="form-group__required">" *"</span> })}
            </label>
            {children()}
            {move || error.get().map(|message| view! {
                <div class="form-group__error">{message}</div>
            })}
        </div>
    }
}

#[component]
pub fn TextField(
    ctx: FormContext,
    field: &'static str,
    binding: TextBinding,
    #[prop(optional)] label: Option<&'static str>,
    /// `text`, `email`, `tel`, `password`, `number`, `date`
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let label = resolve_label(&ctx, field, label);
    let input_type = input_type.unwrap_or("text");

    view! {
        <FieldShell ctx=ctx field=field label=label>
            <input
                id=field
                type=input_type
                placeholder=placeholder
                prop:value=binding.value
                prop:disabled=move || ctx.disabled.get()
                on:input=move |ev| {
                    binding.on_input.run(event_target_value(&ev));
                    ctx.revalidate_if_invalid(field);
                }
                on:blur=move |_| ctx.validate(field)
            />
        </FieldShell>
    }
}

#[component]
pub fn TextAreaField(
    ctx: FormContext,
    field: &'static str,
    binding: TextBinding,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    let label = resolve_label(&ctx, field, label);

    view! {
        <FieldShell ctx=ctx field=field label=label>
            <textarea
                id=field
                rows=rows
                prop:value=binding.value
                prop:disabled=move || ctx.disabled.get()
                on:input=move |ev| {
                    binding.on_input.run(event_target_value(&ev));
                    ctx.revalidate_if_invalid(field);
                }
                on:blur=move |_| ctx.validate(field)
            ></textarea>
        </FieldShell>
    }
}

/// Closed list of choices bound to a wire code
#[component]
pub fn SelectField(
    ctx: FormContext,
    field: &'static str,
    binding: TextBinding,
    /// `(code, label)` pairs
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let label = resolve_label(&ctx, field, label);

    view! {
        <FieldShell ctx=ctx field=field label=label>
            <select
                id=field
                prop:value=binding.value
                prop:disabled=move || ctx.disabled.get()
                on:change=move |ev| {
                    binding.on_input.run(event_target_value(&ev));
                    ctx.validate(field);
                }
            >
                {options
                    .into_iter()
                    .map(|(code, text)| view! {
                        <option value=code selected=move || binding.value.get() == code>{text}</option>
                    })
                    .collect_view()}
            </select>
        </FieldShell>
    }
}

/// Picker over records of another entity
#[component]
pub fn ReferenceField(
    ctx: FormContext,
    field: &'static str,
    binding: IdBinding,
    #[prop(into)] options: Signal<Vec<(RecordId, String)>>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let label = resolve_label(&ctx, field, label);
    let current = move || binding.value.get().map(|id| id.to_string()).unwrap_or_default();

    view! {
        <FieldShell ctx=ctx field=field label=label>
            <select
                id=field
                prop:value=current
                prop:disabled=move || ctx.disabled.get()
                on:change=move |ev| {
                    binding.on_change.run(event_target_value(&ev).parse::<RecordId>().ok());
                    ctx.validate(field);
                }
            >
                <option value="">"Seleccione..."</option>
                {move || {
                    let selected = binding.value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(id, name)| view! {
                            <option value=id.to_string() selected=selected == Some(id)>{name}</option>
                        })
                        .collect_view()
                }}
            </select>
        </FieldShell>
    }
}

#[component]
pub fn CheckboxField(
    ctx: FormContext,
    field: &'static str,
    binding: FlagBinding,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let label = resolve_label(&ctx, field, label);

    view! {
        <div class="form-group form-group--checkbox">
            <label>
                <input
                    type="checkbox"
                    prop:checked=binding.checked
                    prop:disabled=move || ctx.disabled.get()
                    on:change=move |ev| binding.on_change.run(event_target_checked(&ev))
                />
                " "
                {label}
            </label>
        </div>
    }
}
