use std::collections::BTreeMap;

use contracts::domain::common::{AuditFields, Entity, RecordId};
use contracts::shared::validation::{FormErrors, FormSchema};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::dialog::confirm;
use crate::shared::entity_client::{use_entity_api, EntityClient};
use crate::shared::form::FormContext;
use crate::shared::toast::{use_toast, ToastService};

/// Field errors sent back by the backend as `HTTP 422: {"field": "message"}`
pub fn server_validation_errors(message: &str) -> Option<FormErrors> {
    let body = message.strip_prefix("HTTP 422: ")?;
    let map: BTreeMap<String, String> = serde_json::from_str(body).ok()?;
    (!map.is_empty()).then(|| FormErrors::from_map(map))
}

/// Details panel state of one record of `E` (or of a new one).
///
/// Loads the record, owns the edit form and its errors, and runs the
/// create/update/delete commands through the entity client.
pub struct DetailsViewModel<E: Entity> {
    pub id: Option<RecordId>,
    pub record: RwSignal<Option<E>>,
    pub form: RwSignal<E::FormData>,
    pub errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    api: EntityClient<E>,
    toast: ToastService,
}

impl<E: Entity> Clone for DetailsViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for DetailsViewModel<E> {}

impl<E: Entity> DetailsViewModel<E> {
    pub fn new(id: Option<RecordId>) -> Self {
        Self::with_form(id, E::FormData::default())
    }

    /// Start a new record from prefilled values
    pub fn with_form(id: Option<RecordId>, initial: E::FormData) -> Self {
        let vm = Self {
            id,
            record: RwSignal::new(None),
            form: RwSignal::new(initial),
            errors: RwSignal::new(FormErrors::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            api: use_entity_api::<E>(),
            toast: use_toast(),
        };
        if let Some(id) = id {
            vm.load(id);
        }
        vm
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn load(&self, id: RecordId) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match vm.api.get_by_id(id).await {
                Ok(Some(record)) => {
                    vm.form.set(record.to_form());
                    vm.record.set(Some(record));
                    vm.error.set(None);
                }
                Ok(None) => vm.error.set(Some(format!(
                    "{} #{} no existe o fue eliminado",
                    E::element_name(),
                    id
                ))),
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    /// Inputs are read-only while loading or saving
    pub fn busy(&self) -> Signal<bool> {
        let (loading, saving) = (self.loading, self.saving);
        Signal::derive(move || loading.get() || saving.get())
    }

    pub fn ctx(&self) -> FormContext {
        FormContext::new(self.form, self.errors, self.busy())
    }

    pub fn title(&self) -> Signal<String> {
        let record = self.record;
        let is_new = self.is_new();
        Signal::derive(move || {
            if is_new {
                format!("Nuevo: {}", E::element_name())
            } else {
                record.with(|r| match r {
                    Some(r) => format!("{}: {}", E::element_name(), r.display_name()),
                    None => E::element_name().to_string(),
                })
            }
        })
    }

    pub fn audit(&self, get: fn(&E) -> &AuditFields) -> Signal<Option<AuditFields>> {
        let record = self.record;
        Signal::derive(move || record.with(|r| r.as_ref().map(|r| get(r).clone())))
    }

    /// Validate, then create or update. Invalid forms are never submitted.
    pub fn save(&self, on_saved: Callback<E>) {
        if self.saving.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if let Err(errors) = form.validate() {
            self.toast.error(format!("Revise el formulario: {}", errors.summary()));
            self.errors.set(errors);
            return;
        }
        self.errors.set(FormErrors::default());

        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            let result = match vm.id {
                Some(id) => vm.api.update(id, &form).await,
                None => vm.api.create(&form).await,
            };
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    vm.toast.success(format!(
                        "{} \"{}\" guardado",
                        E::element_name(),
                        saved.display_name()
                    ));
                    on_saved.run(saved);
                }
                Err(e) => {
                    if let Some(errors) = server_validation_errors(&e) {
                        vm.toast.error(format!("El servidor rechazó los datos: {}", errors.summary()));
                        vm.errors.set(errors);
                    } else {
                        vm.toast.error(format!("No se pudo guardar: {}", e));
                    }
                }
            }
        });
    }

    pub fn delete(&self, on_deleted: Callback<()>) {
        let Some(id) = self.id else { return };
        if self.saving.get_untracked() {
            return;
        }
        let name = self
            .record
            .with_untracked(|r| r.as_ref().map(|r| r.display_name()))
            .unwrap_or_else(|| format!("#{}", id));
        if !confirm(&format!("¿Eliminar {} \"{}\"?", E::element_name(), name)) {
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            let result = vm.api.delete(id).await;
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    vm.toast.success(format!("{} \"{}\" eliminado", E::element_name(), name));
                    on_deleted.run(());
                }
                Err(e) => vm.toast.error(format!("No se pudo eliminar: {}", e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_validation_errors() {
        let errors =
            server_validation_errors(r#"HTTP 422: {"vat": "CIF duplicado", "name": "Ya existe"}"#)
                .unwrap();
        assert_eq!(errors.get("vat"), Some("CIF duplicado"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_server_validation_errors_ignores_other_failures() {
        assert!(server_validation_errors("HTTP 500: boom").is_none());
        assert!(server_validation_errors("HTTP 422: texto libre").is_none());
        assert!(server_validation_errors("HTTP 422: {}").is_none());
    }
}
