use crate::domain::a007_viability::aggregate::ViabilityFormData;
use crate::shared::validation::{FormErrors, FormSchema};

/// One page of the wizard and the form fields it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStepDef {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [&'static str],
}

pub const VIABILITY_STEPS: [WizardStepDef; 4] = [
    WizardStepDef {
        title: "Cliente",
        description: "Empresa solicitante y persona de contacto",
        fields: &["company_id", "contact_id"],
    },
    WizardStepDef {
        title: "Ubicación",
        description: "Dirección del servicio y coordenadas",
        fields: &["address", "city", "latitude", "longitude"],
    },
    WizardStepDef {
        title: "Servicio",
        description: "Ancho de banda y tipo de conexión",
        fields: &[
            "requested_bandwidth_mbps",
            "connection_type_id",
            "link_type_id",
            "notes",
        ],
    },
    WizardStepDef {
        title: "Revisión",
        description: "Compruebe los datos antes de enviar",
        fields: &[],
    },
];

/// Validate the fields of one step. The review step (no fields of its own)
/// validates the whole form.
pub fn validate_step(form: &ViabilityFormData, step: usize) -> Result<(), FormErrors> {
    match VIABILITY_STEPS.get(step) {
        Some(def) if !def.fields.is_empty() => form.validate_fields(def.fields),
        _ => form.validate(),
    }
}

/// First step owning a field with an error, to jump back from the review
pub fn step_of_first_error(errors: &FormErrors) -> Option<usize> {
    let field = errors.fields().next()?;
    VIABILITY_STEPS
        .iter()
        .position(|def| def.fields.contains(&field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_belongs_to_a_step() {
        for rule in ViabilityFormData::rules() {
            assert!(
                VIABILITY_STEPS.iter().any(|s| s.fields.contains(&rule.name)),
                "{} has no step",
                rule.name
            );
        }
    }

    #[test]
    fn test_step_validation_is_scoped() {
        let mut form = ViabilityFormData {
            company_id: Some(3),
            ..Default::default()
        };
        assert!(validate_step(&form, 0).is_ok());
        let errors = validate_step(&form, 1).unwrap_err();
        assert!(errors.has("address"));
        assert!(!errors.has("requested_bandwidth_mbps"));

        form.address = "Avenida de la Estación 4".into();
        form.city = "Huesca".into();
        assert!(validate_step(&form, 1).is_ok());

        let errors = validate_step(&form, 3).unwrap_err();
        assert_eq!(step_of_first_error(&errors), Some(2));
    }
}
