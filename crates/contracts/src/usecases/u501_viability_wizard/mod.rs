pub mod steps;

pub use steps::{step_of_first_error, validate_step, WizardStepDef, VIABILITY_STEPS};

use crate::usecases::common::UseCaseMetadata;

pub struct ViabilityWizard;

impl UseCaseMetadata for ViabilityWizard {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "viability_wizard"
    }

    fn display_name() -> &'static str {
        "Nueva viabilidad"
    }

    fn description() -> &'static str {
        "Alta guiada de una solicitud de viabilidad: cliente, ubicación, servicio y revisión"
    }
}
