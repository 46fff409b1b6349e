pub mod actions;
pub mod controller;
pub mod navigation;

pub use actions::WizardActions;
pub use controller::{step_action, StepAction, WizardController};
pub use navigation::WizardNavigation;
