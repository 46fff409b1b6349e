mod review;
mod view;

pub use view::ViabilityWizardPage;
