pub mod validation;
pub mod wizard;
