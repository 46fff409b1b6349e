pub mod fields;
mod view;

pub use view::ViabilityDetails;
