pub mod details_frame;
pub mod view_model;

pub use details_frame::{DetailsFrame, EntityDetailsFrame};
pub use view_model::DetailsViewModel;
