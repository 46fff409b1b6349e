pub mod details;
pub mod list;

pub use details::ViabilityDetails;
pub use list::ViabilityList;
