pub mod details;
pub mod list;

pub use details::OtherServiceDetails;
pub use list::OtherServiceList;
