pub mod details;
pub mod list;

pub use details::LinkTypeDetails;
pub use list::LinkTypeList;
