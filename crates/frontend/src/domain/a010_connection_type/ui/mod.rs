pub mod details;
pub mod list;

pub use details::ConnectionTypeDetails;
pub use list::ConnectionTypeList;
