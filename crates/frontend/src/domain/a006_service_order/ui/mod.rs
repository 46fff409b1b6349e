pub mod details;
pub mod list;

pub use details::ServiceOrderDetails;
pub use list::ServiceOrderList;
