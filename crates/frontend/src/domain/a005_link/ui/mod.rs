pub mod details;
pub mod list;

pub use details::LinkDetails;
pub use list::LinkList;
