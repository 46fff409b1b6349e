pub mod details;
pub mod list;

pub use details::ContactDetails;
pub use list::ContactList;
