pub mod details;
pub mod list;

pub use details::UserDetails;
pub use list::UserList;
