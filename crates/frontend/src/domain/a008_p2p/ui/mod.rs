pub mod details;
pub mod list;

pub use details::P2pDetails;
pub use list::P2pList;
