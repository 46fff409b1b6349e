pub mod details;
pub mod list;

pub use details::CircuitDetails;
pub use list::CircuitList;
