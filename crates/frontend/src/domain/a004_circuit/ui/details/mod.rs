mod view;

pub use view::CircuitDetails;
