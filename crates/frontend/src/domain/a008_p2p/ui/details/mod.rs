mod view;

pub use view::P2pDetails;
