mod view;

pub use view::LinkDetails;
