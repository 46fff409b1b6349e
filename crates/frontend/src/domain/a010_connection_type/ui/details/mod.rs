mod view;

pub use view::ConnectionTypeDetails;
