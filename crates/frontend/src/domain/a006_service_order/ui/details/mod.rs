mod view;

pub use view::ServiceOrderDetails;
