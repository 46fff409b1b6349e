mod view;

pub use view::OtherServiceDetails;
