mod view;

pub use view::ContactDetails;
