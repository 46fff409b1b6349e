mod view;

pub use view::LinkTypeDetails;
