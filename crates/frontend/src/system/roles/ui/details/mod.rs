mod view;

pub use view::RoleDetails;
