mod password_reset;
mod view;

pub use view::UserDetails;
