pub mod auth;
pub mod ftp;
pub mod roles;
pub mod users;
