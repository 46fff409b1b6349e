pub mod auth;
pub mod ftp;
pub mod pages;
pub mod roles;
pub mod users;
