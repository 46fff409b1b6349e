pub mod browser;
pub mod config;

pub use browser::{FtpActionResponse, FtpBrowser, FtpEntry, FtpListing};
pub use config::{FtpConfig, FtpConfigFormData};
