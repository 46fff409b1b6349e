pub mod browser;
pub mod details;
pub mod list;

pub use browser::{FtpBrowserPage, FTP_BROWSER_TAB};
pub use details::FtpConfigDetails;
pub use list::FtpConfigList;
