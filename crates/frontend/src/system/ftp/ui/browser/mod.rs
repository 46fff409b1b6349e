mod page;

pub use page::{FtpBrowserPage, FTP_BROWSER_TAB};
