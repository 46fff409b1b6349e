mod view;

pub use view::FtpConfigDetails;
