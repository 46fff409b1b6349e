pub mod details;
pub mod list;

pub use details::CompanyDetails;
pub use list::CompanyList;
