pub mod details;
pub mod list;

pub use details::ContractorDetails;
pub use list::ContractorList;
