mod view;

pub use view::ContractorDetails;
