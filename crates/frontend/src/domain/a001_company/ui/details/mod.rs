mod view;

pub use view::CompanyDetails;
