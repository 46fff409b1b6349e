pub mod date_range_picker;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod table;

pub use date_range_picker::DateRangePicker;
pub use filter_panel::FilterPanel;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
