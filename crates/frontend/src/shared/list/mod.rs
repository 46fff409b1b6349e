pub mod column;
pub mod controller;
pub mod entity_list_page;
pub mod filters;

pub use column::{active_badge, or_dash, Column};
pub use controller::ListController;
pub use entity_list_page::EntityListPage;
pub use filters::{choice_options, id_options, ChoiceFilter, FlagFilter, ReferenceFilter};
