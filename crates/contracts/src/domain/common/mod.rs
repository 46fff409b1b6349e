//! Common types and traits shared by every back-office entity

pub mod entity;
pub mod list;
pub mod record;
pub mod selection;

pub use entity::{parse_detail_tab_key, Entity, ListQuery};
pub use list::{DateRange, EntityStats, ListParams, Paginated};
pub use record::{default_true, non_blank, AuditFields, RecordId};
pub use selection::RowSelection;
