pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod details;
pub mod dialog;
pub mod entity_client;
pub mod export;
pub mod form;
pub mod http;
pub mod icons;
pub mod list;
pub mod page_frame;
pub mod page_standard;
pub mod state;
pub mod toast;
pub mod wizard;
