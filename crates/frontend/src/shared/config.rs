//! Application settings fixed at compile time.
//!
//! Runtime overrides are limited to the API base URL (see [`super::api_utils`]).

/// Port of the REST backend on the same host as the frontend
pub const API_PORT: u16 = 3000;

/// Path prefix of every REST endpoint
pub const API_PREFIX: &str = "/api";

/// `localStorage` key that replaces the derived API base URL when set
pub const API_BASE_OVERRIDE_KEY: &str = "api_base_override";

pub const DEFAULT_PAGE_SIZE: u32 = contracts::domain::common::list::DEFAULT_PAGE_SIZE;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Errors stay a little longer so they can be read
pub const TOAST_ERROR_DURATION_MS: u32 = 7_000;

/// Toasts beyond this count push the oldest out
pub const TOAST_MAX_VISIBLE: usize = 5;

/// Delay between the last keystroke and the search request
pub const SEARCH_DEBOUNCE_MS: u32 = 350;

/// Page size used to fill reference pickers (company, link type, ...)
pub const PICKER_PAGE_SIZE: u32 = 100;

pub const APP_TITLE: &str = "Backoffice Telecom";
