//! Page category constants.
//!
//! Every page rendered inside a tab carries an HTML `id` of the form
//! `{tab_key}--{category}` and a `data-page-category` attribute, so a page
//! found in the browser inspector maps straight back to its module.

/// Table of records with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Multi-step use case (wizard)
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Read-side register with workflow actions (billing)
pub const PAGE_CAT_REGISTER: &str = "register";

/// Administration page (users, roles, FTP)
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_USECASE,
    PAGE_CAT_REGISTER,
    PAGE_CAT_SYSTEM,
];

/// Page id for a tab key and category
pub fn page_id(tab_key: &str, category: &str) -> String {
    format!("{}--{}", tab_key, category)
}

/// Whether `id` follows `{tab_key}--{category}` with a known category
pub fn is_valid_page_id(id: &str) -> bool {
    match id.rsplit_once("--") {
        Some((key, category)) => !key.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_round_trip() {
        let id = page_id("a005_link", PAGE_CAT_LIST);
        assert_eq!(id, "a005_link--list");
        assert!(is_valid_page_id(&id));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("a005_link"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a005_link--dashboard"));
    }
}
