use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Pagination and free-text search sent as query parameters.
///
/// Pages are 1-based on the wire (`?search=...&page=1&pageSize=25`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub search: Option<String>,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListParams {
    pub fn with_search(search: &str) -> Self {
        let mut params = Self::default();
        params.set_search(search);
        params
    }

    /// Replace the search text; a new search always restarts at page 1
    pub fn set_search(&mut self, search: &str) {
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.page = 1;
    }

    /// Change the page size; the current page is reset
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

/// Paginated list response returned by every list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    /// Same wire name as the request's `pageSize`
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: u32,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<T> Paginated<T> {
    /// Number of pages; an empty result still has one (empty) page
    pub fn total_pages(&self) -> u32 {
        if self.total == 0 || self.page_size == 0 {
            return 1;
        }
        let size = u64::from(self.page_size);
        ((self.total + size - 1) / size) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Aggregate counters returned by `/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStats {
    pub total: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub inactive: u64,
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
}

/// Inclusive date range filter (`date_from` / `date_to` query parameters)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    /// A range whose bounds are reversed can never match anything
    pub fn is_valid(&self) -> bool {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_from.map_or(true, |from| date >= from)
            && self.date_to.map_or(true, |to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let mut page: Paginated<u8> = Paginated::default();
        assert_eq!(page.total_pages(), 1);

        page.total = 25;
        page.page_size = 25;
        assert_eq!(page.total_pages(), 1);

        page.total = 26;
        assert_eq!(page.total_pages(), 2);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_set_search_resets_page() {
        let mut params = ListParams::default();
        params.set_page(4);
        params.set_search("  fibra ");
        assert_eq!(params.search.as_deref(), Some("fibra"));
        assert_eq!(params.page, 1);

        params.set_search("   ");
        assert_eq!(params.search, None);
    }

    #[test]
    fn test_list_params_wire_names() {
        let params = ListParams::with_search("norte");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["pageSize"], 25);
        assert_eq!(json["search"], "norte");

        let json = serde_json::to_value(ListParams::default()).unwrap();
        assert!(json.get("search").is_none());
    }

    #[test]
    fn test_date_range() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let range = DateRange {
            date_from: Some(d("2024-01-01")),
            date_to: Some(d("2024-01-31")),
        };
        assert!(range.is_valid());
        assert!(range.contains(d("2024-01-31")));
        assert!(!range.contains(d("2024-02-01")));

        let reversed = DateRange {
            date_from: range.date_to,
            date_to: range.date_from,
        };
        assert!(!reversed.is_valid());
        assert!(DateRange::default().is_empty());
    }

    #[test]
    fn test_paginated_page_size_wire_name() {
        let camel: Paginated<u8> =
            serde_json::from_str(r#"{"items":[1,2],"total":2,"page":1,"pageSize":25}"#).unwrap();
        assert_eq!(camel.page_size, 25);

        let snake: Paginated<u8> =
            serde_json::from_str(r#"{"items":[],"total":0,"page":1,"page_size":50}"#).unwrap();
        assert_eq!(snake.page_size, 50);

        let json = serde_json::to_value(&camel).unwrap();
        assert_eq!(json["pageSize"], 25);
    }
}
