//! Remote directory navigation for the FTP file manager.
//!
//! Transfers are done by the backend; this module only tracks where the user
//! is and how they got there. Paths are absolute, `/`-separated and
//! normalised (no empty, `.` or `..` segments, no trailing slash except root).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::RecordId;

/// One entry of a remote directory listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtpEntry {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub modified: Option<String>,
}

/// Response of `GET /api/ftp/{config}/files?path=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FtpListing {
    pub path: String,
    pub entries: Vec<FtpEntry>,
}

impl FtpListing {
    /// Directories first, then files, each group by name
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(compare_entries);
        self
    }
}

fn compare_entries(a: &FtpEntry, b: &FtpEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Outcome of upload / delete calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FtpActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

pub const ROOT: &str = "/";

/// Normalise any user- or server-supplied path into an absolute one.
/// `..` above the root stays at the root.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

pub fn join_path(dir: &str, name: &str) -> String {
    normalize_path(&format!("{}/{}", dir, name))
}

/// A listing requested for `(config, path)` may only be shown while the
/// browser is still on that server and directory; late responses are dropped.
pub fn is_listing_current(
    requested_config: RecordId,
    requested_path: &str,
    current_config: Option<RecordId>,
    current_dir: &str,
) -> bool {
    current_config == Some(requested_config)
        && normalize_path(requested_path) == normalize_path(current_dir)
}

/// Parent directory, `None` at the root
pub fn parent_path(path: &str) -> Option<String> {
    let path = normalize_path(path);
    if path == ROOT {
        return None;
    }
    let cut = path.rfind('/').unwrap_or(0);
    Some(normalize_path(&path[..cut]))
}

/// Human-readable size for the listing table
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// A breadcrumb of the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpBrowser {
    current_dir: String,
    history: Vec<String>,
}

impl Default for FtpBrowser {
    fn default() -> Self {
        Self::new(ROOT)
    }
}

impl FtpBrowser {
    pub fn new(start: &str) -> Self {
        Self {
            current_dir: normalize_path(start),
            history: Vec::new(),
        }
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.current_dir == ROOT
    }

    /// Enter a child directory of the current one
    pub fn open_dir(&mut self, name: &str) {
        let target = join_path(&self.current_dir, name);
        self.move_to(target);
    }

    /// Jump to an absolute path (breadcrumb click, typed path)
    pub fn navigate_to(&mut self, path: &str) {
        self.move_to(normalize_path(path));
    }

    fn move_to(&mut self, target: String) {
        if target == self.current_dir {
            return;
        }
        let previous = std::mem::replace(&mut self.current_dir, target);
        self.history.push(previous);
    }

    /// Return to the previously visited directory. Returns false when there
    /// is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current_dir = previous;
                true
            }
            None => false,
        }
    }

    /// Go to the parent directory; recorded in the history like any move
    pub fn up(&mut self) -> bool {
        match parent_path(&self.current_dir) {
            Some(parent) => {
                self.move_to(parent);
                true
            }
            None => false,
        }
    }

    /// Path of a file in the current directory
    pub fn file_path(&self, name: &str) -> String {
        join_path(&self.current_dir, name)
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            label: "Inicio".to_string(),
            path: ROOT.to_string(),
        }];
        let mut path = String::new();
        for segment in self.current_dir.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            path.push_str(segment);
            crumbs.push(Breadcrumb {
                label: segment.to_string(),
                path: path.clone(),
            });
        }
        crumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("planos//2024/./"), "/planos/2024");
        assert_eq!(normalize_path("/a/b/../c"), "/a/c");
        assert_eq!(normalize_path("/../../x"), "/x");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("/"), None);
        assert_eq!(parent_path("/planos").as_deref(), Some("/"));
        assert_eq!(parent_path("/planos/2024/").as_deref(), Some("/planos"));
    }

    #[test]
    fn test_navigation_history() {
        let mut browser = FtpBrowser::default();
        assert!(!browser.back());
        assert!(!browser.up());

        browser.open_dir("planos");
        browser.open_dir("2024");
        assert_eq!(browser.current_dir(), "/planos/2024");

        browser.up();
        assert_eq!(browser.current_dir(), "/planos");

        browser.navigate_to("/actas/");
        assert_eq!(browser.current_dir(), "/actas");

        assert!(browser.back());
        assert_eq!(browser.current_dir(), "/planos");
        assert!(browser.back());
        assert_eq!(browser.current_dir(), "/planos/2024");
        assert!(browser.back());
        assert!(browser.back());
        assert!(browser.is_root());
        assert!(!browser.can_go_back());
    }

    #[test]
    fn test_navigate_to_same_dir_keeps_history() {
        let mut browser = FtpBrowser::new("/planos");
        browser.navigate_to("/planos/");
        assert!(!browser.can_go_back());
    }

    #[test]
    fn test_breadcrumbs() {
        let browser = FtpBrowser::new("/planos/2024/zona norte");
        let crumbs = browser.breadcrumbs();
        let paths: Vec<_> = crumbs.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/", "/planos", "/planos/2024", "/planos/2024/zona norte"]
        );
        assert_eq!(crumbs[0].label, "Inicio");
        assert_eq!(crumbs[3].label, "zona norte");
        assert_eq!(browser.file_path("plano.pdf"), "/planos/2024/zona norte/plano.pdf");
    }

    #[test]
    fn test_sorted_listing_and_sizes() {
        let entry = |name: &str, is_dir: bool| FtpEntry {
            name: name.into(),
            size: 0,
            is_dir,
            modified: None,
        };
        let listing = FtpListing {
            path: "/".into(),
            entries: vec![entry("b.txt", false), entry("zona", true), entry("A.txt", false)],
        }
        .sorted();
        let names: Vec<_> = listing.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zona", "A.txt", "b.txt"]);

        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_late_listing_of_previous_dir_is_dropped() {
        let mut browser = FtpBrowser::new("/");
        browser.open_dir("a");
        let first = browser.current_dir().to_string();
        browser.open_dir("b");

        assert!(!is_listing_current(1, &first, Some(1), browser.current_dir()));
        assert!(is_listing_current(1, "/a/b/", Some(1), browser.current_dir()));
    }

    #[test]
    fn test_listing_of_previous_server_is_dropped() {
        assert!(!is_listing_current(1, "/", Some(2), "/"));
        assert!(!is_listing_current(1, "/", None, "/"));
        assert!(is_listing_current(2, "/", Some(2), "/"));
    }
}
