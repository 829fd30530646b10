use std::cmp::Ordering;
use std::path::PathBuf;

use crate::common::format::title_case;

// ─── Core types ───────────────────────────────────────────────────────────────

/// Coarse classification used to group candidates in the report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Cache, log, support and trash contents
    Cache,
    /// Top-level application bundles
    App,
    /// Project directories under the search roots
    Project,
    /// Anything else, keyed by its tag
    Other(String),
}

/// Display metadata for a built-in category
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub tag: &'static str,
    pub label: &'static str,
    pub rank: usize,
}

/// Built-in categories in report priority order
pub const CATEGORY_TABLE: &[CategoryInfo] = &[
    CategoryInfo {
        tag: "cache",
        label: "Caches / Logs / Support / Trash",
        rank: 0,
    },
    CategoryInfo {
        tag: "app",
        label: "Applications",
        rank: 1,
    },
    CategoryInfo {
        tag: "project",
        label: "Projects",
        rank: 2,
    },
];

impl Category {
    pub fn tag(&self) -> &str {
        match self {
            Category::Cache => "cache",
            Category::App => "app",
            Category::Project => "project",
            Category::Other(tag) => tag,
        }
    }

    fn info(&self) -> Option<&'static CategoryInfo> {
        match self {
            Category::Other(_) => None,
            builtin => CATEGORY_TABLE.iter().find(|info| info.tag == builtin.tag()),
        }
    }

    /// Human-readable section label
    pub fn label(&self) -> String {
        match self.info() {
            Some(info) => info.label.to_string(),
            None => title_case(self.tag()),
        }
    }

    /// Position in the report; other categories sort after all built-ins
    pub fn rank(&self) -> usize {
        self.info().map(|info| info.rank).unwrap_or(CATEGORY_TABLE.len())
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.tag().cmp(other.tag()))
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A filesystem path flagged as a possible cleanup target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub category: Category,
    pub path: PathBuf,
    pub reason: String,
}

impl Candidate {
    pub fn new(category: Category, path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            category,
            path: path.into(),
            reason: reason.into(),
        }
    }
}
