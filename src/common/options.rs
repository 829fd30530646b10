use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::scanner::apps::APPLICATIONS_DIR;
use crate::scanner::cache::CACHE_TEMPLATES;

/// Project roots searched when neither flags nor config name any
pub const DEFAULT_PROJECT_DIRS: &[&str] = &["Projects", "projects", "code"];

/// Everything one scan invocation needs, resolved before any scanner runs
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub dry_run: bool,
    pub verbose: bool,
    pub include_caches: bool,
    pub include_apps: bool,
    pub include_projects: bool,
    pub inactive_days: u32,
    pub project_paths: Vec<PathBuf>,
    pub cache_templates: Vec<String>,
    pub applications_dir: PathBuf,
    pub home: Option<PathBuf>,
    pub display_limit: usize,
}

impl ScanOptions {
    /// Options with every scanner enabled and built-in defaults
    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self {
            dry_run: false,
            verbose: false,
            include_caches: true,
            include_apps: true,
            include_projects: true,
            inactive_days: 30,
            project_paths: default_project_paths(home.as_deref()),
            cache_templates: CACHE_TEMPLATES.iter().map(|s| s.to_string()).collect(),
            applications_dir: PathBuf::from(APPLICATIONS_DIR),
            home,
            display_limit: 8,
        }
    }
}

/// `~/Projects`, `~/projects` and `~/code`, or nothing when home is unknown
pub fn default_project_paths(home: Option<&Path>) -> Vec<PathBuf> {
    match home {
        Some(home) => DEFAULT_PROJECT_DIRS.iter().map(|d| home.join(d)).collect(),
        None => Vec::new(),
    }
}

/// Trim, drop empties, and remove duplicates keeping first occurrence
pub fn dedupe_paths<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.to_string()))
        .map(str::to_string)
        .collect()
}
