use std::path::{Path, PathBuf};

use super::targets::{Candidate, Category};

/// Cache-like locations checked on every scan
pub const CACHE_TEMPLATES: &[&str] = &[
    "~/Library/Caches",
    "/Library/Caches",
    "~/Library/Logs",
    "~/Library/Application Support",
    "~/Library/Developer/Xcode/DerivedData",
    "~/.Trash",
];

pub const REASON_CACHE: &str = "cache/log cleanup";
pub const REASON_EMPTY: &str = "empty directory";

/// Expand a leading `~` against `home`. Without a home the template is
/// returned unchanged.
pub fn expand_template(template: &str, home: Option<&Path>) -> PathBuf {
    match (template.strip_prefix('~'), home) {
        (Some(rest), Some(home)) => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(template),
    }
}

/// List the immediate contents of every template that resolves to a
/// directory. Empty directories produce a single candidate for themselves.
pub fn scan_caches<S: AsRef<str>>(templates: &[S], home: Option<&Path>) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for template in templates {
        let dir = expand_template(template.as_ref(), home);
        if !dir.is_dir() {
            tracing::debug!(path = %dir.display(), "cache location not present, skipping");
            continue;
        }

        let entries = match std::fs::read_dir(&dir) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "cannot read cache location");
                continue;
            }
        };

        let mut children: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        children.sort();

        if children.is_empty() {
            candidates.push(Candidate::new(Category::Cache, dir, REASON_EMPTY));
            continue;
        }

        candidates.extend(
            children
                .into_iter()
                .map(|child| Candidate::new(Category::Cache, child, REASON_CACHE)),
        );
    }

    candidates
}
