use std::path::Path;

use super::staleness::{Staleness, StalenessEvaluator};
use super::targets::{Candidate, Category};

/// System-wide applications folder
pub const APPLICATIONS_DIR: &str = "/Applications";

const APP_SUFFIX: &str = ".app";

/// List top-level `.app` bundles in `dir`.
///
/// An unreadable or missing directory yields no candidates.
pub fn scan_apps(dir: &Path, inactive_days: u32, evaluator: &dyn StalenessEvaluator) -> Vec<Candidate> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "cannot read applications folder");
            return Vec::new();
        }
    };

    let mut apps = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir || !entry.file_name().to_string_lossy().ends_with(APP_SUFFIX) {
            continue;
        }

        let path = entry.path();
        let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
        let reason = match evaluator.evaluate(modified, inactive_days) {
            Staleness::Unknown => format!("placeholder: check if unused for {} days", inactive_days),
            Staleness::Stale => format!("not modified in over {} days", inactive_days),
            Staleness::Active => continue,
        };
        apps.push(Candidate::new(Category::App, path, reason));
    }

    apps.sort_by(|a, b| a.path.cmp(&b.path));
    apps
}
