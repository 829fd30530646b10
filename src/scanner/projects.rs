use std::collections::HashSet;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use super::staleness::{Staleness, StalenessEvaluator};
use super::targets::{Candidate, Category};

/// Version-control marker directory
pub const VCS_MARKER: &str = ".git";

/// Whether `path` holds a `.git` directory
pub fn is_git_repo(path: &Path) -> bool {
    path.join(VCS_MARKER).is_dir()
}

/// List the immediate subdirectories of every root as project candidates.
///
/// Git repositories and plain directories get different reasons since they
/// will need different checks. Missing or unreadable roots are skipped, as
/// are roots that resolve to one already scanned (`~/Projects` and
/// `~/projects` on a case-insensitive volume).
pub fn scan_projects<P: AsRef<Path>>(
    roots: &[P],
    inactive_days: u32,
    evaluator: &dyn StalenessEvaluator,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut seen = HashSet::new();

    for root in roots {
        let root = root.as_ref();
        if !root.is_dir() {
            tracing::debug!(path = %root.display(), "project root not present, skipping");
            continue;
        }
        if let Ok(meta) = std::fs::metadata(root) {
            if !seen.insert((meta.dev(), meta.ino())) {
                tracing::debug!(path = %root.display(), "project root already scanned");
                continue;
            }
        }

        let entries = match std::fs::read_dir(root) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(path = %root.display(), error = %e, "cannot read project root");
                continue;
            }
        };

        let mut dirs: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .collect();
        dirs.sort_by_key(|e| e.file_name());

        for entry in dirs {
            let project = entry.path();
            let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
            let git = is_git_repo(&project);

            let reason = match (evaluator.evaluate(modified, inactive_days), git) {
                (Staleness::Active, _) => continue,
                (Staleness::Stale, _) => format!("not modified in over {} days", inactive_days),
                (Staleness::Unknown, true) => format!(
                    "placeholder: git repo; check clean + unused for {} days",
                    inactive_days
                ),
                (Staleness::Unknown, false) => format!(
                    "placeholder: non-git; check last modified > {} days",
                    inactive_days
                ),
            };
            candidates.push(Candidate::new(Category::Project, project, reason));
        }
    }

    candidates
}
