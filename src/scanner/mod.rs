pub mod apps;
pub mod cache;
pub mod projects;
pub mod staleness;
pub mod targets;

use crate::common::options::ScanOptions;
use staleness::{PlaceholderEvaluator, StalenessEvaluator};
use targets::Candidate;

/// Main scan orchestrator - runs every enabled scanner and concatenates
/// their results in cache, app, project order
pub fn run_scan(opts: &ScanOptions) -> Vec<Candidate> {
    run_scan_with(opts, &PlaceholderEvaluator)
}

/// Scan with a caller-supplied staleness evaluator
pub fn run_scan_with(opts: &ScanOptions, evaluator: &dyn StalenessEvaluator) -> Vec<Candidate> {
    let mut results = Vec::new();

    if opts.include_caches {
        let found = cache::scan_caches(&opts.cache_templates, opts.home.as_deref());
        tracing::debug!(count = found.len(), "cache scan finished");
        results.extend(found);
    }

    if opts.include_apps {
        let found = apps::scan_apps(&opts.applications_dir, opts.inactive_days, evaluator);
        tracing::debug!(count = found.len(), "app scan finished");
        results.extend(found);
    }

    if opts.include_projects {
        let found = projects::scan_projects(&opts.project_paths, opts.inactive_days, evaluator);
        tracing::debug!(count = found.len(), "project scan finished");
        results.extend(found);
    }

    results
}
