use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use colored::*;

use crate::common::format::format_timestamp;
use crate::common::options::ScanOptions;
use crate::scanner::targets::{Candidate, Category};

/// Print the scan report to stdout
pub fn print_report<Tz>(candidates: &[Candidate], opts: &ScanOptions, generated_at: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    print!("{}", render_report(candidates, opts, generated_at));
}

/// Render the scan report grouped by category.
///
/// Groups follow category rank, entries within a group are sorted by path,
/// and each group is cut to `display_limit` entries unless verbose.
pub fn render_report<Tz>(candidates: &[Candidate], opts: &ScanOptions, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut lines = Vec::new();

    let mode = if opts.dry_run { "dry-run" } else { "plan" };
    lines.push(format!("TinyClean {}", mode.to_uppercase()).bold().to_string());
    lines.push(format!("Generated: {}", format_timestamp(generated_at)));
    lines.push(format!(
        "Mode: dry-run={} | days={} | apps={} | projects={} | caches={} | verbose={}",
        opts.dry_run,
        opts.inactive_days,
        opts.include_apps,
        opts.include_projects,
        opts.include_caches,
        opts.verbose
    ));
    lines.push(String::new());

    if candidates.is_empty() {
        lines.push("No candidates found. (Current scanners still use placeholder logic.)".to_string());
        return finish(lines);
    }

    let limit = if opts.verbose || opts.display_limit == 0 {
        None
    } else {
        Some(opts.display_limit)
    };

    let grouped = group_by_category(candidates);
    let mut total = 0;

    for (category, group) in &grouped {
        total += group.len();
        lines.push(format!("{} ({})", category.label().bold(), group.len()));

        let shown = limit.map_or(group.len(), |l| l.min(group.len()));
        for item in &group[..shown] {
            lines.push(format!("  • {}", item.path.display()));
            if !item.reason.is_empty() {
                lines.push(format!("    - {}", item.reason.dimmed()));
            }
        }
        if group.len() > shown {
            lines.push(format!(
                "  … {} more (use --verbose to see all)",
                group.len() - shown
            ));
        }
        lines.push(String::new());
    }

    lines.push(format!("Total candidates: {}", total.to_string().bold()));
    if opts.dry_run {
        lines.push("Nothing was deleted because dry-run is enabled.".to_string());
    } else {
        lines.push("Nothing was deleted; deletion is not implemented yet.".to_string());
    }
    lines.push(
        "Current scanners are placeholders; refine logic before enabling deletion."
            .yellow()
            .to_string(),
    );

    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Bucket candidates by category (in report order), each bucket sorted by path
fn group_by_category(candidates: &[Candidate]) -> BTreeMap<&Category, Vec<&Candidate>> {
    let mut grouped: BTreeMap<&Category, Vec<&Candidate>> = BTreeMap::new();
    for item in candidates {
        grouped.entry(&item.category).or_default().push(item);
    }
    for group in grouped.values_mut() {
        group.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    }
    grouped
}
