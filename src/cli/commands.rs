use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use super::args::{normalize_flags, Cli, Commands, ScanArgs};
use super::output;
use crate::common::config::Config;
use crate::common::errors::CleanError;
use crate::common::logging;
use crate::common::options::{dedupe_paths, ScanOptions};
use crate::scanner::{self, cache::expand_template};

/// Entry point shared by the binary and the tests.
///
/// Help and version requests print and succeed. An unknown subcommand
/// prints usage and comes back as [`CleanError::UnknownCommand`].
pub fn execute<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::try_parse_from(normalize_flags(args)) {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Scan(ref args)) => cmd_scan(&cli, args),
        None => {
            print_usage();
            Ok(())
        }
    }
}

fn handle_parse_error(e: clap::Error) -> Result<()> {
    match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            e.print()?;
            Ok(())
        }
        ErrorKind::InvalidSubcommand => {
            print_usage();
            let name = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            Err(CleanError::UnknownCommand(name).into())
        }
        _ => Err(CleanError::InvalidArguments(e).into()),
    }
}

fn print_usage() {
    let mut cmd = Cli::command();
    if cmd.print_help().is_err() {
        tracing::warn!("failed to write usage text");
    }
    println!();
}

// ─── Scan ─────────────────────────────────────────────────────────────────────

fn cmd_scan(cli: &Cli, args: &ScanArgs) -> Result<()> {
    let home = dirs::home_dir();
    let config = Config::load(cli.config.as_deref(), home.as_deref())?;
    let opts = build_options(args, cli.verbose, &config, home);

    tracing::debug!(?opts, "resolved scan options");

    let results = scanner::run_scan(&opts);
    output::print_report(&results, &opts, &chrono::Local::now());

    Ok(())
}

/// Resolve flags, config and home into the options every scanner reads.
///
/// Flags win over config, config wins over built-in defaults.
pub fn build_options(args: &ScanArgs, verbose: bool, config: &Config, home: Option<PathBuf>) -> ScanOptions {
    let mut opts = ScanOptions::with_home(home);

    opts.dry_run = args.dry_run;
    opts.verbose = verbose;
    opts.include_caches = args.caches;
    opts.include_apps = args.apps;
    opts.include_projects = args.projects;
    opts.inactive_days = args.days.unwrap_or(config.stale_days);
    opts.display_limit = config.display_limit;

    opts.cache_templates
        .extend(dedupe_paths(&config.extra_cache_paths));

    // Explicit flags replace the defaults even when every value was blank.
    let from_flags = !args.projects_path.is_empty();
    let requested = if from_flags {
        dedupe_paths(&args.projects_path)
    } else {
        dedupe_paths(&config.project_paths)
    };
    if from_flags || !requested.is_empty() {
        opts.project_paths = requested
            .iter()
            .map(|p| expand_template(p, opts.home.as_deref()))
            .collect();
    }

    opts
}
