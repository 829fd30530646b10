use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};

/// TinyClean: a small macOS cleanup assistant
#[derive(Parser, Debug)]
#[command(
    name = "tinyclean",
    version,
    about = "TinyClean - macOS cleanup assistant",
    long_about = "TinyClean looks through caches, logs, applications and project folders\n\
                   and reports what could be cleaned up. Nothing is ever deleted.",
    after_help = "EXAMPLES:\n  \
        tinyclean scan                              Scan everything with defaults\n  \
        tinyclean scan -dry-run -days=90            Go-style flags work too\n  \
        tinyclean scan --apps=false --caches=false  Only look at projects\n  \
        tinyclean scan --projects-path ~/src        Search a custom project root\n  \
        tinyclean -v scan                           Show every candidate"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs, untruncated report)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Read configuration from this file instead of ~/.tinyclean/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect caches, apps, and projects for cleanup candidates
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ScanArgs {
    /// Simulate cleanup actions without deleting anything
    #[arg(
        long,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Include unused app detection
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub apps: bool,

    /// Include inactive projects detection
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub projects: bool,

    /// Include system cache and logs cleanup
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub caches: bool,

    /// Consider items inactive after this many days [default: 30]
    #[arg(long, value_name = "N")]
    pub days: Option<u32>,

    /// Path to search for projects (repeatable)
    #[arg(long = "projects-path", value_name = "DIR", value_parser = parse_non_empty)]
    pub projects_path: Vec<String>,
}

fn parse_non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("empty path".to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Rewrite Go-style single-dash long flags (`-dry-run`, `-days=7`) into the
/// `--` form clap expects. Only names of known long options are touched and
/// nothing after a bare `--`.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let known = known_long_flags();
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && rest.len() > 1 => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if known.iter().any(|k| k == name) {
                        OsString::from(format!("-{}", s))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

fn known_long_flags() -> Vec<String> {
    let mut cmd = Cli::command();
    cmd.build();

    let mut names = vec!["help".to_string(), "version".to_string()];
    let mut collect = |c: &clap::Command| {
        names.extend(c.get_arguments().filter_map(|a| a.get_long()).map(str::to_string));
    };
    collect(&cmd);
    for sub in cmd.get_subcommands() {
        collect(sub);
    }
    names
}
