//! # TinyClean
//!
//! A small macOS cleanup assistant.
//!
//! TinyClean looks through well-known cache and log folders, top-level
//! applications, and your project directories, then prints a categorized
//! report of what could be removed:
//!
//! - **Caches**: `~/Library/Caches`, logs, Application Support, Xcode DerivedData, Trash
//! - **Apps**: `.app` bundles in `/Applications`
//! - **Projects**: folders under your project roots, git repos flagged separately
//!
//! Nothing is ever deleted. Staleness checks are not implemented yet; see
//! [`scanner::staleness`] for where they plug in.

pub mod cli;
pub mod common;
pub mod scanner;
