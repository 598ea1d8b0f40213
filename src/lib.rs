//! todocheck - keep TODO and FIXME markers out of a tree
//!
//! Lists candidate files (git working set or a plain directory walk), filters
//! them with include/exclude path regexes, scans each file for marker lines
//! and prints them as `path:line:marker...`. The exit status tells CI whether
//! markers were found.
//!
//! # Example
//!
//! ```rust,no_run
//! use todocheck::*;
//! use std::path::PathBuf;
//!
//! let config = models::Config {
//!     root: PathBuf::from("."),
//!     search_mode: cli::SearchMode::Default,
//!     format: cli::FormatMode::Warn,
//!     keywords: models::KeywordSet::default(),
//!     filter: filters::PathFilter::new("todocheck", &[], &[]).unwrap(),
//! };
//!
//! let verdict = check::run_check(&config, &mut std::io::stdout()).unwrap();
//! std::process::exit(verdict.code().into());
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod exit;
pub mod filters;
pub mod git;
pub mod models;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use error::{ConfigError, EnumerationError};
pub use exit::Verdict;
pub use models::{Config, KeywordSet, Match};
