use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning command-line flags into a [`crate::models::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("keyword markers must not be empty")]
    EmptyKeyword,

    #[error("failed to compile keyword markers: {0}")]
    InvalidKeywords(#[source] regex::Error),
}

/// Errors raised while listing candidate files.
#[derive(Error, Debug)]
pub enum EnumerationError {
    #[error("not inside a git working tree: {}", .0.display())]
    NotAWorkTree(PathBuf),

    #[error("git repository at {} has no working directory", .0.display())]
    BareRepository(PathBuf),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
