use crate::cli::Cli;
use crate::error::ConfigError;
use crate::filters::PathFilter;
use crate::models::{Config, KeywordSet};
use std::path::{Path, PathBuf};

/// Build the run configuration from parsed flags
///
/// Every pattern and keyword is compiled here, so a bad flag fails before
/// any file is listed. `self_name` is the file name excluded from every run.
pub fn build_config(cli: &Cli, root: PathBuf, self_name: &str) -> Result<Config, ConfigError> {
    let keywords = if cli.keywords.is_empty() {
        KeywordSet::default()
    } else {
        KeywordSet::new(cli.keywords.iter().cloned())?
    };

    let filter = PathFilter::new(self_name, &cli.includes, &cli.excludes)?;

    Ok(Config {
        root,
        search_mode: cli.mode,
        format: cli.format,
        keywords,
        filter,
    })
}

/// File name the program was invoked as, falling back to the package name
pub fn invoked_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
