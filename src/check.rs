use crate::enumerator;
use crate::exit::{self, Verdict};
use crate::models::Config;
use crate::reporter::{self, Formatter};
use crate::scanner;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Run enumeration, filtering, scanning and formatting, writing matches to `out`
pub fn run_check<W: Write>(config: &Config, out: &mut W) -> Result<Verdict> {
    let formatter = Formatter::new(config.format, &config.keywords)?;

    let candidates = enumerator::enumerate(config.search_mode, &config.root)
        .context("Failed to list files")?;

    let paths = config.filter.apply(candidates);
    debug!(count = paths.len(), "files left after filtering");

    let matches = scanner::scan_paths(&config.root, &paths, &config.keywords);

    let written = reporter::write_report(out, &matches, &formatter)?;
    Ok(exit::decide(written > 0, formatter.mode()))
}
