use crate::cli::FormatMode;
use crate::models::{KeywordSet, Match};
use anyhow::{Context, Result};
use regex::Regex;
use std::io::Write;

/// Prefix inserted ahead of the marker in warn mode
pub const WARNING_PREFIX: &str = "warning: ";

/// Renders match lines for the selected format mode
#[derive(Debug, Clone)]
pub struct Formatter {
    mode: FormatMode,
    warn_pattern: Regex,
}

impl Formatter {
    pub fn new(mode: FormatMode, keywords: &KeywordSet) -> Result<Self> {
        // `<path>:<line>:` then an optional blank, then the marker
        let pattern = format!(r"^(?P<head>.*?:\d+:)\s?(?P<tail>{}.*)$", keywords.alternation());
        let warn_pattern = Regex::new(&pattern).context("Failed to compile warning pattern")?;

        Ok(Self { mode, warn_pattern })
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    /// Transform one `<path>:<line>:<fragment>` line
    ///
    /// Lines without a marker are returned unchanged.
    pub fn format_line(&self, line: &str) -> String {
        match self.mode {
            FormatMode::Raw => line.to_string(),
            FormatMode::Warn => self
                .warn_pattern
                .replace(line, format!("${{head}}{}${{tail}}", WARNING_PREFIX).as_str())
                .into_owned(),
        }
    }

    pub fn render(&self, m: &Match) -> String {
        match self.mode {
            FormatMode::Raw => m.to_string(),
            FormatMode::Warn => {
                format!("{}:{}:{}{}", m.path, m.line_number, WARNING_PREFIX, m.fragment)
            }
        }
    }
}

/// Write every match as one formatted line, returning how many were written
pub fn write_report<W: Write>(
    out: &mut W,
    matches: &[Match],
    formatter: &Formatter,
) -> Result<usize> {
    let mut written = 0;
    for m in matches {
        writeln!(out, "{}", formatter.render(m)).context("Failed to write report")?;
        written += 1;
    }
    out.flush().context("Failed to write report")?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> Match {
        Match {
            path: "a.txt".to_string(),
            line_number: 1,
            fragment: "TODO: fix this".to_string(),
        }
    }

    #[test]
    fn test_raw_is_pass_through() {
        let formatter = Formatter::new(FormatMode::Raw, &KeywordSet::default()).unwrap();
        assert_eq!(formatter.render(&sample_match()), "a.txt:1:TODO: fix this");
        assert_eq!(formatter.format_line("anything at all"), "anything at all");
    }

    #[test]
    fn test_warn_inserts_prefix() {
        let formatter = Formatter::new(FormatMode::Warn, &KeywordSet::default()).unwrap();
        assert_eq!(formatter.render(&sample_match()), "a.txt:1:warning: TODO: fix this");
        assert_eq!(
            formatter.format_line("src/x.c:12:FIXME: leak"),
            "src/x.c:12:warning: FIXME: leak"
        );
    }

    #[test]
    fn test_warn_render_ignores_colons_in_path() {
        let formatter = Formatter::new(FormatMode::Warn, &KeywordSet::default()).unwrap();
        let m = Match {
            path: "log:7:TODO:a.txt".to_string(),
            line_number: 1,
            fragment: "FIXME: real".to_string(),
        };
        assert_eq!(formatter.render(&m), "log:7:TODO:a.txt:1:warning: FIXME: real");
    }

    #[test]
    fn test_warn_drops_single_blank_before_marker() {
        let formatter = Formatter::new(FormatMode::Warn, &KeywordSet::default()).unwrap();
        assert_eq!(
            formatter.format_line("a.txt:3: TODO: spaced"),
            "a.txt:3:warning: TODO: spaced"
        );
    }

    #[test]
    fn test_warn_leaves_unmatched_lines_alone() {
        let formatter = Formatter::new(FormatMode::Warn, &KeywordSet::default()).unwrap();
        assert_eq!(formatter.format_line("a.txt:3:no marker"), "a.txt:3:no marker");
        assert_eq!(formatter.format_line("TODO: no prefix"), "TODO: no prefix");
    }

    #[test]
    fn test_warn_uses_custom_keywords() {
        let keywords = KeywordSet::new(["HACK:"]).unwrap();
        let formatter = Formatter::new(FormatMode::Warn, &keywords).unwrap();
        assert_eq!(formatter.format_line("a.rs:9:HACK: gross"), "a.rs:9:warning: HACK: gross");
        assert_eq!(formatter.format_line("a.rs:9:TODO: other"), "a.rs:9:TODO: other");
    }

    #[test]
    fn test_write_report_counts_lines() {
        let formatter = Formatter::new(FormatMode::Raw, &KeywordSet::default()).unwrap();
        let mut out = Vec::new();

        let written =
            write_report(&mut out, &[sample_match(), sample_match()], &formatter).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.txt:1:TODO: fix this\na.txt:1:TODO: fix this\n"
        );

        let mut empty = Vec::new();
        assert_eq!(write_report(&mut empty, &[], &formatter).unwrap(), 0);
        assert!(empty.is_empty());
    }
}
