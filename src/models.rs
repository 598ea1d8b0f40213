use crate::cli::{FormatMode, SearchMode};
use crate::error::ConfigError;
use crate::filters::PathFilter;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;

/// Markers searched for when none are given on the command line.
pub const DEFAULT_KEYWORDS: &[&str] = &["FIXME:", "TODO:"];

/// A single marker occurrence found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Path relative to the scanned root, `/`-separated, without a leading `./`
    pub path: String,

    /// Line number where the marker was found (1-indexed)
    pub line_number: usize,

    /// The line from the marker to the end of the line
    pub fragment: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line_number, self.fragment)
    }
}

/// Literal markers compiled into one alternation.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    pattern: Regex,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::EmptyKeyword);
        }

        let pattern = Regex::new(&alternation(&keywords)).map_err(ConfigError::InvalidKeywords)?;

        Ok(Self { keywords, pattern })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Regex source of the alternation, as a non-capturing group
    pub fn alternation(&self) -> String {
        alternation(&self.keywords)
    }

    /// Byte offset of the leftmost marker in `line`
    pub fn find(&self, line: &str) -> Option<usize> {
        self.pattern.find(line).map(|m| m.start())
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        let keywords: Vec<String> = DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect();
        let pattern = Regex::new(&alternation(&keywords))
            .unwrap_or_else(|_| unreachable!("escaped literals always compile"));
        Self { keywords, pattern }
    }
}

fn alternation(keywords: &[String]) -> String {
    let escaped: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Everything one run needs, validated up front
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that is enumerated and that output paths are relative to
    pub root: PathBuf,

    pub search_mode: SearchMode,

    pub format: FormatMode,

    pub keywords: KeywordSet,

    pub filter: PathFilter,
}
