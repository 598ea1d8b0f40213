use crate::error::ConfigError;
use regex::Regex;

/// Whether a rule keeps or drops the paths it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Include,
    Exclude,
}

/// A path regular expression together with its polarity
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    polarity: Polarity,
}

impl PatternRule {
    pub fn new(pattern: &str, polarity: Polarity) -> Result<Self, ConfigError> {
        let compiled = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            polarity,
        })
    }

    /// Exclude rule matching `name` as the last component of a path
    pub fn self_exclusion(name: &str) -> Self {
        let pattern = Regex::new(&format!("(?:^|/){}$", regex::escape(name)))
            .unwrap_or_else(|_| unreachable!("escaped literals always compile"));

        Self {
            pattern,
            polarity: Polarity::Exclude,
        }
    }

    /// Unanchored search: the pattern may occur anywhere in the path
    pub fn is_match(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

/// Ordered include/exclude rules applied to candidate paths
#[derive(Debug, Clone)]
pub struct PathFilter {
    rules: Vec<PatternRule>,
}

impl PathFilter {
    /// Build a filter whose first exclude rule always drops `self_name`
    pub fn new(
        self_name: &str,
        includes: &[String],
        excludes: &[String],
    ) -> Result<Self, ConfigError> {
        let mut rules = Vec::with_capacity(includes.len() + excludes.len() + 1);
        rules.push(PatternRule::self_exclusion(self_name));

        for pattern in excludes {
            rules.push(PatternRule::new(pattern, Polarity::Exclude)?);
        }
        for pattern in includes {
            rules.push(PatternRule::new(pattern, Polarity::Include)?);
        }

        Ok(Self { rules })
    }

    pub fn includes(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(|r| r.polarity == Polarity::Include)
    }

    pub fn excludes(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(|r| r.polarity == Polarity::Exclude)
    }

    /// Kept iff (no includes, or any include matches) and no exclude matches
    pub fn is_retained(&self, path: &str) -> bool {
        let mut includes = self.includes().peekable();
        let included = includes.peek().is_none() || includes.any(|rule| rule.is_match(path));

        included && !self.excludes().any(|rule| rule.is_match(path))
    }

    pub fn apply(&self, paths: Vec<String>) -> Vec<String> {
        paths
            .into_iter()
            .filter(|path| self.is_retained(path))
            .collect()
    }
}
