use crate::cli::FormatMode;

/// Exit status when markers were reported in `none` mode
pub const MATCHES_FOUND: u8 = 1;

/// Exit status for configuration and enumeration errors
///
/// Shared with clap's own usage errors.
pub const FATAL: u8 = 2;

/// Outcome of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing was reported
    Clean,
    /// Markers were reported and should fail the run
    Findings,
    /// Markers were reported as warnings only
    Advisory,
}

impl Verdict {
    pub fn code(self) -> u8 {
        match self {
            Verdict::Clean | Verdict::Advisory => 0,
            Verdict::Findings => MATCHES_FOUND,
        }
    }
}

/// Combine "was anything printed" with the format mode
pub fn decide(produced_output: bool, format: FormatMode) -> Verdict {
    match (produced_output, format) {
        (false, _) => Verdict::Clean,
        (true, FormatMode::Raw) => Verdict::Findings,
        (true, FormatMode::Warn) => Verdict::Advisory,
    }
}
