use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "todocheck")]
#[command(
    version,
    about = "Report TODO and FIXME markers left in a file tree",
    long_about = "Report TODO and FIXME markers left in a file tree.\n\n\
                  Exits 1 when markers are found (unless --format warn), 0 when the tree is clean \
                  and 2 on configuration or enumeration errors."
)]
pub struct Cli {
    /// Only scan paths matching this regular expression (repeatable)
    #[arg(short, long = "include", value_name = "PATTERN")]
    pub includes: Vec<String>,

    /// Skip paths matching this regular expression (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "none")]
    pub format: FormatMode,

    /// How candidate files are listed
    #[arg(short, long, value_enum, default_value = "default")]
    pub mode: SearchMode,

    /// Marker to search for instead of the defaults "FIXME:" and "TODO:" (repeatable)
    #[arg(short, long = "keyword", value_name = "MARKER")]
    pub keywords: Vec<String>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How matched lines are rendered, and whether findings fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatMode {
    /// Raw `path:line:marker` lines; findings exit non-zero
    #[value(name = "none")]
    Raw,
    /// Compiler-style `path:line:warning: marker` lines; always exits 0
    Warn,
}

/// Strategy used to list candidate files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    /// Tracked and untracked, non-ignored files of the git working tree
    Git,
    /// Every regular file below the current directory
    Find,
    /// `git` inside a working tree, `find` elsewhere
    Default,
}
