//! Command line argument parsing for the Concord CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::corpus::books::Testament;
use crate::search::presenter::DEFAULT_RESULT_LIMIT;

/// Concord - a concordance-style reader and search tool
#[derive(Parser, Debug, Clone)]
#[command(name = "concord")]
#[command(about = "Search and read a versified text corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the corpus
    Search(SearchArgs),

    /// Print a chapter
    Read(ReadArgs),

    /// List the corpus's books
    Books(BooksArgs),

    /// Show corpus and index statistics
    Stats(StatsArgs),

    /// Show the recorded search history
    History(HistoryArgs),
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Testament filter options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestamentArg {
    Old,
    New,
}

impl From<TestamentArg> for Testament {
    fn from(arg: TestamentArg) -> Self {
        match arg {
            TestamentArg::Old => Testament::Old,
            TestamentArg::New => Testament::New,
        }
    }
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus JSON document
    #[arg(short, long, default_value = "bible.json")]
    pub data: PathBuf,

    /// The query text
    pub query: String,

    /// Restrict matches to one book (exact name)
    #[arg(long)]
    pub book: Option<String>,

    /// Restrict matches to one testament
    #[arg(long)]
    pub testament: Option<TestamentArg>,

    /// Lowest chapter to include
    #[arg(long)]
    pub min_chapter: Option<u32>,

    /// Highest chapter to include
    #[arg(long)]
    pub max_chapter: Option<u32>,

    /// Maximum number of displayed results
    #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
    pub limit: usize,

    /// File to append search history to (best-effort)
    #[arg(long)]
    pub history_file: Option<PathBuf>,
}

impl SearchArgs {
    /// Whether any advanced-filter option was given.
    pub fn has_filter(&self) -> bool {
        self.book.is_some()
            || self.testament.is_some()
            || self.min_chapter.is_some()
            || self.max_chapter.is_some()
    }
}

/// Arguments for the read command
#[derive(Parser, Debug, Clone)]
pub struct ReadArgs {
    /// Path to the corpus JSON document
    #[arg(short, long, default_value = "bible.json")]
    pub data: PathBuf,

    /// Book name (exact)
    pub book: String,

    /// 1-based chapter number
    #[arg(default_value_t = 1)]
    pub chapter: u32,
}

/// Arguments for the books command
#[derive(Parser, Debug, Clone)]
pub struct BooksArgs {
    /// Path to the corpus JSON document
    #[arg(short, long, default_value = "bible.json")]
    pub data: PathBuf,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus JSON document
    #[arg(short, long, default_value = "bible.json")]
    pub data: PathBuf,
}

/// Arguments for the history command
#[derive(Parser, Debug, Clone)]
pub struct HistoryArgs {
    /// History file written by previous searches
    #[arg(long)]
    pub history_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = ConcordArgs::parse_from(["concord", "search", "light"]);
        assert_eq!(args.verbosity(), 1);

        let args = ConcordArgs::parse_from(["concord", "-q", "search", "light"]);
        assert_eq!(args.verbosity(), 0);

        let args = ConcordArgs::parse_from(["concord", "-vv", "search", "light"]);
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_search_filter_flags() {
        let args = ConcordArgs::parse_from([
            "concord",
            "search",
            "begin",
            "--testament",
            "new",
            "--max-chapter",
            "5",
        ]);
        let Command::Search(search) = args.command else {
            panic!("expected search command");
        };
        assert!(search.has_filter());
        assert_eq!(search.testament, Some(TestamentArg::New));
        assert_eq!(search.max_chapter, Some(5));
        assert_eq!(search.limit, DEFAULT_RESULT_LIMIT);
    }
}
