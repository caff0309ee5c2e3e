//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{ConcordArgs, OutputFormat};
use crate::corpus::corpus::CorpusStats;
use crate::error::Result;
use crate::search::history::HistoryEntry;
use crate::search::presenter::{ResultSet, SearchStats};

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub stats: SearchStats,
    pub result: ResultSet,
}

/// Result structure for the read command.
#[derive(Debug, Serialize)]
pub struct ChapterOutput {
    pub book: String,
    pub chapter: u32,
    pub verse_count: usize,
    pub verses: Vec<String>,
}

/// One book in the books listing.
#[derive(Debug, Serialize)]
pub struct BookInfo {
    pub name: String,
    pub chapters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testament: Option<crate::corpus::books::Testament>,
}

/// Result structure for the books command.
#[derive(Debug, Serialize)]
pub struct BooksOutput {
    pub books: Vec<BookInfo>,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub corpus: CorpusStats,
    pub indexed_terms: usize,
}

/// Result structure for the history command.
#[derive(Debug, Serialize)]
pub struct HistoryOutput {
    pub entries: Vec<HistoryEntry>,
}

/// Human rendering for a command's output structure.
pub trait HumanRender {
    fn render_human(&self) -> String;
}

/// Print a command result in the requested output format.
pub fn output_result<T: Serialize + HumanRender>(result: &T, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", result.render_human());
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

impl HumanRender for SearchOutput {
    fn render_human(&self) -> String {
        let mut out = format!(
            "Found {} results for \"{}\" in {:.2}ms\n",
            self.stats.total_matches, self.query, self.stats.elapsed_ms
        );
        match &self.result {
            ResultSet::Empty { query } => {
                out.push_str(&format!("No verses found containing \"{query}\"\n"));
            }
            ResultSet::Listing {
                entries,
                total_matches,
                truncation,
            } => {
                for entry in entries {
                    out.push_str(&format!("{}\n    {}\n", entry.reference, entry.highlighted_text));
                }
                if let Some(notice) = truncation {
                    out.push_str(&format!(
                        "Showing {} of {} results. Try a more specific search.\n",
                        notice.shown, total_matches
                    ));
                }
            }
        }
        out
    }
}

impl HumanRender for ChapterOutput {
    fn render_human(&self) -> String {
        let mut out = format!(
            "{} - Chapter {} ({} verses)\n",
            self.book, self.chapter, self.verse_count
        );
        for (i, verse) in self.verses.iter().enumerate() {
            out.push_str(&format!("{:>3}  {}\n", i + 1, verse));
        }
        out
    }
}

impl HumanRender for BooksOutput {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for book in &self.books {
            let testament = match book.testament {
                Some(crate::corpus::books::Testament::Old) => "old",
                Some(crate::corpus::books::Testament::New) => "new",
                None => "-",
            };
            out.push_str(&format!(
                "{:<20} {:>3} chapters  [{}]\n",
                book.name, book.chapters, testament
            ));
        }
        out
    }
}

impl HumanRender for StatsOutput {
    fn render_human(&self) -> String {
        format!(
            "Verses:        {}\nBooks:         {}\nChapters:      {}\nIndexed terms: {}\n",
            self.corpus.verse_count,
            self.corpus.book_count,
            self.corpus.chapter_count,
            self.indexed_terms
        )
    }
}

impl HumanRender for HistoryOutput {
    fn render_human(&self) -> String {
        if self.entries.is_empty() {
            return "No recorded searches\n".to_string();
        }
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "{}  {:>6} results  \"{}\"\n",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.result_count,
                entry.query
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_output_human_truncation_notice() {
        let output = SearchOutput {
            query: "praise".to_string(),
            stats: SearchStats {
                total_matches: 600,
                elapsed_ms: 1.5,
            },
            result: ResultSet::Listing {
                entries: vec![],
                total_matches: 600,
                truncation: Some(crate::search::presenter::TruncationNotice {
                    shown: 500,
                    total: 600,
                }),
            },
        };
        let rendered = output.render_human();
        assert!(rendered.contains("Found 600 results"));
        assert!(rendered.contains("Showing 500 of 600 results"));
    }

    #[test]
    fn test_search_output_human_no_results() {
        let output = SearchOutput {
            query: "zebra".to_string(),
            stats: SearchStats {
                total_matches: 0,
                elapsed_ms: 0.3,
            },
            result: ResultSet::Empty {
                query: "zebra".to_string(),
            },
        };
        assert!(output.render_human().contains("No verses found containing \"zebra\""));
    }
}
