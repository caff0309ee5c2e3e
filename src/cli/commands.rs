//! Command implementations for the Concord CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::books::Testament;
use crate::corpus::loader::load_corpus;
use crate::error::{ConcordError, Result};
use crate::reader::navigator::Navigator;
use crate::search::engine::SearchEngine;
use crate::search::history::SearchHistory;
use crate::search::presenter::{self, SearchStats};
use crate::search::query::{AdvancedFilter, SearchQuery};
use crate::search::session::{SearchOutcome, SearchSession};

/// Execute a CLI command.
pub fn execute_command(args: ConcordArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Read(read_args) => read_chapter(read_args.clone(), &args),
        Command::Books(books_args) => list_books(books_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::History(history_args) => show_history(history_args.clone(), &args),
    }
}

/// Search the corpus, with or without advanced filters.
fn search(args: SearchArgs, cli_args: &ConcordArgs) -> Result<()> {
    let Some(query) = SearchQuery::parse(&args.query) else {
        // Blank input resets to idle; nothing to evaluate.
        return Ok(());
    };

    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", args.data.display());
    }
    let corpus = load_corpus(&args.data)?;
    let engine = SearchEngine::new(corpus)?;

    let history = match &args.history_file {
        Some(path) => SearchHistory::with_file(path),
        None => SearchHistory::in_memory(),
    };

    let output = if args.has_filter() {
        filtered_search_output(&engine, &query, &args, history)
    } else {
        session_search_output(engine, &query, &args, history)?
    };

    output_result(&output, cli_args)
}

/// Plain search through a session (supersede semantics, history recording).
fn session_search_output(
    engine: SearchEngine,
    query: &SearchQuery,
    args: &SearchArgs,
    history: SearchHistory,
) -> Result<SearchOutput> {
    let mut session = SearchSession::with_engine(engine)
        .with_history(history)
        .with_limit(args.limit);
    session.submit(query.display());
    match session.flush()? {
        SearchOutcome::Evaluated { result, stats } => Ok(SearchOutput {
            query: query.display().to_string(),
            stats,
            result,
        }),
        SearchOutcome::Idle => Err(ConcordError::query("query was not evaluated")),
    }
}

/// Filtered search: always a linear scan over the corpus.
fn filtered_search_output(
    engine: &SearchEngine,
    query: &SearchQuery,
    args: &SearchArgs,
    mut history: SearchHistory,
) -> SearchOutput {
    let mut filter = AdvancedFilter::new();
    if let Some(book) = &args.book {
        filter = filter.with_book(book);
    }
    if let Some(testament) = args.testament {
        filter = filter.with_testament(testament.into());
    }
    let min_chapter = args.min_chapter.unwrap_or(filter.min_chapter);
    let max_chapter = args.max_chapter.unwrap_or(filter.max_chapter);
    filter = filter.with_chapters(min_chapter, max_chapter);

    let started = Instant::now();
    let matches = engine.filtered_search(query, &filter);
    let stats = SearchStats {
        total_matches: matches.len(),
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
    };
    let result = presenter::present(&matches, query, args.limit);
    history.record(query.display(), stats.total_matches);

    SearchOutput {
        query: query.display().to_string(),
        stats,
        result,
    }
}

/// Print one chapter of the corpus.
fn read_chapter(args: ReadArgs, cli_args: &ConcordArgs) -> Result<()> {
    let corpus = load_corpus(&args.data)?;
    let mut navigator = Navigator::new(&corpus)?;

    let book_idx = navigator
        .book_names()
        .iter()
        .position(|name| name.eq_ignore_ascii_case(&args.book))
        .ok_or_else(|| ConcordError::corpus(format!("unknown book: {}", args.book)))?;
    navigator.go_to_book(book_idx);

    if args.chapter == 0 || !navigator.go_to_chapter(args.chapter as usize - 1) {
        return Err(ConcordError::corpus(format!(
            "{} has no chapter {}",
            args.book, args.chapter
        )));
    }

    let view = navigator.current_chapter();
    let output = ChapterOutput {
        book: view.book.to_string(),
        chapter: view.chapter,
        verse_count: view.verse_count(),
        verses: view.verses.iter().map(|v| v.to_string()).collect(),
    };
    output_result(&output, cli_args)
}

/// List the corpus's books with chapter counts and testament.
fn list_books(args: BooksArgs, cli_args: &ConcordArgs) -> Result<()> {
    let corpus = load_corpus(&args.data)?;
    let navigator = Navigator::new(&corpus)?;

    let books = navigator
        .book_names()
        .iter()
        .enumerate()
        .map(|(i, name)| BookInfo {
            name: name.to_string(),
            chapters: navigator.chapter_count(i).unwrap_or(0),
            testament: Testament::of(name),
        })
        .collect();

    output_result(&BooksOutput { books }, cli_args)
}

/// Show corpus and index statistics.
fn show_stats(args: StatsArgs, cli_args: &ConcordArgs) -> Result<()> {
    let corpus = load_corpus(&args.data)?;
    let stats = corpus.stats();
    let engine = SearchEngine::new(corpus)?;

    let output = StatsOutput {
        corpus: stats,
        indexed_terms: engine.index().term_count(),
    };
    output_result(&output, cli_args)
}

/// Show the persisted search history.
fn show_history(args: HistoryArgs, cli_args: &ConcordArgs) -> Result<()> {
    let history = SearchHistory::with_file(&args.history_file);
    let output = HistoryOutput {
        entries: history.entries().cloned().collect(),
    };
    output_result(&output, cli_args)
}
