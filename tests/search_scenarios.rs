//! End-to-end search engine scenarios.

use concord::corpus::books::Testament;
use concord::corpus::corpus::Corpus;
use concord::corpus::loader::parse_corpus;
use concord::corpus::verse::VerseRecord;
use concord::search::engine::{MatchStrategy, SearchEngine};
use concord::search::presenter::{self, ResultSet};
use concord::search::query::{AdvancedFilter, SearchQuery};
use concord::search::session::{SearchOutcome, SearchSession};

fn small_corpus() -> Corpus {
    Corpus::new(vec![
        VerseRecord::new("Genesis", 1, 1, "In the beginning God created the heaven and the earth."),
        VerseRecord::new("Genesis", 3, 1, "Now the serpent was more subtil than any beast"),
        VerseRecord::new("Exodus", 1, 1, "Now these are the names of the children of Israel"),
        VerseRecord::new("Psalms", 30, 5, "weeping may endure for a night, but joy cometh in the morning"),
        VerseRecord::new("Proverbs", 14, 23, "In all labour there is profit"),
        VerseRecord::new("Galatians", 5, 22, "But the fruit of the Spirit is love, joy, peace"),
        VerseRecord::new("1 John", 4, 8, "He that loveth not knoweth not God; for God is love."),
    ])
}

fn query(text: &str) -> SearchQuery {
    SearchQuery::parse(text).unwrap()
}

#[test]
fn indexed_and_returns_only_verses_with_every_word() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    let matches = engine.search(&query("love joy"));
    assert_eq!(matches.strategy, MatchStrategy::Indexed);
    let refs: Vec<String> = matches.verses.iter().map(|v| v.reference()).collect();
    // Galatians 5:22 has both; 1 John 4:8 has "love" but not "joy" and
    // Psalms 30:5 has "joy" but not "love".
    assert_eq!(refs, vec!["Galatians 5:22"]);
}

#[test]
fn short_query_falls_back_to_substring_scan() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    let matches = engine.search(&query("of"));
    assert_eq!(matches.strategy, MatchStrategy::Scan);
    let refs: Vec<String> = matches.verses.iter().map(|v| v.reference()).collect();
    // Substring semantics: "profit" contains "of".
    assert!(refs.contains(&"Proverbs 14:23".to_string()));
    assert!(refs.contains(&"Exodus 1:1".to_string()));
}

#[test]
fn results_sort_by_canonical_book_order() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    let matches = engine.search(&query("now"));
    let set = presenter::present(&matches.verses, &query("now"), 500);
    let ResultSet::Listing { entries, .. } = set else {
        panic!("expected a listing");
    };
    let refs: Vec<&str> = entries.iter().map(|e| e.reference.as_str()).collect();
    // Genesis 3:1 precedes Exodus 1:1 despite "Exodus" < "Genesis"
    // alphabetically.
    assert_eq!(refs, vec!["Genesis 3:1", "Exodus 1:1"]);
}

#[test]
fn truncation_reports_the_true_total() {
    let verses: Vec<VerseRecord> = (0..600)
        .map(|i| VerseRecord::new("Psalms", i / 10 + 1, i % 10 + 1, "Praise ye the LORD."))
        .collect();
    let engine = SearchEngine::new(Corpus::new(verses)).unwrap();
    let matches = engine.search(&query("praise"));
    assert_eq!(matches.verses.len(), 600);

    let set = presenter::present(&matches.verses, &query("praise"), 500);
    let ResultSet::Listing {
        entries,
        total_matches,
        truncation,
    } = set
    else {
        panic!("expected a listing");
    };
    assert_eq!(entries.len(), 500);
    assert_eq!(total_matches, 600);
    assert_eq!(truncation.unwrap().total, 600);
}

#[test]
fn highlighting_wraps_one_case_preserved_occurrence() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    let matches = engine.search(&query("God"));
    let set = presenter::present(&matches.verses, &query("God"), 500);
    let ResultSet::Listing { entries, .. } = set else {
        panic!("expected a listing");
    };
    let genesis = entries.iter().find(|e| e.reference == "Genesis 1:1").unwrap();
    assert_eq!(
        genesis.highlighted_text,
        "In the beginning <mark>God</mark> created the heaven and the earth."
    );
    assert_eq!(genesis.highlighted_text.matches("<mark>").count(), 1);
}

#[test]
fn filtered_search_excludes_other_testament_matches() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    // "begin" matches Genesis 1:1 ("beginning") as a substring, but the
    // New Testament filter must exclude it.
    let matches = engine.filtered_search(
        &query("begin"),
        &AdvancedFilter::new().with_testament(Testament::New),
    );
    assert!(matches.is_empty());

    let matches = engine.filtered_search(&query("begin"), &AdvancedFilter::new());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].reference(), "Genesis 1:1");
}

#[test]
fn repeated_word_in_a_verse_cannot_fake_an_and_match() {
    // "knoweth" appears once, "not" twice in 1 John 4:8. With deduplicated
    // postings the two-word query matches on presence of both words, and a
    // verse repeating only one of them does not match.
    let corpus = Corpus::new(vec![
        VerseRecord::new("1 John", 4, 8, "He that loveth not knoweth not God"),
        VerseRecord::new("Psalms", 1, 1, "Blessed is the man that walketh not, not, not"),
    ]);
    let engine = SearchEngine::new(corpus).unwrap();
    let matches = engine.search(&query("knoweth not"));
    let refs: Vec<String> = matches.verses.iter().map(|v| v.reference()).collect();
    assert_eq!(refs, vec!["1 John 4:8"]);
}

#[test]
fn nested_document_shape_is_adapted_to_flat_records() {
    let json = r#"[
        {"name": "Genesis", "chapters": [["In the beginning God created"], ["Thus the heavens"]]},
        {"name": "Matthew", "chapters": [["The book of the generation"]]}
    ]"#;
    let corpus = parse_corpus(json).unwrap();
    let engine = SearchEngine::new(corpus).unwrap();
    let matches = engine.search(&query("generation"));
    let refs: Vec<String> = matches.verses.iter().map(|v| v.reference()).collect();
    assert_eq!(refs, vec!["Matthew 1:1"]);
}

#[test]
fn session_evaluates_only_the_latest_query_in_a_burst() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    let mut session = SearchSession::with_engine(engine);

    // A typing burst: only the final state of the input is evaluated.
    session.submit("l");
    session.submit("lo");
    session.submit("love joy");
    let outcome = session.flush().unwrap();
    let SearchOutcome::Evaluated { stats, .. } = outcome else {
        panic!("expected an evaluated outcome");
    };
    assert_eq!(stats.total_matches, 1);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().entries().next().unwrap().query, "love joy");
}

#[test]
fn clearing_the_input_resets_to_idle() {
    let engine = SearchEngine::new(small_corpus()).unwrap();
    let mut session = SearchSession::with_engine(engine);
    session.submit("god");
    session.submit("   ");
    assert!(matches!(session.flush().unwrap(), SearchOutcome::Idle));
    assert!(session.history().is_empty());
}
