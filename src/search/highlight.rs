//! Literal case-insensitive highlighting of query matches.
//!
//! Every case-insensitive occurrence of the whole query string is wrapped
//! in a highlight tag, with the original casing preserved inside the tag.
//! Matching is a literal find-and-wrap: no pattern is ever compiled from
//! user input, so regex metacharacters in a query need no escaping and
//! cannot crash or inject into the match.

/// Opening highlight tag.
pub const HIGHLIGHT_OPEN: &str = "<mark>";
/// Closing highlight tag.
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of `query` in `text` with the
/// highlight tags. Occurrences are found left to right and do not overlap.
pub fn highlight(text: &str, query: &str) -> String {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return text.to_string();
    }

    let (lowered, offsets) = lowered_with_offsets(text);
    let mut out = String::with_capacity(text.len());
    let mut search_from = 0; // byte offset into `lowered`
    let mut copied_to = 0; // byte offset into `text`

    while let Some(found) = lowered[search_from..].find(&needle) {
        let match_start = search_from + found;
        let match_end = match_start + needle.len();
        let orig_start = offsets[match_start];
        let orig_end = if match_end < lowered.len() {
            offsets[match_end]
        } else {
            text.len()
        };
        // A match ending inside a multi-byte case expansion maps to an empty
        // original span; skip it rather than emit unbalanced tags.
        if orig_end > orig_start {
            out.push_str(&text[copied_to..orig_start]);
            out.push_str(HIGHLIGHT_OPEN);
            out.push_str(&text[orig_start..orig_end]);
            out.push_str(HIGHLIGHT_CLOSE);
            copied_to = orig_end;
        }
        search_from = match_end;
    }
    out.push_str(&text[copied_to..]);
    out
}

/// Lowercase `text` char by char, recording for every byte of the lowered
/// string the byte offset of the original char it came from. Case folding
/// can change byte lengths (e.g. 'İ'), so byte offsets cannot be shared
/// between the two strings directly.
fn lowered_with_offsets(text: &str) -> (String, Vec<usize>) {
    let mut lowered = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        for lc in ch.to_lowercase() {
            lowered.push(lc);
        }
        while offsets.len() < lowered.len() {
            offsets.push(i);
        }
    }
    (lowered, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_case_preserved_occurrence() {
        let out = highlight("In the beginning God created", "god");
        assert_eq!(out, "In the beginning <mark>God</mark> created");
    }

    #[test]
    fn test_case_insensitive_query() {
        let out = highlight("the LORD is my shepherd", "Lord");
        assert_eq!(out, "the <mark>LORD</mark> is my shepherd");
    }

    #[test]
    fn test_multiple_occurrences() {
        let out = highlight("light from light", "light");
        assert_eq!(out, "<mark>light</mark> from <mark>light</mark>");
    }

    #[test]
    fn test_whole_query_string_not_per_word() {
        let out = highlight("love and joy; joy and love", "and joy");
        assert_eq!(out, "love <mark>and joy</mark>; joy and love");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert_eq!(highlight("a.b matches a.b", "a.b"), "<mark>a.b</mark> matches <mark>a.b</mark>");
        assert_eq!(highlight("nothing here", "(unclosed"), "nothing here");
        assert_eq!(highlight("axb is not a.b", "a.b"), "axb is not <mark>a.b</mark>");
    }

    #[test]
    fn test_no_match_returns_text_unchanged() {
        assert_eq!(highlight("In the beginning", "zebra"), "In the beginning");
    }
}
