/*!
 * Subtitle search engine.
 *
 * Multi-term, delimiter-aware query parsing; case- and diacritic-insensitive
 * substring matching; result ranking by start time; highlight-span
 * computation over the original-case content.
 */

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::subtitle::SubtitleEntry;

// @module: Query parsing, matching and highlighting

/// Delimiters separating query terms: ASCII comma and CJK comma
const TERM_DELIMITERS: [char; 2] = [',', '，'];

/// Marker wrapped around each matched span in highlighted content
const HIGHLIGHT_MARKER: &str = "**";

// @struct: One search hit, borrowing the matched entry
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    // @field: The matched corpus entry
    pub entry: &'a SubtitleEntry,

    // @field: Raw user query string
    pub search_keyword: String,

    // @field: Parsed query terms
    pub search_terms: Vec<String>,

    // @field: Entry content with matched spans wrapped in bold markers
    pub highlighted_content: String,
}

impl<'a> SearchResult<'a> {
    // @creates: Result with highlights computed eagerly
    pub fn new(entry: &'a SubtitleEntry, search_keyword: &str) -> Self {
        let search_terms = parse_query(search_keyword);
        let highlighted_content = highlight(&entry.content, &search_terms);

        SearchResult {
            entry,
            search_keyword: search_keyword.to_string(),
            search_terms,
            highlighted_content,
        }
    }

    /// Display name of the video this result belongs to. Falls back to a
    /// `<base>.mp4` placeholder when no sibling video exists.
    pub fn video_file_name(&self) -> String {
        match self.entry.associated_video_path() {
            Some(video) => video
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            None => format!("{}.mp4", self.entry.source_file_name()),
        }
    }

    /// Start time rendered as `HH:MM:SS`
    pub fn formatted_time(&self) -> String {
        self.entry.formatted_start_time()
    }
}

/// Split a raw query into non-empty trimmed terms.
///
/// Splits on ASCII and CJK commas. When splitting yields exactly one term
/// identical to the trimmed query, the trimmed query itself is returned;
/// this keeps the no-delimiter case byte-for-byte stable.
pub fn parse_query(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();

    let terms: Vec<String> = raw
        .split(&TERM_DELIMITERS[..])
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(ToString::to_string)
        .collect();

    if terms.len() == 1 && terms[0] == trimmed {
        return vec![trimmed.to_string()];
    }

    terms
}

/// Search the corpus for entries matching any query term.
///
/// An empty query yields an empty result set, not an error. Results are
/// sorted ascending by start time; equal start times keep corpus order.
pub fn search<'a>(corpus: &'a [SubtitleEntry], raw_query: &str) -> Vec<SearchResult<'a>> {
    if raw_query.trim().is_empty() {
        return Vec::new();
    }

    let terms = parse_query(raw_query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult<'a>> = corpus
        .iter()
        .filter(|entry| terms.iter().any(|term| contains_term(&entry.content, term)))
        .map(|entry| SearchResult::new(entry, raw_query))
        .collect();

    // Stable sort: ties preserve relative corpus order
    results.sort_by(|a, b| {
        a.entry
            .start_time
            .partial_cmp(&b.entry.start_time)
            .unwrap_or(Ordering::Equal)
    });

    results
}

/// Case- and diacritic-insensitive substring containment
pub fn contains_term(content: &str, term: &str) -> bool {
    let folded_term = fold(term);
    !folded_term.is_empty() && fold(content).contains(&folded_term)
}

/// Wrap every occurrence of every term in bold markers.
///
/// Terms apply sequentially, each scanning the text already marked up by
/// earlier terms, so overlapping terms can nest markers. Within one term's
/// pass the occurrences found left to right are replaced right to left so
/// earlier replacements never shift pending offsets.
pub fn highlight(content: &str, terms: &[String]) -> String {
    let mut result = content.to_string();

    for term in terms {
        if term.is_empty() {
            continue;
        }

        let ranges = find_occurrences(&result, term);
        for (start, end) in ranges.iter().rev() {
            let matched = format!("{}{}{}", HIGHLIGHT_MARKER, &result[*start..*end], HIGHLIGHT_MARKER);
            result.replace_range(*start..*end, &matched);
        }
    }

    result
}

/// Find every non-overlapping case/diacritic-insensitive occurrence of
/// `term` in `content`, left to right, as original byte ranges.
fn find_occurrences(content: &str, term: &str) -> Vec<(usize, usize)> {
    let folded_term = fold(term);
    if folded_term.is_empty() {
        return Vec::new();
    }

    // Fold the content while recording, for every folded byte, the byte
    // range of the original character it came from.
    let mut folded = String::new();
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for (offset, ch) in content.char_indices() {
        let char_end = offset + ch.len_utf8();
        let before = folded.len();
        fold_char(ch, &mut folded);
        for _ in before..folded.len() {
            spans.push((offset, char_end));
        }
    }

    let mut ranges = Vec::new();
    let mut cursor = 0;
    while let Some(found) = folded[cursor..].find(&folded_term) {
        let start = cursor + found;
        let last = start + folded_term.len() - 1;
        let orig_start = spans[start].0;
        let mut orig_end = spans[last].1;

        // Keep trailing decomposed accents attached to the highlighted span
        while let Some(next) = content[orig_end..].chars().next() {
            if is_combining_mark(next) {
                orig_end += next.len_utf8();
            } else {
                break;
            }
        }

        ranges.push((orig_start, orig_end));
        cursor = start + folded_term.len();
    }

    ranges
}

/// Project a string onto its folded form: decomposed, stripped of
/// combining marks, lowercased
fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        fold_char(ch, &mut folded);
    }
    folded
}

fn fold_char(ch: char, out: &mut String) {
    for decomposed in std::iter::once(ch).nfd() {
        if !is_combining_mark(decomposed) {
            out.extend(decomposed.to_lowercase());
        }
    }
}
