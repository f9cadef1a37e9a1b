use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ImportError;

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)$").expect("valid author regex"));

static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?.!«»…,()\[\]]").expect("valid punctuation regex"));

/// A highlighted word and the title of the book it is in
pub type Highlight = (String, String);

/// Remove the author, which is in the last parentheses
pub fn remove_author(title_author: &str) -> String {
    AUTHOR_RE.replace(title_author, "").into_owned()
}

/// Highlighted text reduced to a comparable word
pub fn clean_word(text: &str) -> String {
    PUNCTUATION_RE.replace_all(text, "").to_lowercase()
}

/// Parse `My Clippings.txt`. Every entry is five lines:
/// title (author), metadata, blank, text, separator.
pub fn parse_clippings(text: &str) -> Result<HashSet<Highlight>, ImportError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() % 5 != 0 {
        return Err(ImportError::MalformedClippings(lines.len()));
    }

    Ok(lines
        .chunks_exact(5)
        .map(|entry| {
            let title = remove_author(entry[0].trim_matches('\u{feff}'));
            (clean_word(entry[3]), title)
        })
        .collect())
}
