//! Natural ordering for filenames
//!
//! A name is split at every maximal run of ASCII digits. Digit runs compare
//! by numeric value, everything else compares case-insensitively, so
//! `file2` sorts before `file10`.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

/// A single component of a natural sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Lowercased non-digit run (may be empty at the edges of a key)
    Text(String),
    /// Digit run with leading zeros stripped, compared by magnitude
    Number(String),
}

impl Token {
    fn number(digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        Token::Number(significant.to_string())
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // Without leading zeros, a longer digit run is always the larger number
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"))
}

/// Build the natural sort key for a filename.
///
/// The key always alternates text and number tokens, starting and ending
/// with a (possibly empty) text token, so two keys only ever compare tokens
/// of the same kind at the same position.
pub fn natural_sort_key(filename: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for run in digit_runs().find_iter(filename) {
        tokens.push(Token::Text(filename[last..run.start()].to_lowercase()));
        tokens.push(Token::number(run.as_str()));
        last = run.end();
    }
    tokens.push(Token::Text(filename[last..].to_lowercase()));
    tokens
}

/// Compare two names in natural order
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_sort_key(a).cmp(&natural_sort_key(b))
}

/// Stable in-place natural sort of items by a name projection
pub fn sort_naturally<T, F>(items: &mut [T], name: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| natural_sort_key(name(item)));
}
