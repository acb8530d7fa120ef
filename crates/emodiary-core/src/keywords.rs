//! Stress vocabulary and matchers.
//!
//! Two matching modes are used over the same vocabulary:
//! - [`count_matches`]: whole-word, case-insensitive occurrences (scoring)
//! - [`contains_keyword`]: case-insensitive substring presence (indicators)
//!
//! Word boundaries are ASCII-only: an accented or other non-ASCII letter next
//! to a keyword counts as a separator, so "ñtired" still matches "tired".

use once_cell::sync::Lazy;
use regex::Regex;

/// Phrases that signal stress when they appear in an entry.
pub const STRESS_KEYWORDS: [&str; 17] = [
    "overwhelmed",
    "exhausted",
    "burnout",
    "stressed",
    "frustrated",
    "tired",
    "drained",
    "hopeless",
    "helpless",
    "can't cope",
    "breaking down",
    "falling apart",
    "can't handle",
    "too much",
    "pressure",
    "panic",
    "desperate",
];

static KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    STRESS_KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(keyword));
            // Escaped constant input, always compiles.
            Regex::new(&pattern).expect("stress keyword pattern")
        })
        .collect()
});

/// Number of boundary-anchored keyword occurrences in `content`, summed
/// over the whole vocabulary.
pub fn count_matches(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    KEYWORD_PATTERNS
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum()
}

/// Keywords present anywhere in `content`, in vocabulary order.
pub fn contains_keyword(content: &str) -> impl Iterator<Item = &'static str> + '_ {
    let lower = content.to_lowercase();
    STRESS_KEYWORDS
        .iter()
        .copied()
        .filter(move |keyword| lower.contains(keyword))
}
