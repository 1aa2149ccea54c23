//! Scripture reference heuristics: extraction and random fallback.
//!
//! Cheap ordered regex rules, no scripture database. False negatives are
//! fine — the caller falls back to a random seed verse.

use regex::Regex;
use std::sync::LazyLock;

/// Well-known verses used when a request names no reference.
pub const RANDOM_REFERENCES: [&str; 10] = [
    "John 3:16",
    "Philippians 4:13",
    "Jeremiah 29:11",
    "Romans 8:28",
    "Proverbs 3:5-6",
    "Isaiah 40:31",
    "Matthew 28:20",
    "Psalm 23:1",
    "1 Corinthians 13:4-5",
    "Ephesians 2:8-9",
];

// Ordered patterns; the first one matching anywhere in the text wins.
// Numbered books ("1 John") ride on the optional leading digit.
static VERSE_NUMBERED_BOOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d?\s*[A-Z][a-z]+(?:\s+\d+)?)\s+(\d+):(\d+(?:-\d+)?)\b").unwrap()
});
static VERSE_PLAIN_BOOK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]+)\s+(\d+):(\d+(?:-\d+)?)\b").unwrap());
static CHAPTER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d?\s*[A-Z][a-z]+)\s+(\d+)\b").unwrap());

/// Extract the first scripture reference from free text.
///
/// Returns a normalized `"Book Chapter:Verse[-Verse]"` or `"Book Chapter"`
/// string, or `None` when no pattern matches.
pub fn extract(text: &str) -> Option<String> {
    for re in [&*VERSE_NUMBERED_BOOK, &*VERSE_PLAIN_BOOK] {
        if let Some(caps) = re.captures(text) {
            return Some(format!("{} {}:{}", caps[1].trim(), &caps[2], &caps[3]));
        }
    }
    CHAPTER_ONLY
        .captures(text)
        .map(|caps| format!("{} {}", caps[1].trim(), &caps[2]))
}

/// Uniform-random reference from the seed list.
pub fn random_reference() -> String {
    RANDOM_REFERENCES[fastrand::usize(..RANDOM_REFERENCES.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_book_chapter_verse() {
        assert_eq!(
            extract("a devotional about love using John 3:16 please"),
            Some("John 3:16".to_string())
        );
    }

    #[test]
    fn test_extract_numbered_book_with_range() {
        assert_eq!(
            extract("teach from 1 John 2:1-5 today"),
            Some("1 John 2:1-5".to_string())
        );
    }

    #[test]
    fn test_extract_verse_range() {
        assert_eq!(
            extract("about forgiveness using Matthew 6:14-15"),
            Some("Matthew 6:14-15".to_string())
        );
    }

    #[test]
    fn test_extract_whole_chapter() {
        assert_eq!(extract("something on Psalm 23"), Some("Psalm 23".to_string()));
    }

    #[test]
    fn test_extract_first_match_wins() {
        assert_eq!(
            extract("compare John 3:16 and Romans 8:28"),
            Some("John 3:16".to_string())
        );
    }

    #[test]
    fn test_extract_none_without_reference() {
        assert_eq!(extract("a devotional about kindness for kids"), None);
        assert_eq!(extract(""), None);
    }

    #[test]
    fn test_random_reference_draws_from_seed_list() {
        for _ in 0..20 {
            let reference = random_reference();
            assert!(RANDOM_REFERENCES.contains(&reference.as_str()));
        }
    }
}
