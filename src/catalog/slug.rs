//! Title segment slugification.

use deunicode::deunicode;

/// Fallback for segments with no alphanumeric content at all.
const FALLBACK_SEGMENT: &str = "section";

/// Normalize a title segment into a URL-safe slug.
///
/// Lowercased, `&` reads as "and", any run of non-alphanumeric
/// characters collapses to a single hyphen, no leading or trailing
/// hyphen. Non-ASCII input is transliterated first, so the result is
/// always ASCII. A segment that slugifies to nothing becomes the
/// literal `section`.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase().replace('&', " and ");

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SEGMENT.to_string()
    } else {
        slug
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lowercasing_and_hyphens() {
        assert_eq!(slugify("Binary Search"), "binary-search");
        assert_eq!(slugify("2. Core Algorithms"), "2-core-algorithms");
    }

    #[test]
    fn test_ampersand_reads_as_and() {
        assert_eq!(
            slugify("Two Pointers & Sliding Window"),
            "two-pointers-and-sliding-window"
        );
        assert_eq!(slugify("Sorting&Searching"), "sorting-and-searching");
    }

    #[test]
    fn test_non_alphanumeric_runs_collapse() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
        assert_eq!(slugify("(parens) [brackets]"), "parens-brackets");
    }

    #[test]
    fn test_no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("...dots..."), "dots");
        assert_eq!(slugify("-already-hyphenated-"), "already-hyphenated");
    }

    #[test]
    fn test_empty_result_falls_back() {
        assert_eq!(slugify("!!!"), "section");
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("---"), "section");
    }

    #[test]
    fn test_unicode_is_transliterated() {
        assert_eq!(slugify("Café Talk"), "cafe-talk");
    }

    #[test]
    fn test_output_is_always_well_formed() {
        for input in ["", "!!!", "A & B", "10. Heaps", "über  cool", "桜"] {
            let slug = slugify(input);
            assert!(!slug.is_empty(), "{input:?} produced an empty slug");
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{input:?} produced {slug:?}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }
}
