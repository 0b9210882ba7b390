//! Display titles and their ordering.
//!
//! Authors prefix directory names with numeric labels ("2. Trees") to
//! pin authorial order. The prefix is stripped for display but kept in
//! the raw title, which drives numeric-aware child sorting.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::LazyLock;

use regex::Regex;

/// Leading ordering label: digits, an optional dot, then spacing.
/// ASCII classes only, the regex crate is built without its Unicode tables.
static ORDERING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?[ \t]+").expect("valid regex"));

/// Strip the leading ordering prefix from a raw title.
///
/// A title that is nothing but a prefix stays unchanged so nothing
/// displays as an empty string.
pub fn strip_ordering_prefix(raw: &str) -> &str {
    match ORDERING_PREFIX.find(raw) {
        Some(m) if m.end() < raw.len() => &raw[m.end()..],
        _ => raw,
    }
}

/// Numeric-aware, case-insensitive ordering for raw titles.
///
/// Digit runs compare by value, so "2. X" sorts before "10. Y" where a
/// plain lexicographic comparison would not.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars().peekable();
    let mut ib = b.chars().peekable();

    loop {
        match (ia.peek().copied(), ib.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let (da, za) = take_digits(&mut ia);
                let (db, zb) = take_digits(&mut ib);
                // shorter digit run (ignoring leading zeros) is smaller
                let ord = da.len().cmp(&db.len()).then_with(|| da.cmp(&db));
                if ord != Ordering::Equal {
                    return ord;
                }
                // equal value: fewer leading zeros first, for determinism
                if za != zb {
                    return za.cmp(&zb);
                }
            }
            (Some(ca), Some(cb)) => {
                let la = ca.to_ascii_lowercase();
                let lb = cb.to_ascii_lowercase();
                let ord = la.cmp(&lb).then_with(|| ca.cmp(&cb));
                if ord != Ordering::Equal {
                    return ord;
                }
                ia.next();
                ib.next();
            }
        }
    }
}

/// Consume a digit run, returning (digits without leading zeros, zero count).
fn take_digits(it: &mut Peekable<Chars>) -> (String, usize) {
    let mut zeros = 0;
    while it.peek() == Some(&'0') {
        zeros += 1;
        it.next();
    }
    let mut digits = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        it.next();
    }
    (digits, zeros)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_basic_prefix() {
        assert_eq!(strip_ordering_prefix("2. Core Algorithms"), "Core Algorithms");
        assert_eq!(
            strip_ordering_prefix("4. Domain-Specific & Advanced"),
            "Domain-Specific & Advanced"
        );
        assert_eq!(strip_ordering_prefix("10 Heaps"), "Heaps");
        assert_eq!(strip_ordering_prefix("3.\tTabbed"), "Tabbed");
    }

    #[test]
    fn test_strip_without_prefix_is_identity() {
        assert_eq!(strip_ordering_prefix("Binary Search"), "Binary Search");
        assert_eq!(strip_ordering_prefix(""), "");
        // a dot without digits is not an ordering label
        assert_eq!(strip_ordering_prefix(". Dotted"), ". Dotted");
    }

    #[test]
    fn test_strip_never_yields_empty() {
        assert_eq!(strip_ordering_prefix("12. "), "12. ");
        assert_eq!(strip_ordering_prefix("3 "), "3 ");
    }

    #[test]
    fn test_strip_is_idempotent_on_real_titles() {
        for raw in [
            "1. Foundations",
            "2. Core Algorithms",
            "Binary Search",
            "4. Domain-Specific & Advanced",
            "12. ",
        ] {
            let once = strip_ordering_prefix(raw);
            assert_eq!(strip_ordering_prefix(once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_natural_cmp_numeric_runs() {
        assert_eq!(natural_cmp("2. X", "10. Y"), Ordering::Less);
        assert_eq!(natural_cmp("10. Y", "2. X"), Ordering::Greater);
        assert_eq!(natural_cmp("2. X", "2. X"), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_sorts_children() {
        let mut titles = ["10. Z", "2. A", "1. B"];
        titles.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(titles, ["1. B", "2. A", "10. Z"]);
    }

    #[test]
    fn test_natural_cmp_case_insensitive() {
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Less); // tie-break stays total
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp("02", "2"), Ordering::Greater);
        assert_eq!(natural_cmp("2", "02"), Ordering::Less);
    }
}
