//! Pure validation predicates for user-supplied text.
//!
//! The console loop owns the re-prompt policy; everything here is
//! side-effect free so tests never have to drive simulated terminal
//! input.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("invalid numeric regex"));

/// True iff `input` is one or more ASCII digits.
///
/// Menu selection uses this as a coarse filter before mapping the value
/// to an option; unmapped values are handled by the menu itself.
pub fn numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_digit())
}

/// True iff `input` is a decimal numeral without leading zeros whose
/// value lies in `1..=max`.
pub fn numeric_in_range(input: &str, max: usize) -> bool {
    parse_in_range(input, max).is_some()
}

/// Parse `input` under the same rules as [`numeric_in_range`].
///
/// Returns the value so callers never re-parse validated text. Numerals
/// too large for `usize` are rejected like any other out-of-range value.
pub fn parse_in_range(input: &str, max: usize) -> Option<usize> {
    if !NUMERIC_RE.is_match(input) {
        return None;
    }
    let value = input.parse::<usize>().ok()?;
    (1..=max).contains(&value).then_some(value)
}

/// True iff `input` is exactly one of `y`, `Y`, `n`, `N`.
pub fn yes_no(input: &str) -> bool {
    matches!(input, "y" | "Y" | "n" | "N")
}

/// True iff `input` confirms the action.
///
/// Any non-yes confirmation is a uniform abort; there is no separate
/// cancel path.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input, "y" | "Y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_numerals() {
        assert!(numeric_in_range("7", 10));
        assert!(numeric_in_range("1", 1));
        assert!(numeric_in_range("10", 10));
        assert_eq!(parse_in_range("42", 50), Some(42));
    }

    #[test]
    fn rejects_zero_and_leading_zeros() {
        assert!(!numeric_in_range("0", 10));
        assert!(!numeric_in_range("01", 10));
        assert!(!numeric_in_range("007", 10));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(!numeric_in_range("11", 10));
        assert!(!numeric_in_range("51", 50));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(!numeric_in_range("", 10));
        assert!(!numeric_in_range("abc", 10));
        assert!(!numeric_in_range("3a", 10));
        assert!(!numeric_in_range(" 3", 10));
        assert!(!numeric_in_range("+3", 10));
        assert!(!numeric_in_range("-3", 10));
        assert!(!numeric_in_range("3.0", 10));
    }

    #[test]
    fn rejects_numerals_exceeding_usize() {
        assert!(!numeric_in_range("99999999999999999999999999", usize::MAX));
        assert_eq!(parse_in_range("99999999999999999999999999", 100), None);
    }

    #[test]
    fn numeric_filter_accepts_any_digits() {
        assert!(numeric("0"));
        assert!(numeric("007"));
        assert!(numeric("42"));
        assert!(!numeric(""));
        assert!(!numeric("4x"));
        assert!(!numeric("-4"));
    }

    #[test]
    fn yes_no_accepts_single_characters_only() {
        for accepted in ["y", "Y", "n", "N"] {
            assert!(yes_no(accepted));
        }
        for rejected in ["", "yes", "no", "yn", "x", " y"] {
            assert!(!yes_no(rejected));
        }
    }

    #[test]
    fn affirmative_is_yes_only() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative("yes"));
    }
}
