//! Small string predicates and sequence helpers.
//!
//! These back the argument validation and branch-name assembly in the
//! command layer. They are deliberately strict: membership is exact, truthy
//! tokens are a fixed set, and numbers follow a plain decimal grammar with no
//! exponents or separators.

/// Tokens recognized as "true" in configuration and arguments.
const TRUTHY_TOKENS: &[&str] = &["true", "TRUE", "yes", "YES", "y", "Y", "1"];

/// True when the string is empty or whitespace-only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Complement of [`is_blank`].
pub fn is_present(s: &str) -> bool {
    !is_blank(s)
}

/// True when `s` is a decimal number: optional leading sign, digits, and
/// optionally a single decimal point followed by more digits.
///
/// No exponents, no thousands separators. `"5."` and `".5"` are rejected
/// (digits are required on both sides of the point).
pub fn is_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

/// True when `s` is exactly one of the truthy tokens (case-sensitive).
///
/// Any other string, including `"True"` or `"on"`, is false.
pub fn is_truthy(s: &str) -> bool {
    TRUTHY_TOKENS.contains(&s)
}

/// Join `items` with `separator` between consecutive elements.
///
/// Zero items yields the empty string; one item yields it unchanged.
pub fn join<S: AsRef<str>>(separator: &str, items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}

/// True when `needle` exactly equals some element of `haystack`.
///
/// A blank needle or empty haystack is false, not an error. Substring
/// matches do not count.
pub fn includes<S: AsRef<str>>(needle: &str, haystack: &[S]) -> bool {
    is_present(needle) && haystack.iter().any(|item| item.as_ref() == needle)
}

/// Produce one line of `prefix` + item per element, order preserved.
///
/// Used for protected-branch listings and other enumerations.
pub fn prefixed_lines<S: AsRef<str>>(prefix: &str, items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{prefix}{}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("true")]
    #[case("TRUE")]
    #[case("yes")]
    #[case("YES")]
    #[case("y")]
    #[case("Y")]
    #[case("1")]
    fn test_truthy_tokens(#[case] token: &str) {
        assert!(is_truthy(token));
    }

    #[rstest]
    #[case("True")]
    #[case("false")]
    #[case("on")]
    #[case("10")]
    #[case("")]
    fn test_non_truthy_strings(#[case] s: &str) {
        assert!(!is_truthy(s));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("x")]
    #[case("  x ")]
    fn test_blank_present_complement(#[case] s: &str) {
        assert_eq!(is_blank(s), !is_present(s));
    }

    #[rstest]
    #[case("0", true)]
    #[case("42", true)]
    #[case("-7", true)]
    #[case("+7", true)]
    #[case("3.14", true)]
    #[case("-0.5", true)]
    #[case("5.", false)]
    #[case(".5", false)]
    #[case("1e3", false)]
    #[case("1,000", false)]
    #[case("1.2.3", false)]
    #[case("-", false)]
    #[case("", false)]
    fn test_is_numeric(#[case] s: &str, #[case] expected: bool) {
        assert_eq!(is_numeric(s), expected, "input: {s:?}");
    }

    #[test]
    fn test_join() {
        let empty: [&str; 0] = [];
        assert_eq!(join("-", &empty), "");
        assert_eq!(join("-", &["a"]), "a");
        assert_eq!(join("-", &["a", "b", "c"]), "a-b-c");
        assert_eq!(join("", &["a", "b"]), "ab");
    }

    #[test]
    fn test_includes_exact_match_only() {
        let empty: [&str; 0] = [];
        assert!(!includes("x", &empty));
        assert!(!includes("", &["a", "b"]));
        assert!(includes("x", &["x", "y"]));
        // Substring is not membership
        assert!(!includes("x", &["xy", "y"]));
    }

    #[test]
    fn test_prefixed_lines() {
        let empty: [&str; 0] = [];
        assert_eq!(prefixed_lines("- ", &empty), "");
        assert_eq!(prefixed_lines("- ", &["main"]), "- main");
        assert_eq!(
            prefixed_lines("  ", &["main", "master"]),
            "  main\n  master"
        );
    }
}
