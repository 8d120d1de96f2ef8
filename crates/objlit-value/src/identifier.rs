use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{XID_Start}_$][\p{XID_Continue}$]*$").unwrap());

/// Whether `s` can appear as a bare JavaScript property name.
///
/// Reserved words are deliberately not rejected: they are valid property
/// names in an object literal (`{ if: 1 }` parses).
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Whether `c` can start an identifier.
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Whether `c` can continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier() {
        assert!(is_identifier("someKey"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$el"));
        assert!(is_identifier("key2"));
    }

    #[test]
    fn test_unicode_identifier() {
        assert!(is_identifier("café"));
    }

    #[test]
    fn test_reserved_words_are_identifiers() {
        assert!(is_identifier("if"));
        assert!(is_identifier("new"));
    }

    #[test]
    fn test_rejects_non_identifiers() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("1key"));
        assert!(!is_identifier("some key"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a.b"));
    }
}
