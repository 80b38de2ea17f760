//! Wordlist name validation.
//!
//! Wordlist names end up inside filesystem paths, so only a conservative
//! ASCII alphabet is accepted and the whole name has to match.

use crate::error::{Result, WordlistError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Anchored pattern every wordlist name must match in full.
pub const WORDLIST_NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

static RE_WORDLIST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORDLIST_NAME_PATTERN).expect("valid regex"));

pub fn is_valid_wordlist_name(name: &str) -> bool {
    RE_WORDLIST_NAME.is_match(name)
}

/// A validated wordlist name such as `en_8k`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordlistName(String);

impl WordlistName {
    pub fn new(name: &str) -> Result<Self> {
        if is_valid_wordlist_name(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(WordlistError::InvalidName(name.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WordlistName {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for WordlistName {
    type Error = WordlistError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for WordlistName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordlistName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_wordlist_name("de"));
        assert!(is_valid_wordlist_name("DE"));
        assert!(is_valid_wordlist_name("vb"));
        assert!(is_valid_wordlist_name("8k"));
        assert!(is_valid_wordlist_name("original"));
        assert!(is_valid_wordlist_name("with_underscore"));
        assert!(is_valid_wordlist_name("u"));
        assert!(is_valid_wordlist_name("with-hyphen"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_wordlist_name("with space"));
        assert!(!is_valid_wordlist_name("\"with-quotation-marks\""));
        assert!(!is_valid_wordlist_name("'with-quotation-marks'"));
        assert!(!is_valid_wordlist_name("with.dot"));
        assert!(!is_valid_wordlist_name("with/slash"));
        assert!(!is_valid_wordlist_name("")); // Empty
    }

    #[test]
    fn test_partial_matches_rejected() {
        // A valid prefix or suffix is not enough
        assert!(!is_valid_wordlist_name("en_8k/../../etc"));
        assert!(!is_valid_wordlist_name("../en_8k"));
        assert!(!is_valid_wordlist_name("en_8k\n"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_wordlist_name("straße"));
        assert!(!is_valid_wordlist_name("日本"));
        assert!(!is_valid_wordlist_name("de\u{00a0}"));
    }

    #[test]
    fn test_wordlist_name_roundtrip() {
        let name: WordlistName = "en_8k".parse().unwrap();
        assert_eq!(name.as_str(), "en_8k");
        assert_eq!(name.to_string(), "en_8k");
    }

    #[test]
    fn test_wordlist_name_rejects_traversal() {
        let err = WordlistName::try_from("../../tmp").unwrap_err();
        assert!(err.to_string().starts_with("Not a valid wordlist name"));
        assert!(err.to_string().contains("../../tmp"));
    }
}
