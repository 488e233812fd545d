//! Tokenizer and suffix-stripping stemmer
//!
//! Crude on purpose: one trailing ing/ed/ly/s is removed, nothing else.
//! "nerves" → "nerve", "tired" → "tir", "success" → "succes".

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII word characters only; anything else separates tokens
    static ref RE_NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_]+").unwrap();

    static ref RE_SUFFIX: Regex = Regex::new(r"(ing|ed|ly|s)$").unwrap();
}

/// Lowercase a word and strip one trailing suffix
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    RE_SUFFIX.replace(&lower, "").into_owned()
}

/// Split text into normalized tokens
///
/// Empty fragments (leading/trailing separators, words that were only a
/// suffix) are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_NON_WORD
        .split(&lower)
        .map(stem)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_each_suffix() {
        assert_eq!(stem("crying"), "cry");
        assert_eq!(stem("annoyed"), "annoy");
        assert_eq!(stem("friendly"), "friend");
        assert_eq!(stem("nerves"), "nerve");
    }

    #[test]
    fn test_strips_only_once() {
        assert_eq!(stem("feelings"), "feeling");
        assert_eq!(stem("success"), "succes");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(stem("HAPPY"), "happy");
        assert_eq!(stem("LOL"), "lol");
    }

    #[test]
    fn test_collisions_are_accepted() {
        // unrelated words may collapse to the same stem
        assert_eq!(stem("scared"), stem("scars"));
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(tokenize("So tired... can't sleep!"), vec!["so", "tir", "can", "t", "sleep"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!  ").is_empty());
    }

    #[test]
    fn test_tokenize_non_ascii_separates() {
        assert_eq!(tokenize("café😊lol"), vec!["caf", "lol"]);
    }
}
