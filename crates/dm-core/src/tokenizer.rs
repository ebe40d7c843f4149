use regex::Regex;
use std::sync::LazyLock;

use crate::constants::MIN_TOKEN_CHARS;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\b\w{{{MIN_TOKEN_CHARS},}}\b")).unwrap());

/// Tokenize text into lowercase words of at least two word characters.
/// Punctuation splits words, so "don't" yields only "don".
/// No stemming or stop-word removal; common words are damped by IDF.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenize() {
        let tokens = tokenize("Hello, world!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_single_characters_dropped() {
        let tokens = tokenize("I am a cat");
        assert_eq!(tokens, vec!["am", "cat"]);
    }

    #[test]
    fn test_apostrophe_splits() {
        let tokens = tokenize("Don't stop!");
        assert_eq!(tokens, vec!["don", "stop"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn test_punctuation_only() {
        assert!(tokenize("?! ... --").is_empty());
    }

    #[test]
    fn test_numbers_and_underscores_preserved() {
        let tokens = tokenize("test 123 snake_case 7");
        assert_eq!(tokens, vec!["test", "123", "snake_case"]);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let tokens = tokenize("the cat and the hat");
        assert_eq!(tokens, vec!["the", "cat", "and", "the", "hat"]);
    }

    #[test]
    fn test_unicode_words() {
        let tokens = tokenize("Café MÜNCHEN");
        assert_eq!(tokens, vec!["café", "münchen"]);
    }

    #[test]
    fn test_no_stemming() {
        let tokens = tokenize("running runs ran runner");
        assert_eq!(tokens, vec!["running", "runs", "ran", "runner"]);
    }
}
