// Word-level tokenizer.
//
// Splits on whitespace and separates punctuation from words, so "mat."
// becomes ["mat", "."] and “Cats” becomes ["“", "Cats", "”"]. Any character
// that is not a letter, digit or combining mark counts as punctuation,
// including typographic quotes, ellipses and dashes. Apostrophes inside a
// word are kept ("don't" stays one token) and curly apostrophes are
// normalized to ASCII so contractions match the stopword list.

use regex::Regex;

/// A word (allowing internal apostrophes) or a run of punctuation.
const TOKEN_PATTERN: &str =
    r"[\p{L}\p{N}\p{M}]+(?:['’][\p{L}\p{N}\p{M}]+)*|[^\p{L}\p{N}\p{M}\s]+";

#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TOKEN_PATTERN).expect("static token pattern"),
        }
    }

    /// Split text into tokens, preserving order and case.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().replace('’', "'"))
            .collect()
    }
}

/// True when the token has no letters or digits at all.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_punctuation_from_words() {
        let t = Tokenizer::new();
        assert_eq!(
            t.tokenize("The cat sat on the mat."),
            vec!["The", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_keeps_internal_apostrophes() {
        let t = Tokenizer::new();
        assert_eq!(t.tokenize("Don't stop!!"), vec!["Don't", "stop", "!!"]);
    }

    #[test]
    fn test_hyphens_and_unicode() {
        let t = Tokenizer::new();
        assert_eq!(
            t.tokenize("state-of-the-art café"),
            vec!["state", "-", "of", "-", "the", "-", "art", "café"]
        );
    }

    #[test]
    fn test_typographic_punctuation_is_split() {
        let t = Tokenizer::new();
        assert_eq!(
            t.tokenize("“Cats” sat… — on"),
            vec!["“", "Cats", "”", "sat", "…", "—", "on"]
        );
    }

    #[test]
    fn test_curly_apostrophe_normalized() {
        let t = Tokenizer::new();
        assert_eq!(t.tokenize("It’s the cat’s"), vec!["It's", "the", "cat's"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let t = Tokenizer::new();
        assert!(t.tokenize("").is_empty());
        assert!(t.tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("--"));
        assert!(is_punctuation("“"));
        assert!(is_punctuation("—…"));
        assert!(!is_punctuation("a."));
        assert!(!is_punctuation(""));
    }
}
