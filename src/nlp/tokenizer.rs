//! Word tokenization
//!
//! Lowercases the text, splits on every character that is not alphanumeric
//! or `_`, keeps tokens of two characters or more, and drops stopwords.

use super::stopwords::StopwordFilter;

/// Minimum token length, in characters
pub const MIN_TOKEN_CHARS: usize = 2;

/// Splits text units into vocabulary terms
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    stopwords: StopwordFilter,
}

impl WordTokenizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize `text` into lowercase terms, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|t| !self.stopwords.is_stopword(t))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(stopwords: &[&str]) -> WordTokenizer {
        WordTokenizer::new(StopwordFilter::from_list(stopwords))
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = tokenizer(&[]).tokenize("Cats, DOGS; and birds!");
        assert_eq!(tokens, vec!["cats", "dogs", "and", "birds"]);
    }

    #[test]
    fn test_drops_single_character_tokens() {
        let tokens = tokenizer(&[]).tokenize("A b cd 7 42");
        assert_eq!(tokens, vec!["cd", "42"]);
    }

    #[test]
    fn test_removes_stopwords() {
        let tokens = tokenizer(&["are", "the"]).tokenize("The cats are mammals");
        assert_eq!(tokens, vec!["cats", "mammals"]);
    }

    #[test]
    fn test_apostrophes_split_words() {
        let tokens = tokenizer(&[]).tokenize("don't stop");
        assert_eq!(tokens, vec!["don", "stop"]);
    }

    #[test]
    fn test_underscore_and_unicode_letters_are_word_characters() {
        let tokens = tokenizer(&[]).tokenize("snake_case Straße café");
        assert_eq!(tokens, vec!["snake_case", "straße", "café"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenizer(&[]).tokenize("").is_empty());
        assert!(tokenizer(&[]).tokenize("... !!! ??").is_empty());
    }
}
