//! Stopword filtering
//!
//! Per-language stopword lists come from the `stop-words` crate. A filter can
//! also be built from a custom list, and either kind can be extended or
//! pruned before it is handed to the vectorizer.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use super::Language;

/// Function words that never enter a vocabulary
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase entries
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Bundled list for `language`
    pub fn new(language: Language) -> Self {
        let words = get(Self::bundled_list(language))
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Filter that keeps every token
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Filter holding exactly `words`, lowercased
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        self.words
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for w in words {
            self.words.remove(&w.as_ref().to_lowercase());
        }
    }

    /// `token` must already be lowercase, as the word tokenizer produces it.
    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn bundled_list(language: Language) -> LANGUAGE {
        match language {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Danish => LANGUAGE::Danish,
            Language::Finnish => LANGUAGE::Finnish,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Turkish => LANGUAGE::Turkish,
        }
    }
}
