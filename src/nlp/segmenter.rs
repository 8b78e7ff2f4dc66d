//! Sentence segmentation
//!
//! Boundaries come from a [`SentenceTokenizer`]. The bundled
//! [`UnicodeSentenceTokenizer`] applies the Unicode UAX #29 sentence rules and
//! then rejoins fragments that were split after a known abbreviation, so
//! "Dr. Smith arrived." stays one sentence.
//!
//! The tokenizer is a language resource: build it once at startup and pass it
//! by reference to every call.

use std::path::Path;

use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

use super::Language;
use crate::errors::{DigestError, Result};
use crate::types::Sentence;

/// Source of sentence boundaries.
///
/// Implementations return `(byte_offset, fragment)` spans in document order.
/// Fragments may carry surrounding whitespace; [`segment`] trims them and
/// drops the empty ones.
pub trait SentenceTokenizer {
    fn tokenize_sentences<'t>(&self, text: &'t str) -> Vec<(usize, &'t str)>;
}

/// Split `text` into sentences with contiguous indices starting at 0.
pub fn segment<T: SentenceTokenizer + ?Sized>(tokenizer: &T, text: &str) -> Vec<Sentence> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    for (offset, fragment) in tokenizer.tokenize_sentences(text) {
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            continue;
        }
        let start = offset + (fragment.len() - fragment.trim_start().len());
        let end = start + trimmed.len();
        let index = sentences.len();
        sentences.push(Sentence::new(trimmed, start, end, index));
    }
    sentences
}

/// UAX #29 sentence boundaries with abbreviation repair
#[derive(Debug, Clone)]
pub struct UnicodeSentenceTokenizer {
    /// Lowercase abbreviations without their final period ("dr", "e.g")
    abbreviations: FxHashSet<String>,
}

impl Default for UnicodeSentenceTokenizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl UnicodeSentenceTokenizer {
    /// Create a tokenizer with the bundled abbreviations for `language`.
    pub fn new(language: Language) -> Self {
        let abbreviations = Self::bundled_abbreviations(language)
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self { abbreviations }
    }

    /// Create a tokenizer that only applies the UAX #29 rules.
    pub fn without_abbreviations() -> Self {
        Self {
            abbreviations: FxHashSet::default(),
        }
    }

    /// Load abbreviations from a file with one entry per line.
    ///
    /// Blank lines and lines starting with `#` are ignored. A trailing period
    /// on an entry is optional.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| DigestError::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let mut tokenizer = Self::without_abbreviations();
        let entries: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        tokenizer.add_abbreviations(&entries);
        Ok(tokenizer)
    }

    /// Register additional abbreviations ("approx", "Fig.").
    pub fn add_abbreviations<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let key = Self::normalize(word.as_ref());
            if key.chars().count() > 1 {
                self.abbreviations.insert(key);
            }
        }
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        let key = Self::normalize(word);
        key.chars().count() > 1 && self.abbreviations.contains(&key)
    }

    pub fn num_abbreviations(&self) -> usize {
        self.abbreviations.len()
    }

    fn normalize(word: &str) -> String {
        word.trim()
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .trim_end_matches('.')
            .to_lowercase()
    }

    /// `true` when the fragment's final word is an abbreviation like "Dr."
    fn ends_with_abbreviation(&self, fragment: &str) -> bool {
        let trimmed = fragment.trim_end();
        if !trimmed.ends_with('.') {
            return false;
        }
        match trimmed.split_whitespace().next_back() {
            Some(word) => self.is_abbreviation(word),
            None => false,
        }
    }

    fn bundled_abbreviations(language: Language) -> &'static [&'static str] {
        match language {
            Language::English => &[
                "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e",
                "inc", "ltd", "corp", "co", "fig", "figs", "vol", "approx", "dept", "est", "gen",
                "gov", "sen", "rep", "rev", "capt", "col", "lt", "sgt", "jan", "feb", "aug",
                "sept", "oct", "nov", "dec", "a.m", "p.m", "u.s", "u.k", "cf", "al",
            ],
            Language::German => &[
                "dr", "prof", "nr", "str", "ca", "bzw", "usw", "vgl", "z.b", "d.h", "u.a", "evtl",
                "ggf", "inkl", "bzgl", "hr", "fr", "jh",
            ],
            Language::French => &[
                "mme", "mlle", "dr", "pr", "etc", "cf", "p.ex", "env", "av", "bd", "ex",
            ],
            Language::Spanish => &[
                "sr", "sra", "srta", "dr", "dra", "ud", "uds", "etc", "p.ej", "pág", "aprox",
                "av", "dto",
            ],
            Language::Italian => &["sig", "sigg", "dott", "prof", "ecc", "ing", "avv"],
            Language::Portuguese => &["sr", "sra", "dr", "dra", "etc", "pág", "av"],
            Language::Dutch => &["dhr", "mevr", "dr", "prof", "bijv", "enz", "o.a", "m.b.t"],
            _ => &[],
        }
    }
}

impl SentenceTokenizer for UnicodeSentenceTokenizer {
    fn tokenize_sentences<'t>(&self, text: &'t str) -> Vec<(usize, &'t str)> {
        let mut spans = Vec::new();
        let mut pending: Option<usize> = None;
        let mut fragments = text.split_sentence_bound_indices().peekable();

        while let Some((offset, fragment)) = fragments.next() {
            let start = pending.unwrap_or(offset);
            let end = offset + fragment.len();

            if fragments.peek().is_some() && self.ends_with_abbreviation(fragment) {
                pending = Some(start);
                continue;
            }

            pending = None;
            spans.push((start, &text[start..end]));
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_single_letter_sentences() {
        let sentences = segment(&UnicodeSentenceTokenizer::default(), "A. B. C.");
        assert_eq!(texts(&sentences), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_indices_are_contiguous() {
        let text = "Cats are mammals. Dogs are mammals! Is the market open? Yes.";
        let sentences = segment(&UnicodeSentenceTokenizer::default(), text);
        assert_eq!(sentences.len(), 4);
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  First one.   Second one.  ";
        let sentences = segment(&UnicodeSentenceTokenizer::default(), text);
        assert_eq!(texts(&sentences), vec!["First one.", "Second one."]);
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let tokenizer = UnicodeSentenceTokenizer::default();
        assert!(segment(&tokenizer, "").is_empty());
        assert!(segment(&tokenizer, "  \n\t ").is_empty());
    }

    #[test]
    fn test_abbreviation_does_not_end_sentence() {
        let text = "Dr. Smith examined the patient. She recovered quickly.";
        let sentences = segment(&UnicodeSentenceTokenizer::default(), text);
        assert_eq!(
            texts(&sentences),
            vec!["Dr. Smith examined the patient.", "She recovered quickly."]
        );
    }

    #[test]
    fn test_without_abbreviations_splits_after_title() {
        let text = "Dr. Smith examined the patient.";
        let sentences = segment(&UnicodeSentenceTokenizer::without_abbreviations(), text);
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_trailing_abbreviation_keeps_last_sentence() {
        let text = "We saw cats, dogs, etc.";
        let sentences = segment(&UnicodeSentenceTokenizer::default(), text);
        assert_eq!(texts(&sentences), vec!["We saw cats, dogs, etc."]);
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = segment(&UnicodeSentenceTokenizer::default(), "just a fragment");
        assert_eq!(texts(&sentences), vec!["just a fragment"]);
    }

    #[test]
    fn test_is_abbreviation_normalizes() {
        let tokenizer = UnicodeSentenceTokenizer::default();
        assert!(tokenizer.is_abbreviation("Dr."));
        assert!(tokenizer.is_abbreviation("(e.g."));
        assert!(!tokenizer.is_abbreviation("A."));
        assert!(!tokenizer.is_abbreviation("mammals."));
    }

    #[test]
    fn test_single_letters_cannot_be_registered() {
        let mut tokenizer = UnicodeSentenceTokenizer::without_abbreviations();
        tokenizer.add_abbreviations(&["A.", "approx."]);
        assert_eq!(tokenizer.num_abbreviations(), 1);
        assert!(tokenizer.is_abbreviation("approx."));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# house style").unwrap();
        writeln!(file, "approx.").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Dept").unwrap();
        file.flush().unwrap();

        let tokenizer = UnicodeSentenceTokenizer::from_file(file.path()).unwrap();
        assert_eq!(tokenizer.num_abbreviations(), 2);
        assert!(tokenizer.is_abbreviation("dept."));
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let err = UnicodeSentenceTokenizer::from_file("/nonexistent/abbreviations.txt").unwrap_err();
        assert!(matches!(err, DigestError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_fake_tokenizer_through_trait() {
        struct LineTokenizer;

        impl SentenceTokenizer for LineTokenizer {
            fn tokenize_sentences<'t>(&self, text: &'t str) -> Vec<(usize, &'t str)> {
                let mut offset = 0;
                text.split_inclusive('\n')
                    .map(|line| {
                        let span = (offset, line);
                        offset += line.len();
                        span
                    })
                    .collect()
            }
        }

        let text = "one\n\ntwo three\n";
        let sentences = segment(&LineTokenizer, text);
        assert_eq!(texts(&sentences), vec!["one", "two three"]);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(&text[sentences[1].start..sentences[1].end], "two three");
    }
}
