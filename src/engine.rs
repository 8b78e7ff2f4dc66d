//! Document engine: the two public operations behind one initialized object.
//!
//! A [`DocumentEngine`] owns the read-only language resources (sentence
//! tokenizer, stopword list) and the default result sizes. Build it once at
//! startup, then share it by reference: every call is a pure function of its
//! arguments, so one engine can serve many threads.
//!
//! ```
//! use docdigest::DocumentEngine;
//!
//! let engine = DocumentEngine::english();
//! assert_eq!(engine.summarize("A. B. C."), "A. B. C.");
//! assert!(engine.answer("A. B. C.", "").is_empty());
//! ```

use rayon::prelude::*;

use crate::answer::{QuestionAnswerer, DEFAULT_ANSWER_COUNT, DEFAULT_SCORE_PRECISION};
use crate::config::spec::EngineSpec;
use crate::config::validation::ValidationEngine;
use crate::errors::{DigestError, Result};
use crate::nlp::segmenter::{segment, SentenceTokenizer, UnicodeSentenceTokenizer};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::Language;
use crate::summarizer::extractive::{ExtractiveSummarizer, DEFAULT_SUMMARY_SENTENCES};
use crate::types::{render_answers, Answer, Sentence, Summary};
use crate::vectorizer::TermVectorizer;

/// Defaults applied when a caller does not pass k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub summary_sentences: usize,
    pub answer_count: usize,
    pub score_precision: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            answer_count: DEFAULT_ANSWER_COUNT,
            score_precision: DEFAULT_SCORE_PRECISION,
        }
    }
}

/// Summarizer and question answerer sharing one set of language resources
#[derive(Debug, Clone)]
pub struct DocumentEngine<T = UnicodeSentenceTokenizer> {
    tokenizer: T,
    summarizer: ExtractiveSummarizer,
    answerer: QuestionAnswerer,
    settings: EngineSettings,
}

impl DocumentEngine {
    /// Engine with the bundled resources for `language` and default settings.
    pub fn new(language: Language) -> Self {
        Self::with_tokenizer(
            UnicodeSentenceTokenizer::new(language),
            TermVectorizer::new(StopwordFilter::new(language)),
        )
    }

    /// Engine for English text.
    pub fn english() -> Self {
        Self::new(Language::English)
    }

    /// Build an engine from a validated spec.
    ///
    /// Any error-severity diagnostic rejects the spec; warnings are logged
    /// (with the `tracing` feature) and otherwise ignored.
    pub fn from_spec(spec: &EngineSpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(DigestError::InvalidSpec(report));
        }

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(path = %warning.path, "{}", warning.message);
        }

        let language: Language = spec.language_code().parse()?;

        let mut stopwords = match &spec.stopwords.custom {
            Some(words) => StopwordFilter::from_list(words.as_slice()),
            None => StopwordFilter::new(language),
        };
        stopwords.add_stopwords(spec.stopwords.extra.as_slice());
        stopwords.remove_stopwords(spec.stopwords.remove.as_slice());

        let mut tokenizer = UnicodeSentenceTokenizer::new(language);
        tokenizer.add_abbreviations(spec.abbreviations.as_slice());

        let vectorizer = TermVectorizer::new(stopwords)
            .with_smoothing(spec.vectorizer.idf.unwrap_or_default())
            .with_normalization(spec.vectorizer.normalization.unwrap_or_default());

        let defaults = EngineSettings::default();
        let settings = EngineSettings {
            summary_sentences: spec.summary.sentences.unwrap_or(defaults.summary_sentences),
            answer_count: spec.answer.top_k.unwrap_or(defaults.answer_count),
            score_precision: spec.answer.precision.unwrap_or(defaults.score_precision),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            language = %language,
            abbreviations = tokenizer.num_abbreviations(),
            stopwords = vectorizer.tokenizer().stopwords().len(),
            "document engine initialized"
        );

        Ok(Self::with_tokenizer(tokenizer, vectorizer).with_settings(settings))
    }

    /// Parse, validate and build from a JSON spec.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_spec(&EngineSpec::from_json(json)?)
    }
}

impl Default for DocumentEngine {
    fn default() -> Self {
        Self::english()
    }
}

impl<T: SentenceTokenizer> DocumentEngine<T> {
    /// Engine with a caller-supplied sentence tokenizer.
    pub fn with_tokenizer(tokenizer: T, vectorizer: TermVectorizer) -> Self {
        Self {
            tokenizer,
            summarizer: ExtractiveSummarizer::new(vectorizer.clone()),
            answerer: QuestionAnswerer::new(vectorizer),
            settings: EngineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn vectorizer(&self) -> &TermVectorizer {
        self.summarizer.vectorizer()
    }

    /// Split `text` into sentences.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        segment(&self.tokenizer, text)
    }

    /// Summary text with the default number of sentences.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with(text, self.settings.summary_sentences)
    }

    /// Summary text with at most `k` sentences.
    pub fn summarize_with(&self, text: &str, k: usize) -> String {
        self.summary(text, k).text()
    }

    /// Structured summary with at most `k` sentences.
    pub fn summary(&self, text: &str, k: usize) -> Summary {
        self.summarizer.summarize(&self.tokenizer, text, k)
    }

    /// Answers with the default count, highest score first.
    pub fn answer(&self, text: &str, question: &str) -> Vec<Answer> {
        self.answer_with(text, question, self.settings.answer_count)
    }

    /// At most `k` answers, highest score first.
    pub fn answer_with(&self, text: &str, question: &str, k: usize) -> Vec<Answer> {
        self.answerer.answer(&self.tokenizer, text, question, k)
    }

    /// Render answers with the configured score precision.
    pub fn render_answers(&self, answers: &[Answer]) -> String {
        render_answers(answers, self.settings.score_precision)
    }
}

impl<T: SentenceTokenizer + Sync> DocumentEngine<T> {
    /// Summarize many independent documents in parallel.
    ///
    /// Output order matches input order.
    pub fn summarize_batch<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<String> {
        documents
            .par_iter()
            .map(|doc| self.summarize(doc.as_ref()))
            .collect()
    }

    /// Ask the same question of many independent documents in parallel.
    pub fn answer_batch<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
        question: &str,
    ) -> Vec<Vec<Answer>> {
        documents
            .par_iter()
            .map(|doc| self.answer(doc.as_ref(), question))
            .collect()
    }
}
