//! # docdigest
//!
//! Extractive summarization and sentence-level question answering over a
//! single document.
//!
//! Text is split into sentences, every sentence becomes a TF-IDF vector over a
//! vocabulary built from that document alone, and the vectors are ranked:
//!
//! - **Summaries** keep the k sentences with the largest total weight, in
//!   reading order.
//! - **Answers** keep the k sentences closest to the question by cosine
//!   similarity, best first. The question is vectorized together with the
//!   sentences so both share one vocabulary.
//!
//! ```
//! use docdigest::DocumentEngine;
//!
//! let engine = DocumentEngine::english();
//! let text = "Cats are mammals. Dogs are mammals. The stock market fell today.";
//!
//! let answers = engine.answer(text, "Which animals are mammals?");
//! assert_eq!(answers[0].text, "Cats are mammals.");
//! assert_eq!(answers[1].text, "Dogs are mammals.");
//! ```
//!
//! Both operations are pure functions of their input. Language resources are
//! loaded once into a [`DocumentEngine`] and read-only afterwards.

/// Enter a tracing span for a processing stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("docdigest_stage", stage = $name).entered();
    };
}

pub mod answer;
pub mod config;
pub mod engine;
pub mod errors;
pub mod nlp;
pub mod ranker;
pub mod summarizer;
pub mod types;
pub mod vectorizer;

pub use answer::QuestionAnswerer;
pub use config::EngineSpec;
pub use engine::{DocumentEngine, EngineSettings};
pub use errors::{DigestError, Result};
pub use nlp::segmenter::{segment, SentenceTokenizer, UnicodeSentenceTokenizer};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::Language;
pub use ranker::{rank, OutputOrder, RankedUnit};
pub use summarizer::ExtractiveSummarizer;
pub use types::{render_answers, Answer, Sentence, Summary, SummarySentence};
pub use vectorizer::{IdfSmoothing, Normalization, TermVector, TermVectorizer};
