//! Aggregate-importance sentence selection
//!
//! Every sentence is vectorized against the document's own vocabulary and
//! scored by the sum of its TF-IDF weights. The k best sentences are
//! returned in their original order.

use crate::nlp::segmenter::{segment, SentenceTokenizer};
use crate::ranker::{rank, AggregateWeight, OutputOrder};
use crate::types::{Sentence, Summary, SummarySentence};
use crate::vectorizer::TermVectorizer;

/// Default number of sentences in a summary
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Extractive summarizer
#[derive(Debug, Clone, Default)]
pub struct ExtractiveSummarizer {
    vectorizer: TermVectorizer,
}

impl ExtractiveSummarizer {
    pub fn new(vectorizer: TermVectorizer) -> Self {
        Self { vectorizer }
    }

    pub fn vectorizer(&self) -> &TermVectorizer {
        &self.vectorizer
    }

    /// Summarize `text` with at most `k` sentences.
    ///
    /// A document with `k` sentences or fewer is returned whole and unscored.
    pub fn summarize<T: SentenceTokenizer + ?Sized>(
        &self,
        tokenizer: &T,
        text: &str,
        k: usize,
    ) -> Summary {
        let sentences = {
            trace_stage!("segment");
            segment(tokenizer, text)
        };
        self.select(sentences, k)
    }

    /// Select from already segmented sentences.
    pub fn select(&self, sentences: Vec<Sentence>, k: usize) -> Summary {
        if sentences.len() <= k {
            #[cfg(feature = "tracing")]
            tracing::debug!(sentences = sentences.len(), k, "document fits in summary, skipping ranking");

            return Summary {
                sentences: sentences
                    .into_iter()
                    .map(|sentence| SummarySentence {
                        sentence,
                        score: None,
                    })
                    .collect(),
            };
        }

        let vectorized = {
            trace_stage!("vectorize");
            let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
            self.vectorizer.vectorize(&texts)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            vocabulary = vectorized.vocabulary.len(),
            k,
            "ranking sentences by aggregate weight"
        );

        let ranked = {
            trace_stage!("rank");
            rank(&vectorized.vectors, &AggregateWeight, k, OutputOrder::Document)
        };

        let mut slots: Vec<Option<Sentence>> = sentences.into_iter().map(Some).collect();
        let selected = ranked
            .into_iter()
            .filter_map(|r| {
                slots[r.index].take().map(|sentence| SummarySentence {
                    sentence,
                    score: Some(r.score),
                })
            })
            .collect();

        Summary {
            sentences: selected,
        }
    }
}
