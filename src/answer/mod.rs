//! Sentence-level question answering
//!
//! The question is vectorized in the same call as the document's sentences,
//! so both share one vocabulary and one set of IDF statistics. Sentences are
//! then ranked by cosine similarity to the question's vector.

use crate::nlp::segmenter::{segment, SentenceTokenizer};
use crate::ranker::{rank, OutputOrder, QuerySimilarity};
use crate::types::{Answer, Sentence};
use crate::vectorizer::TermVectorizer;

/// Default number of answers
pub const DEFAULT_ANSWER_COUNT: usize = 3;

/// Default number of decimals when rendering scores
pub const DEFAULT_SCORE_PRECISION: usize = 3;

/// Ranks document sentences against a free-text question
#[derive(Debug, Clone, Default)]
pub struct QuestionAnswerer {
    vectorizer: TermVectorizer,
}

impl QuestionAnswerer {
    pub fn new(vectorizer: TermVectorizer) -> Self {
        Self { vectorizer }
    }

    pub fn vectorizer(&self) -> &TermVectorizer {
        &self.vectorizer
    }

    /// Return up to `k` sentences of `text` most similar to `question`,
    /// highest score first.
    ///
    /// Empty or whitespace-only text or question yields no answers.
    pub fn answer<T: SentenceTokenizer + ?Sized>(
        &self,
        tokenizer: &T,
        text: &str,
        question: &str,
        k: usize,
    ) -> Vec<Answer> {
        if text.trim().is_empty() || question.trim().is_empty() {
            return Vec::new();
        }

        let sentences = {
            trace_stage!("segment");
            segment(tokenizer, text)
        };
        self.rank_sentences(&sentences, question, k)
    }

    /// Rank already segmented sentences against `question`.
    pub fn rank_sentences(&self, sentences: &[Sentence], question: &str, k: usize) -> Vec<Answer> {
        if sentences.is_empty() || question.trim().is_empty() {
            return Vec::new();
        }

        let vectorized = {
            trace_stage!("vectorize");
            let mut corpus: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
            corpus.push(question);
            self.vectorizer.vectorize(&corpus)
        };

        let Some((query, candidates)) = vectorized.vectors.split_last() else {
            return Vec::new();
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = candidates.len(),
            vocabulary = vectorized.vocabulary.len(),
            query_terms = query.len(),
            k,
            "ranking sentences by query similarity"
        );

        let ranked = {
            trace_stage!("rank");
            rank(candidates, &QuerySimilarity::new(query), k, OutputOrder::Score)
        };

        ranked
            .into_iter()
            .map(|r| Answer {
                index: r.index,
                text: sentences[r.index].text.clone(),
                score: r.score,
            })
            .collect()
    }
}
