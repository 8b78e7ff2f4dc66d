//! TF-IDF weighting
//!
//! Weight(term, unit) = TF × IDF where TF is the raw count of the term in the
//! unit and IDF follows one of two conventions:
//!
//! | [`IdfSmoothing`] | formula                         |
//! |------------------|---------------------------------|
//! | `Smooth`         | `ln((1 + n) / (1 + df)) + 1`    |
//! | `Unsmoothed`     | `ln(n / df) + 1`                |
//!
//! `n` is the number of units in the corpus and `df` the number of units
//! containing the term. A vocabulary term always has `df >= 1`, so neither
//! formula divides by zero, and both give IDF >= 1: a term present in every
//! unit keeps weight 1 instead of vanishing. A single-unit corpus yields
//! IDF = 1 for every term under both conventions.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::{TermVector, Vectorized, Vocabulary};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WordTokenizer;

/// IDF smoothing convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfSmoothing {
    /// `ln((1 + n) / (1 + df)) + 1`, as if one extra unit held every term
    #[default]
    Smooth,
    /// `ln(n / df) + 1`
    Unsmoothed,
}

impl IdfSmoothing {
    /// IDF for a term found in `df` of `n` units.
    pub fn idf(&self, n: usize, df: usize) -> f64 {
        let n = n as f64;
        let df = df.max(1) as f64;
        match self {
            Self::Smooth => ((1.0 + n) / (1.0 + df)).ln() + 1.0,
            Self::Unsmoothed => (n.max(df) / df).ln() + 1.0,
        }
    }
}

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Raw TF × IDF weights
    #[default]
    None,
    /// Each vector scaled to unit L2 length
    L2,
}

/// Builds TF-IDF vectors over a per-call vocabulary
#[derive(Debug, Clone, Default)]
pub struct TermVectorizer {
    tokenizer: WordTokenizer,
    smoothing: IdfSmoothing,
    normalization: Normalization,
}

impl TermVectorizer {
    /// Create a vectorizer with the given stopwords and default weighting
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer: WordTokenizer::new(stopwords),
            smoothing: IdfSmoothing::default(),
            normalization: Normalization::default(),
        }
    }

    pub fn with_smoothing(mut self, smoothing: IdfSmoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    pub fn smoothing(&self) -> IdfSmoothing {
        self.smoothing
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Vectorize `corpus`, one vector per unit, over a vocabulary derived
    /// from exactly these units.
    pub fn vectorize<S: AsRef<str>>(&self, corpus: &[S]) -> Vectorized {
        let tokenized: Vec<Vec<String>> = corpus
            .iter()
            .map(|unit| self.tokenizer.tokenize(unit.as_ref()))
            .collect();

        // Document frequency, sorted by term so ids follow lexicographic order
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: FxHashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let n = corpus.len();
        let vocabulary = Vocabulary::from_sorted(
            df.into_iter()
                .map(|(term, count)| (term.to_string(), self.smoothing.idf(n, count)))
                .collect(),
        );

        let vectors = tokenized
            .iter()
            .map(|tokens| self.weigh(tokens, &vocabulary))
            .collect();

        Vectorized {
            vocabulary,
            vectors,
        }
    }

    fn weigh(&self, tokens: &[String], vocabulary: &Vocabulary) -> TermVector {
        let mut tf: FxHashMap<u32, u32> = FxHashMap::default();
        for token in tokens {
            if let Some(id) = vocabulary.id(token) {
                *tf.entry(id).or_insert(0) += 1;
            }
        }

        let entries = tf
            .into_iter()
            .map(|(id, count)| (id, count as f64 * vocabulary.idf(id)))
            .collect();
        let vector = TermVector::from_entries(entries);

        match self.normalization {
            Normalization::None => vector,
            Normalization::L2 => vector.normalized(),
        }
    }
}
