//! TF-IDF vectorization
//!
//! Converts an ordered corpus of text units into sparse term vectors that
//! share one vocabulary. The vocabulary and its IDF statistics are built from
//! scratch for every call and dropped with the returned [`Vectorized`].

pub mod term_vector;
pub mod tfidf;

pub use term_vector::TermVector;
pub use tfidf::{IdfSmoothing, Normalization, TermVectorizer};

use rustc_hash::FxHashMap;

/// Terms of one corpus, sorted lexicographically, with their IDF values
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
    index: FxHashMap<String, u32>,
}

impl Vocabulary {
    /// Build from `(term, idf)` pairs already sorted by term.
    pub(crate) fn from_sorted(pairs: Vec<(String, f64)>) -> Self {
        let mut terms = Vec::with_capacity(pairs.len());
        let mut idf = Vec::with_capacity(pairs.len());
        let mut index = FxHashMap::with_capacity_and_hasher(pairs.len(), Default::default());

        for (id, (term, value)) in pairs.into_iter().enumerate() {
            index.insert(term.clone(), id as u32);
            terms.push(term);
            idf.push(value);
        }

        Self { terms, idf, index }
    }

    /// Id of a term, if it is part of the vocabulary
    pub fn id(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    /// Term for an id
    pub fn term(&self, id: u32) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    /// IDF of a term id, zero for unknown ids
    pub fn idf(&self, id: u32) -> f64 {
        self.idf.get(id as usize).copied().unwrap_or(0.0)
    }

    /// Terms in id order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Output of one vectorization call
#[derive(Debug, Clone, Default)]
pub struct Vectorized {
    pub vocabulary: Vocabulary,
    /// One vector per corpus unit, in corpus order
    pub vectors: Vec<TermVector>,
}
