//! Sparse term vector representation
//!
//! A vector stores `(term_id, weight)` pairs sorted by term id. Keeping the
//! pairs sorted makes dot products a linear merge and fixes the order in
//! which floating point sums are accumulated, so repeated runs produce
//! bit-identical scores.

/// A sparse, non-negative weight vector over a [`super::Vocabulary`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions sorted by term id
    entries: Vec<(u32, f64)>,
    /// L2 norm of the vector
    norm: f64,
}

impl TermVector {
    /// Create a new empty (all-zero) vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from `(term_id, weight)` pairs.
    ///
    /// Pairs are sorted by term id, duplicate ids are summed, and zero or
    /// negative weights are dropped.
    pub fn from_entries(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_by_key(|&(id, _)| id);

        let mut merged: Vec<(u32, f64)> = Vec::with_capacity(entries.len());
        for (id, weight) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == id => *acc += weight,
                _ => merged.push((id, weight)),
            }
        }
        merged.retain(|&(_, w)| w > 0.0);

        let norm = Self::compute_norm(&merged);
        Self {
            entries: merged,
            norm,
        }
    }

    fn compute_norm(entries: &[(u32, f64)]) -> f64 {
        entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale the vector to unit length. All-zero vectors are left unchanged.
    pub fn normalized(mut self) -> Self {
        if self.norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= self.norm;
            }
            self.norm = Self::compute_norm(&self.entries);
        }
        self
    }

    /// Non-zero dimensions sorted by term id
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Weight of a term, zero when absent
    pub fn weight(&self, term_id: u32) -> f64 {
        self.entries
            .binary_search_by_key(&term_id, |&(id, _)| id)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Dot product over shared terms
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Cosine similarity, defined as 0 when either vector is all-zero.
    ///
    /// Clamped to [0, 1] so rounding can't push identical vectors past 1.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        (self.dot(other) / (self.norm * other.norm)).clamp(0.0, 1.0)
    }

    /// Number of non-zero dimensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector has no non-zero dimension
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }
}
