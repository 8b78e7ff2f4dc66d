//! Top-k selection over scored term vectors
//!
//! Both the summarizer and the question answerer follow the same pattern:
//! score every unit, keep the k best, then put them in an output order. The
//! scoring function is a [`UnitScorer`]; the output order is an
//! [`OutputOrder`].
//!
//! Selection always ranks by descending score with ties broken by the lower
//! index, using `f64::total_cmp`, so the result is fully deterministic.

use serde::Serialize;

use crate::vectorizer::TermVector;

/// Scores one unit's vector.
pub trait UnitScorer {
    fn score(&self, vector: &TermVector) -> f64;
}

/// Aggregate importance: the sum of a unit's term weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateWeight;

impl UnitScorer for AggregateWeight {
    #[inline]
    fn score(&self, vector: &TermVector) -> f64 {
        vector.sum()
    }
}

/// Cosine similarity to a fixed query vector.
#[derive(Debug, Clone, Copy)]
pub struct QuerySimilarity<'q> {
    query: &'q TermVector,
}

impl<'q> QuerySimilarity<'q> {
    pub fn new(query: &'q TermVector) -> Self {
        Self { query }
    }
}

impl UnitScorer for QuerySimilarity<'_> {
    #[inline]
    fn score(&self, vector: &TermVector) -> f64 {
        vector.cosine_similarity(self.query)
    }
}

/// Order of the selected units in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOrder {
    /// Ascending index (reading order)
    Document,
    /// Descending score, ties by ascending index
    Score,
}

/// A selected unit and its score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedUnit {
    pub index: usize,
    pub score: f64,
}

/// Select up to `k` of `vectors` by `scorer` and arrange them in `order`.
///
/// `k` larger than the number of vectors selects everything; `k == 0`
/// selects nothing.
pub fn rank<S: UnitScorer + ?Sized>(
    vectors: &[TermVector],
    scorer: &S,
    k: usize,
    order: OutputOrder,
) -> Vec<RankedUnit> {
    let scores: Vec<f64> = vectors.iter().map(|v| scorer.score(v)).collect();
    select_top_k(&scores, k, order)
}

/// Select up to `k` indices of `scores` and arrange them in `order`.
pub fn select_top_k(scores: &[f64], k: usize, order: OutputOrder) -> Vec<RankedUnit> {
    let k = k.min(scores.len());
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedUnit> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| RankedUnit { index, score })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked.truncate(k);

    if order == OutputOrder::Document {
        ranked.sort_by_key(|r| r.index);
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(ranked: &[RankedUnit]) -> Vec<usize> {
        ranked.iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_score_order_descending() {
        let ranked = select_top_k(&[0.1, 0.9, 0.5], 3, OutputOrder::Score);
        assert_eq!(indices(&ranked), vec![1, 2, 0]);
        assert_eq!(ranked[0].score, 0.9);
    }

    #[test]
    fn test_document_order_after_selection() {
        let ranked = select_top_k(&[0.1, 0.9, 0.5, 0.7], 2, OutputOrder::Document);
        assert_eq!(indices(&ranked), vec![1, 3]);
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        let ranked = select_top_k(&[0.5, 0.7, 0.5, 0.7], 3, OutputOrder::Score);
        assert_eq!(indices(&ranked), vec![1, 3, 0]);

        let ranked = select_top_k(&[0.5, 0.5, 0.5], 2, OutputOrder::Document);
        assert_eq!(indices(&ranked), vec![0, 1]);
    }

    #[test]
    fn test_k_is_clamped() {
        assert_eq!(select_top_k(&[0.3, 0.2], 10, OutputOrder::Score).len(), 2);
        assert!(select_top_k(&[0.3, 0.2], 0, OutputOrder::Score).is_empty());
        assert!(select_top_k(&[], 3, OutputOrder::Document).is_empty());
    }

    #[test]
    fn test_aggregate_weight_mode() {
        let vectors = vec![
            TermVector::from_entries(vec![(0, 1.0)]),
            TermVector::from_entries(vec![(0, 1.0), (1, 2.0)]),
            TermVector::new(),
        ];
        let ranked = rank(&vectors, &AggregateWeight, 2, OutputOrder::Document);
        assert_eq!(indices(&ranked), vec![0, 1]);
        assert_eq!(ranked[1].score, 3.0);
    }

    #[test]
    fn test_query_similarity_mode() {
        let query = TermVector::from_entries(vec![(0, 1.0), (1, 1.0)]);
        let vectors = vec![
            TermVector::from_entries(vec![(2, 1.0)]),
            TermVector::from_entries(vec![(0, 1.0)]),
            TermVector::from_entries(vec![(0, 1.0), (1, 1.0)]),
        ];
        let ranked = rank(&vectors, &QuerySimilarity::new(&query), 3, OutputOrder::Score);

        assert_eq!(indices(&ranked), vec![2, 1, 0]);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_self_similarity_is_the_ceiling() {
        let query = TermVector::from_entries(vec![(0, 1.3), (4, 0.2), (7, 2.0)]);
        let mut vectors = vec![
            TermVector::from_entries(vec![(0, 1.0), (7, 1.0)]),
            TermVector::from_entries(vec![(4, 5.0)]),
            TermVector::from_entries(vec![(9, 1.0)]),
        ];
        vectors.push(query.clone());

        let ranked = rank(&vectors, &QuerySimilarity::new(&query), 4, OutputOrder::Score);
        assert_eq!(ranked[0].index, 3);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
        assert!(ranked.iter().all(|r| r.score <= ranked[0].score));
    }

    #[test]
    fn test_rank_with_trait_object() {
        let scorer: Box<dyn UnitScorer> = Box::new(AggregateWeight);
        let vectors = vec![TermVector::from_entries(vec![(0, 2.0)]), TermVector::new()];
        let ranked = rank(&vectors, scorer.as_ref(), 1, OutputOrder::Score);
        assert_eq!(indices(&ranked), vec![0]);
    }
}
