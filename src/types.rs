//! Core data types shared by the summarizer and the question answerer

use serde::Serialize;

/// A sentence of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
    /// Position in the document (0-based, contiguous)
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// A sentence chosen for a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySentence {
    pub sentence: Sentence,
    /// Aggregate TF-IDF weight, or `None` when the document was short enough
    /// to be returned whole without ranking
    pub score: Option<f64>,
}

/// Result of summarizing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<SummarySentence>,
}

impl Summary {
    /// Join the selected sentences with single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `true` when every sentence of the document was returned unranked.
    pub fn is_complete(&self) -> bool {
        self.sentences.iter().all(|s| s.score.is_none())
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A sentence returned in answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Index of the sentence in the document
    pub index: usize,
    /// Sentence text
    pub text: String,
    /// Cosine similarity to the question, in [0, 1]
    pub score: f64,
}

impl Answer {
    /// Render as `[score=0.707] text` with the given number of decimals.
    pub fn render(&self, precision: usize) -> String {
        format!("[score={:.*}] {}", precision, self.score, self.text)
    }
}

/// Render answers one per line, highest score first.
pub fn render_answers(answers: &[Answer], precision: usize) -> String {
    answers
        .iter()
        .map(|a| a.render(precision))
        .collect::<Vec<_>>()
        .join("\n")
}
