//! Summarization components
//!
//! Provides extractive summarization that keeps the sentences with the
//! highest aggregate TF-IDF weight, in reading order.

pub mod extractive;

pub use extractive::ExtractiveSummarizer;
