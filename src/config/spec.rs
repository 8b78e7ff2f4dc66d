//! Engine specification types.
//!
//! An [`EngineSpec`] describes the language resources, weighting scheme and
//! default result sizes of a [`crate::engine::DocumentEngine`]. It is the
//! input to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "stopwords": { "extra": ["figure"], "remove": ["not"] },
//!   "abbreviations": ["approx"],
//!   "vectorizer": { "idf": "smooth", "normalization": "none" },
//!   "summary": { "sentences": 3 },
//!   "answer": { "top_k": 3, "precision": 3 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::vectorizer::{IdfSmoothing, Normalization};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level engine specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Working language as an ISO 639-1 code or English name. Defaults to `"en"`.
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    /// Extra abbreviations that never end a sentence.
    #[serde(default)]
    pub abbreviations: Vec<String>,

    #[serde(default)]
    pub vectorizer: VectorizerSpec,

    #[serde(default)]
    pub summary: SummarySpec,

    #[serde(default)]
    pub answer: AnswerSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for EngineSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: None,
            stopwords: StopwordSpec::default(),
            abbreviations: Vec::new(),
            vectorizer: VectorizerSpec::default(),
            summary: SummarySpec::default(),
            answer: AnswerSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl EngineSpec {
    /// Parse a spec from JSON. Validation is a separate step.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The requested language, `"en"` when unset.
    pub fn language_code(&self) -> &str {
        self.language.as_deref().unwrap_or("en")
    }
}

/// Adjustments to the language's stopword list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    /// Replace the language list entirely.
    #[serde(default)]
    pub custom: Option<Vec<String>>,

    /// Words added to the list.
    #[serde(default)]
    pub extra: Vec<String>,

    /// Words removed from the list.
    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// TF-IDF weighting options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VectorizerSpec {
    #[serde(default)]
    pub idf: Option<IdfSmoothing>,

    #[serde(default)]
    pub normalization: Option<Normalization>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Summary defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Sentences per summary when the caller does not pass k.
    #[serde(default)]
    pub sentences: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Question-answering defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSpec {
    /// Answers per question when the caller does not pass k.
    #[serde(default)]
    pub top_k: Option<usize>,

    /// Decimals used when rendering scores.
    #[serde(default)]
    pub precision: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
