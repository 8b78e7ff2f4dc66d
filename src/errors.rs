//! Error types
//!
//! Only engine construction can fail. Summarize and answer calls never
//! return errors: empty input produces an empty result instead.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::config::validation::ValidationReport;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DigestError>;

/// Errors raised while building an engine and its language resources.
#[derive(Debug, Error)]
pub enum DigestError {
    /// No stopword or abbreviation resources exist for the language.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// The language code or name that was requested
        language: String,
    },

    /// A language resource file could not be read.
    #[error("language resource unavailable at {}: {source}", .path.display())]
    ResourceUnavailable {
        /// Path of the resource
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The engine specification failed validation.
    #[error("invalid engine spec: {}", summarize_report(.0))]
    InvalidSpec(ValidationReport),

    /// The engine specification is not well-formed JSON.
    #[error("malformed engine spec: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize_report(report: &ValidationReport) -> String {
    let messages: Vec<String> = report.errors().map(|e| e.to_string()).collect();
    if messages.is_empty() {
        "no errors".to_string()
    } else {
        messages.join("; ")
    }
}

// ─── Spec diagnostics ───────────────────────────────────────────────────────

/// Stable machine-readable code attached to every spec diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `v` field names a version this crate does not understand.
    UnsupportedVersion,
    /// The requested language has no bundled resources.
    UnsupportedLanguage,
    /// A numeric setting is outside its allowed range.
    OutOfRange,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::OutOfRange => "out_of_range",
            Self::UnknownField => "unknown_field",
        }
    }
}

/// A single problem found in an engine spec, addressed by JSON pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}
