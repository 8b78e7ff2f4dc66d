//! Validation engine for engine specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`EngineSpec`] and collects every diagnostic into a [`ValidationReport`].
//! It never short-circuits on the first error, so users see all problems at
//! once.

use std::collections::HashMap;

use serde::Serialize;

use super::spec::{EngineSpec, SPEC_VERSION};
use crate::errors::{ErrorCode, SpecError};
use crate::nlp::Language;

/// Largest number of decimals accepted for rendered scores.
pub const MAX_SCORE_PRECISION: usize = 12;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`EngineSpec`] and returns zero
/// or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"language"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`EngineSpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(PrecisionRule));
        engine.add_rule(Box::new(EmptyResultRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &EngineSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("spec version {} is not supported", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Language must have bundled resources ────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic> {
        if spec.language_code().parse::<Language>().is_ok() {
            return vec![];
        }
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedLanguage,
                "/language",
                format!("no language resources for \"{}\"", spec.language_code()),
            )
            .with_hint(format!("Use one of: {}", supported.join(", "))),
        )]
    }
}

// ─── 3. Rendering precision ─────────────────────────────────────────────────

struct PrecisionRule;

impl ValidationRule for PrecisionRule {
    fn name(&self) -> &str {
        "precision"
    }

    fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic> {
        match spec.answer.precision {
            Some(p) if p > MAX_SCORE_PRECISION => vec![ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::OutOfRange,
                    "/answer/precision",
                    format!("precision must be at most {MAX_SCORE_PRECISION}, got {p}"),
                )
                .with_hint("Scores are f64; more decimals only print noise"),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Zero result sizes (warning only) ────────────────────────────────────

struct EmptyResultRule;

impl ValidationRule for EmptyResultRule {
    fn name(&self) -> &str {
        "empty_result"
    }

    fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic> {
        let checks: &[(&str, Option<usize>)] = &[
            ("/summary/sentences", spec.summary.sentences),
            ("/answer/top_k", spec.answer.top_k),
        ];

        checks
            .iter()
            .filter(|(_, value)| *value == Some(0))
            .map(|(path, _)| {
                ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::OutOfRange,
                        *path,
                        "a default of 0 always produces an empty result",
                    )
                    .with_hint("Remove the field to use the default of 3"),
                )
            })
            .collect()
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic> {
        let sections: [(&str, &HashMap<String, serde_json::Value>); 5] = [
            ("", &spec.unknown_fields),
            ("/stopwords", &spec.stopwords.unknown_fields),
            ("/vectorizer", &spec.vectorizer.unknown_fields),
            ("/summary", &spec.summary.unknown_fields),
            ("/answer", &spec.answer.unknown_fields),
        ];

        sections
            .iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build an EngineSpec from JSON.
    fn spec(json: &str) -> EngineSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_spec_is_valid() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "language": "french",
                "vectorizer": { "idf": "smooth", "normalization": "l2" },
                "summary": { "sentences": 4 },
                "answer": { "top_k": 5, "precision": 12 }
            }"#,
        ));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_rule_order() {
        assert_eq!(
            engine().rule_names(),
            vec!["version", "language", "precision", "empty_result", "unknown_fields"]
        );
    }

    // ─── Rule: version ──────────────────────────────────────────────────

    #[test]
    fn test_unsupported_version_fails() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnsupportedVersion);
        assert_eq!(err.path, "/v");
    }

    // ─── Rule: language ─────────────────────────────────────────────────

    #[test]
    fn test_unknown_language_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "language": "xx" }"#));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnsupportedLanguage);
        assert!(err.hint.as_deref().unwrap().contains("en"));
    }

    // ─── Rule: precision ────────────────────────────────────────────────

    #[test]
    fn test_precision_out_of_range_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "answer": { "precision": 13 } }"#));
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.path, "/answer/precision");
    }

    // ─── Rule: empty_result ─────────────────────────────────────────────

    #[test]
    fn test_zero_defaults_warn() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "summary": { "sentences": 0 }, "answer": { "top_k": 0 } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<&str> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/summary/sentences", "/answer/top_k"]);
    }

    // ─── Rule: unknown_fields ───────────────────────────────────────────

    #[test]
    fn test_unknown_fields_warn_when_not_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "bogus": 1, "vectorizer": { "sublinear": true } }"#,
        ));
        assert!(report.is_valid());
        let paths: Vec<&str> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/bogus", "/vectorizer/sublinear"]);
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "stopwords": { "extras": ["x"] } }"#,
        ));
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.path, "/stopwords/extras");
    }

    // ─── Multiple diagnostics ───────────────────────────────────────────

    #[test]
    fn test_collects_all_problems() {
        let report = engine().validate(&spec(
            r#"{ "v": 9, "language": "xx", "answer": { "precision": 40 } }"#,
        ));
        assert_eq!(report.errors().count(), 3);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "unsupported_version");
        assert_eq!(diag["path"], "/v");
    }

    #[test]
    fn test_custom_rule() {
        struct RequireLanguage;

        impl ValidationRule for RequireLanguage {
            fn name(&self) -> &str {
                "require_language"
            }

            fn validate(&self, spec: &EngineSpec) -> Vec<ValidationDiagnostic> {
                if spec.language.is_some() {
                    vec![]
                } else {
                    vec![ValidationDiagnostic::error(SpecError::new(
                        ErrorCode::UnsupportedLanguage,
                        "/language",
                        "language must be set explicitly",
                    ))]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(RequireLanguage));
        assert!(engine.validate(&spec(r#"{ "v": 1 }"#)).has_errors());
        assert!(engine
            .validate(&spec(r#"{ "v": 1, "language": "en" }"#))
            .is_valid());
    }
}
