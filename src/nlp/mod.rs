//! Natural Language Processing components
//!
//! This module provides sentence segmentation, word tokenization and
//! stopword filtering, plus the [`Language`] selector that picks the
//! bundled resources for each.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

use crate::errors::DigestError;

/// Working language of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Hungarian,
    Turkish,
}

impl Language {
    /// Every language with bundled resources.
    pub const ALL: [Language; 14] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Russian,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Hungarian,
        Language::Turkish,
    ];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Russian => "ru",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
            Language::Danish => "da",
            Language::Finnish => "fi",
            Language::Hungarian => "hu",
            Language::Turkish => "tr",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        let lang = match value.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            "sv" | "swedish" => Language::Swedish,
            "no" | "norwegian" => Language::Norwegian,
            "da" | "danish" => Language::Danish,
            "fi" | "finnish" => Language::Finnish,
            "hu" | "hungarian" => Language::Hungarian,
            "tr" | "turkish" => Language::Turkish,
            _ => return None,
        };
        Some(lang)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::str::FromStr for Language {
    type Err = DigestError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Language::parse(value).ok_or_else(|| DigestError::UnsupportedLanguage {
            language: value.to_string(),
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("German".parse::<Language>().unwrap(), Language::German);
        assert_eq!(" FR ".parse::<Language>().unwrap(), Language::French);
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let err = "xx".parse::<Language>().unwrap_err();
        assert!(matches!(err, DigestError::UnsupportedLanguage { language } if language == "xx"));
    }

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }
}
