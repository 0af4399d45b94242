//! Display language and pre-localized texts.

use serde::{Deserialize, Serialize};

/// Language a feed is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Dutch,
    English,
}

impl Language {
    /// Map a request language code to a language.
    ///
    /// Only "en" selects English; every other code falls back to Dutch.
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") {
            Language::English
        } else {
            Language::Dutch
        }
    }

    /// Notice appended to the remarks of a train without real-time data.
    pub fn no_realtime_notice(self) -> &'static str {
        match self {
            Language::English => "No real-time information",
            Language::Dutch => "Geen actuele informatie",
        }
    }

    /// Travel tip announcing a named train.
    pub fn train_name_notice(self, name: &str) -> String {
        match self {
            Language::English => format!("Train name: {name}"),
            Language::Dutch => format!("Treinnaam: {name}"),
        }
    }
}

/// A text that arrives already translated from upstream.
///
/// Dutch is always present; English falls back to Dutch when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub nl: String,
    #[serde(default)]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(nl: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            nl: nl.into(),
            en: Some(en.into()),
        }
    }

    /// The text in the requested language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => self.en.as_deref().unwrap_or(&self.nl),
            Language::Dutch => &self.nl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code("nl"), Language::Dutch);
        assert_eq!(Language::from_code("de"), Language::Dutch);
        assert_eq!(Language::from_code(""), Language::Dutch);
    }

    #[test]
    fn notices() {
        assert_eq!(
            Language::English.no_realtime_notice(),
            "No real-time information"
        );
        assert_eq!(
            Language::Dutch.no_realtime_notice(),
            "Geen actuele informatie"
        );
        assert_eq!(
            Language::English.train_name_notice("Thalys"),
            "Train name: Thalys"
        );
        assert_eq!(
            Language::Dutch.train_name_notice("Thalys"),
            "Treinnaam: Thalys"
        );
    }

    #[test]
    fn english_falls_back_to_dutch() {
        let text = LocalizedText {
            nl: "Rijdt niet".into(),
            en: None,
        };
        assert_eq!(text.get(Language::English), "Rijdt niet");

        let text = LocalizedText::new("Rijdt niet", "Cancelled");
        assert_eq!(text.get(Language::English), "Cancelled");
        assert_eq!(text.get(Language::Dutch), "Rijdt niet");
    }
}
