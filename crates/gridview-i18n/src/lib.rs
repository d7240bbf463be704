// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridView.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Translation catalog for the dashboard.
//!
//! Dashboard keys are dotted paths such as `Edge.History.today`. Fluent
//! identifiers cannot contain dots, so every key is looked up with its dots
//! replaced by dashes (`Edge-History-today`).

mod resolver;

pub use resolver::{SharedI18n, TranslationResolver};

use fluent::{FluentArgs, FluentResource};
use fluent_bundle::concurrent::FluentBundle;
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Translation domains embedded for every language, in lookup order
const DOMAINS: [&str; 2] = ["general", "edge"];

/// Supported languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    English,
    /// German
    German,
}

impl Language {
    /// Get the language identifier string (e.g., "en", "de")
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// Get the language display name
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "Deutsch",
        }
    }

    /// List all supported languages
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// Parse language from string code
    ///
    /// # Errors
    ///
    /// Returns `I18nError::UnsupportedLanguage` if the language code is not supported.
    pub fn from_code(code: &str) -> Result<Self, I18nError> {
        match code.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            _ => Err(I18nError::UnsupportedLanguage(code.to_owned())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = I18nError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Translation errors
#[derive(Debug, Error)]
pub enum I18nError {
    /// Translation key not found
    #[error("Translation key not found: {0}")]
    KeyNotFound(String),

    /// Failed to load translation resource
    #[error("Failed to load translation resource: {0}")]
    LoadError(String),

    /// Unsupported language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Formatting error
    #[error("Failed to format translation: {0}")]
    FormatError(String),
}

/// Fluent message identifier for a dotted dashboard key
#[must_use]
pub fn message_id(key: &str) -> Cow<'_, str> {
    if key.contains('.') {
        Cow::Owned(key.replace('.', "-"))
    } else {
        Cow::Borrowed(key)
    }
}

/// Translation catalog for one language
pub struct I18n {
    bundles: Vec<(&'static str, FluentBundle<FluentResource>)>,
    overrides: HashMap<String, String>,
    language: Language,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language)
            .field(
                "domains",
                &self.bundles.iter().map(|(d, _)| *d).collect::<Vec<_>>(),
            )
            .field("overrides", &self.overrides)
            .finish()
    }
}

impl I18n {
    /// Create a new i18n instance for the specified language
    ///
    /// # Errors
    ///
    /// Returns `I18nError::LoadError` if translation files cannot be loaded.
    pub fn new(language: Language) -> Result<Self, I18nError> {
        let mut i18n = Self {
            bundles: Vec::with_capacity(DOMAINS.len()),
            overrides: HashMap::new(),
            language,
        };

        for domain in DOMAINS {
            i18n.load_domain(domain)?;
        }

        debug!(language = %language, domains = DOMAINS.len(), "Loaded translations");
        Ok(i18n)
    }

    /// Replace the translation of `key` with a fixed value.
    ///
    /// Overrides win over the embedded catalog and are returned verbatim,
    /// without argument interpolation.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Overrides installed with [`I18n::with_override`]
    #[must_use]
    pub fn overrides(&self) -> &HashMap<String, String> {
        &self.overrides
    }

    /// Load a translation domain (e.g., "general", "edge")
    fn load_domain(&mut self, domain: &'static str) -> Result<(), I18nError> {
        let lang_code = self.language.code();
        let ftl_content = Self::load_ftl_file(lang_code, domain)?;

        let resource = FluentResource::try_new(ftl_content.to_owned())
            .map_err(|e| I18nError::LoadError(format!("Failed to parse {domain}.ftl: {e:?}")))?;

        let lang_id: LanguageIdentifier = lang_code
            .parse()
            .map_err(|e| I18nError::LoadError(format!("Invalid language ID: {e}")))?;

        let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
        // Labels are plain text, no bidi isolation around placeables
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|e| I18nError::LoadError(format!("Failed to add resource: {e:?}")))?;

        self.bundles.push((domain, bundle));
        Ok(())
    }

    /// Load FTL file content
    fn load_ftl_file(lang_code: &str, domain: &str) -> Result<&'static str, I18nError> {
        match (lang_code, domain) {
            ("en", "general") => Ok(include_str!("../locales/en/general.ftl")),
            ("en", "edge") => Ok(include_str!("../locales/en/edge.ftl")),
            ("de", "general") => Ok(include_str!("../locales/de/general.ftl")),
            ("de", "edge") => Ok(include_str!("../locales/de/edge.ftl")),
            _ => Err(I18nError::LoadError(format!(
                "Translation file not found: {lang_code}/{domain}.ftl"
            ))),
        }
    }

    /// Get a translated string by key
    ///
    /// # Errors
    ///
    /// Returns `I18nError::KeyNotFound` if the translation key is not found in any domain.
    pub fn get(&self, key: &str) -> Result<String, I18nError> {
        self.format(key, None)
    }

    /// Format a translated string with arguments
    ///
    /// # Errors
    ///
    /// Returns `I18nError::KeyNotFound` if the translation key is not found.
    /// Returns `I18nError::FormatError` if formatting fails.
    pub fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Result<String, I18nError> {
        if let Some(value) = self.overrides.get(key) {
            return Ok(value.clone());
        }

        let id = message_id(key);
        for (_, bundle) in &self.bundles {
            if let Some(message) = bundle.get_message(&id).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(message, args, &mut errors);

                if !errors.is_empty() {
                    return Err(I18nError::FormatError(format!(
                        "Formatting errors: {errors:?}"
                    )));
                }

                return Ok(value.into_owned());
            }
        }

        Err(I18nError::KeyNotFound(key.to_owned()))
    }

    /// Whether `key` resolves in this catalog
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        if self.overrides.contains_key(key) {
            return true;
        }
        let id = message_id(key);
        self.bundles
            .iter()
            .any(|(_, bundle)| bundle.has_message(&id))
    }

    /// Get the current language
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("en").unwrap(), Language::English);
        assert_eq!(Language::from_code("de").unwrap(), Language::German);
        assert_eq!(Language::from_code("EN").unwrap(), Language::English);
        assert_eq!(Language::from_code("Deutsch").unwrap(), Language::German);
        assert!(Language::from_code("fr").is_err());
    }

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::German.code(), "de");
        assert_eq!(Language::German.to_string(), "de");
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::German).unwrap();
        assert_eq!(json, "\"german\"");
        let parsed: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(parsed, Language::English);
    }

    #[test]
    fn test_message_id() {
        assert_eq!(message_id("Edge.History.today"), "Edge-History-today");
        assert!(matches!(message_id("plain-key"), Cow::Borrowed("plain-key")));
    }

    #[test]
    fn test_override_wins() {
        let i18n = I18n::new(Language::English)
            .unwrap()
            .with_override("General.dateFormat", "yyyy-MM-dd");
        assert_eq!(i18n.get("General.dateFormat").unwrap(), "yyyy-MM-dd");
        assert!(i18n.contains("General.dateFormat"));
    }

    #[test]
    fn test_missing_key() {
        let i18n = I18n::new(Language::English).unwrap();
        assert!(!i18n.contains("Edge.History.nope"));
        assert!(matches!(
            i18n.get("Edge.History.nope"),
            Err(I18nError::KeyNotFound(key)) if key == "Edge.History.nope"
        ));
    }
}
