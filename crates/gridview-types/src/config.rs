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

use gridview_i18n::{I18n, I18nError, Language};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::date_format::DatePattern;
use crate::period::DATE_FORMAT_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Dashboard locale settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub language: Language,
    /// Replaces the catalog's date pattern, e.g. `yyyy-MM-dd`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl UiConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pattern) = &self.date_format {
            DatePattern::parse(pattern)
                .map_err(|e| ConfigError::Invalid(format!("date_format: {e}")))?;
        }
        Ok(())
    }

    /// Translation catalog for the configured language with overrides applied
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if the translations cannot be loaded.
    pub fn catalog(&self) -> Result<I18n, I18nError> {
        let i18n = I18n::new(self.language)?;
        Ok(match &self.date_format {
            Some(pattern) => i18n.with_override(DATE_FORMAT_KEY, pattern.clone()),
            None => i18n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridview_i18n::TranslationResolver;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = UiConfig::from_toml("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_language_and_date_format() {
        let config = UiConfig::from_toml(
            r#"
            language = "german"
            date_format = "yyyy-MM-dd"
            "#,
        )
        .unwrap();
        assert_eq!(config.language, Language::German);

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.text(DATE_FORMAT_KEY), "yyyy-MM-dd");
        assert_eq!(catalog.text("Edge.History.today"), "Heute");
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let err = UiConfig::from_toml(r#"date_format = "EEEE""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(matches!(
            UiConfig::from_toml(r#"language = "klingon""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "language = \"english\"").unwrap();
        let config = UiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.language, Language::English);
        assert!(config.date_format.is_none());

        assert!(matches!(
            UiConfig::from_file("/nonexistent/gridview.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}
