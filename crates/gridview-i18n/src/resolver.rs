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

use fluent::FluentArgs;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{I18n, I18nError, Language};

/// Resolves a message key plus named parameters to a localized string.
///
/// Resolution never fails: implementations decide their own fallback for
/// unknown keys (the catalog returns the key itself).
pub trait TranslationResolver {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Resolve a key without parameters
    fn text(&self, key: &str) -> String {
        self.resolve(key, &[])
    }
}

impl<T: TranslationResolver + ?Sized> TranslationResolver for &T {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        (**self).resolve(key, params)
    }
}

impl<T: TranslationResolver + ?Sized> TranslationResolver for Arc<T> {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        (**self).resolve(key, params)
    }
}

impl TranslationResolver for I18n {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        let result = if params.is_empty() {
            self.get(key)
        } else {
            let mut args = FluentArgs::new();
            for (name, value) in params {
                args.set(*name, *value);
            }
            self.format(key, Some(&args))
        };

        result.unwrap_or_else(|e| {
            warn!(key, language = %self.language(), "Falling back to key: {e}");
            key.to_owned()
        })
    }
}

/// Catalog shared across the UI whose language can be switched at runtime.
///
/// Readers take a cheap snapshot; switching loads the new catalog before
/// swapping it in, so a failed switch leaves the current language active.
#[derive(Debug, Clone)]
pub struct SharedI18n(Arc<RwLock<Arc<I18n>>>);

impl SharedI18n {
    /// Create a shared catalog for the specified language
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if the i18n system fails to initialize.
    pub fn new(language: Language) -> Result<Self, I18nError> {
        Ok(Self::from_catalog(I18n::new(language)?))
    }

    #[must_use]
    pub fn from_catalog(i18n: I18n) -> Self {
        Self(Arc::new(RwLock::new(Arc::new(i18n))))
    }

    /// Current catalog
    #[must_use]
    pub fn snapshot(&self) -> Arc<I18n> {
        Arc::clone(&self.0.read())
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.0.read().language()
    }

    /// Switch to another language, keeping installed overrides
    ///
    /// # Errors
    ///
    /// Returns `I18nError::LoadError` if the new translations cannot be loaded.
    pub fn set_language(&self, language: Language) -> Result<(), I18nError> {
        let current = self.snapshot();
        if current.language() == language {
            return Ok(());
        }

        let mut next = I18n::new(language)?;
        for (key, value) in current.overrides() {
            next = next.with_override(key.clone(), value.clone());
        }

        *self.0.write() = Arc::new(next);
        info!(from = %current.language(), to = %language, "Switched UI language");
        Ok(())
    }
}

impl TranslationResolver for SharedI18n {
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.snapshot().resolve(key, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_interpolates_named_params() {
        let i18n = I18n::new(Language::English).unwrap();
        let text = i18n.resolve(
            "General.periodFromTo",
            &[("value1", "01/05/2024"), ("value2", "01/20/2024")],
        );
        assert_eq!(text, "from 01/05/2024 to 01/20/2024");
    }

    #[test]
    fn test_resolve_falls_back_to_key() {
        let i18n = I18n::new(Language::German).unwrap();
        assert_eq!(i18n.text("General.Week.funday"), "General.Week.funday");
    }

    #[test]
    fn test_shared_language_switch_keeps_overrides() {
        let catalog = I18n::new(Language::English)
            .unwrap()
            .with_override("General.dateFormat", "yyyy/MM/dd");
        let shared = SharedI18n::from_catalog(catalog);
        assert_eq!(shared.text("Edge.History.today"), "Today");

        let reader = shared.clone();
        shared.set_language(Language::German).unwrap();

        assert_eq!(reader.language(), Language::German);
        assert_eq!(reader.text("Edge.History.today"), "Heute");
        assert_eq!(reader.text("General.dateFormat"), "yyyy/MM/dd");
    }

    #[test]
    fn test_snapshot_survives_switch() {
        let shared = SharedI18n::new(Language::English).unwrap();
        let before = shared.snapshot();
        shared.set_language(Language::German).unwrap();
        assert_eq!(before.text("Edge.History.yesterday"), "Yesterday");
        assert_eq!(shared.text("Edge.History.yesterday"), "Gestern");
    }
}
