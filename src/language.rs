//! Language context: the active language, its persistence, and translation lookup.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::I18nConfig;
use crate::error::AppError;
use crate::locale::{supported_locales, Language, LocaleInfo, TextDirection};
use crate::ports::preference_store::LANGUAGE_KEY;
use crate::ports::{PreferenceStore, TranslationTable};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// Settings the context is constructed with.
#[derive(Debug, Clone)]
pub struct LanguageSettings {
    /// Language active until the store is read.
    pub default_lang: String,
    /// Language consulted when a key is missing in the active one.
    pub fallback_lang: String,
    /// Reject codes outside the supported set.
    pub strict_codes: bool,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self::from(&I18nConfig::default())
    }
}

impl From<&I18nConfig> for LanguageSettings {
    fn from(config: &I18nConfig) -> Self {
        Self {
            default_lang: config.default_lang.clone(),
            fallback_lang: config.fallback_lang.clone(),
            strict_codes: config.strict_codes,
        }
    }
}

/// What initialization found in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restore {
    /// Nothing was persisted; the default language is active.
    Default,
    /// A supported code was persisted and is now active.
    Restored(String),
    /// An unsupported code was persisted and ignored.
    Ignored(String),
}

/// Holds the active language and answers translation lookups for it.
///
/// Every change goes through [`LanguageContext::set_language`], which writes
/// the code to the preference store and recomputes the text direction.
pub struct LanguageContext {
    store: Arc<dyn PreferenceStore>,
    table: Arc<dyn TranslationTable>,
    current: String,
    direction: TextDirection,
    fallback: String,
    strict: bool,
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("current", &self.current)
            .field("direction", &self.direction)
            .field("fallback", &self.fallback)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl LanguageContext {
    /// Build the context and read the persisted language once.
    ///
    /// A persisted code is adopted only if it is supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(
        store: Arc<dyn PreferenceStore>,
        table: Arc<dyn TranslationTable>,
        settings: &LanguageSettings,
    ) -> Result<(Self, Restore), AppError> {
        let mut ctx = Self {
            store,
            table,
            current: settings.default_lang.clone(),
            direction: TextDirection::for_code(&settings.default_lang),
            fallback: settings.fallback_lang.clone(),
            strict: settings.strict_codes,
        };

        let restore = match ctx.store.get(LANGUAGE_KEY)? {
            None => Restore::Default,
            Some(code) if Language::is_supported(&code) => {
                ctx.direction = TextDirection::for_code(&code);
                ctx.current.clone_from(&code);
                Restore::Restored(code)
            }
            Some(code) => Restore::Ignored(code),
        };

        Ok((ctx, restore))
    }

    /// The active language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.current
    }

    /// Writing direction of the active language.
    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Make `code` the active language and persist it.
    ///
    /// Any string is accepted unless the context is strict, in which case
    /// codes outside the supported set are rejected and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] for an unsupported code in strict
    /// mode, or a storage error if the code cannot be persisted. The active
    /// language is left as it was on either error.
    pub fn set_language(&mut self, code: &str) -> Result<(), AppError> {
        if self.strict && !Language::is_supported(code) {
            let valid: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
            return Err(AppError::InvalidArgument(format!(
                "Unsupported language '{code}'. Valid: {}",
                valid.join(", ")
            )));
        }

        self.store.set(LANGUAGE_KEY, code)?;
        code.clone_into(&mut self.current);
        self.direction = TextDirection::for_code(code);
        Ok(())
    }

    /// Whether the active code is one of the supported languages.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        Language::is_supported(&self.current)
    }

    /// The fixed list of supported locales.
    #[must_use]
    pub fn supported(&self) -> Vec<LocaleInfo> {
        supported_locales()
    }

    /// Translate `key` in the active language.
    ///
    /// Falls back to the fallback language, then to the key itself.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.lookup(&self.current, key)
    }

    /// Translate `key` and replace `{{name}}` placeholders with `params`.
    ///
    /// Placeholders without a matching parameter are left as written.
    #[must_use]
    pub fn translate_with(&self, key: &str, params: &HashMap<String, String>) -> String {
        interpolate(&self.translate(key), params)
    }

    /// Translate `key` in `lang` without changing the active language.
    #[must_use]
    pub fn translate_in(&self, lang: &str, key: &str, params: &HashMap<String, String>) -> String {
        interpolate(&self.lookup(lang, key), params)
    }

    fn lookup(&self, lang: &str, key: &str) -> String {
        self.table
            .lookup(lang, key)
            .or_else(|| self.table.lookup(&self.fallback, key))
            .unwrap_or_else(|| key.to_string())
    }
}

/// Replace `{{name}}` placeholders in `template` with values from `params`.
#[must_use]
pub fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| match params.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
