//! Supported locales and text direction.

use serde::Serialize;

/// Languages the site ships translation tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Hindi.
    Hi,
    /// Tamil.
    Ta,
    /// Telugu.
    Te,
    /// Bengali.
    Bn,
}

impl Language {
    /// ISO 639-1 two-letter code for this language.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Bn => "bn",
        }
    }

    /// Parse a code into a supported language. Case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "ta" => Some(Language::Ta),
            "te" => Some(Language::Te),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }

    /// Name of the language in its own script.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Ta => "தமிழ்",
            Language::Te => "తెలుగు",
            Language::Bn => "বাংলা",
        }
    }

    /// All supported languages, in display order.
    #[must_use]
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi, Language::Ta, Language::Te, Language::Bn]
    }

    /// Whether `code` names a supported language.
    #[must_use]
    pub fn is_supported(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Writing direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Codes written right to left. None of them is in [`Language::all`].
const RTL_CODES: &[&str] = &["ar", "he", "fa", "ur"];

impl TextDirection {
    /// Direction for an arbitrary language code.
    #[must_use]
    pub fn for_code(code: &str) -> TextDirection {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        if RTL_CODES.contains(&primary) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Value for an HTML `dir` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// A supported locale as exposed to consumers.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleInfo {
    /// Language code.
    pub code: &'static str,
    /// Native display name.
    pub name: &'static str,
    /// Writing direction.
    pub direction: TextDirection,
}

/// The supported locales with their display metadata.
#[must_use]
pub fn supported_locales() -> Vec<LocaleInfo> {
    Language::all()
        .iter()
        .map(|&lang| LocaleInfo {
            code: lang.code(),
            name: lang.native_name(),
            direction: TextDirection::for_code(lang.code()),
        })
        .collect()
}
