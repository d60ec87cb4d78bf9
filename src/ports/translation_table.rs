//! Translation table port.

/// Maps dotted keys to localized strings, one table per language code.
///
/// Fallback between languages is the caller's concern; a table only answers
/// for the exact language it is asked about.
pub trait TranslationTable: Send + Sync {
    /// Look up `key` in the table for `lang`.
    fn lookup(&self, lang: &str, key: &str) -> Option<String>;

    /// Language codes this table has entries for.
    fn languages(&self) -> Vec<String>;
}
