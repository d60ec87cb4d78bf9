//! Key-value preference store port, the server-side stand-in for browser local storage.

use crate::error::AppError;

/// Key under which the active language code is persisted.
pub const LANGUAGE_KEY: &str = "career-platform-language";

/// Persists raw string values by key.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
