//! Unified error type for career-platform.

use thiserror::Error;

/// Errors that can occur while serving placeholders or managing the language context.
#[derive(Debug, Error)]
pub enum AppError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The preference store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Translation tables could not be loaded.
    #[error("Translation error: {0}")]
    Translations(String),

    /// A lock was poisoned by a panic in another thread.
    #[error("Lock poisoned: {0}")]
    Poisoned(String),

    /// The language context was requested where no provider was installed.
    #[error("Language context unavailable: it must be accessed within a language provider")]
    ContextUnavailable,
}
