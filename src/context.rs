//! Service context that bundles the port trait objects and the language provider.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::file_store::FileStore;
use crate::adapters::json_table::JsonTable;
use crate::adapters::memory_store::MemoryStore;
use crate::config::Config;
use crate::error::AppError;
use crate::language::{LanguageContext, LanguageSettings, Restore};
use crate::ports::{PreferenceStore, TranslationTable};

/// Language context shared between request handlers.
pub type SharedLanguage = Arc<Mutex<LanguageContext>>;

/// Bundles all port trait objects into a single context.
///
/// Built once at startup and handed to the server or the CLI command.
/// The language provider is optional; consumers reach it only through
/// [`ServiceContext::language`].
pub struct ServiceContext {
    /// Preference store port.
    pub store: Arc<dyn PreferenceStore>,
    /// Translation table port.
    pub table: Arc<dyn TranslationTable>,
    language: Option<SharedLanguage>,
}

impl ServiceContext {
    /// Create a context from configuration: file-backed store, embedded tables
    /// with on-disk overrides, and a language provider unless disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be loaded or the store cannot be read.
    pub fn from_config(config: &Config, verbose: bool) -> Result<Self, AppError> {
        let file_store = FileStore::new(config.storage_path());
        if verbose {
            eprintln!("Storage: {}", file_store.path().display());
        }
        let store: Arc<dyn PreferenceStore> = Arc::new(file_store);

        let mut table = JsonTable::embedded().map_err(AppError::Translations)?;
        if let Some(dir) = config.i18n.messages_dir.as_deref() {
            let merged = table.merge_dir(Path::new(dir)).map_err(AppError::Translations)?;
            if verbose {
                eprintln!("Translations: merged {merged} table(s) from {dir}");
            }
        }
        if verbose {
            eprintln!("Translations: {}", table.languages().join(", "));
        }

        let ctx = Self { store, table: Arc::new(table), language: None };
        if config.i18n.enabled {
            ctx.with_provider(&LanguageSettings::from(&config.i18n), verbose)
        } else {
            if verbose {
                eprintln!("Language provider disabled");
            }
            Ok(ctx)
        }
    }

    /// Create a context backed by an in-memory store and the embedded tables,
    /// without a language provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded tables are invalid.
    pub fn in_memory() -> Result<Self, AppError> {
        let table = JsonTable::embedded().map_err(AppError::Translations)?;
        Ok(Self { store: Arc::new(MemoryStore::new()), table: Arc::new(table), language: None })
    }

    /// Install a language provider, reading the persisted language once.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn with_provider(
        mut self,
        settings: &LanguageSettings,
        verbose: bool,
    ) -> Result<Self, AppError> {
        let (language, restore) =
            LanguageContext::load(Arc::clone(&self.store), Arc::clone(&self.table), settings)?;
        if verbose {
            match restore {
                Restore::Default => eprintln!("Language: {} (default)", language.language()),
                Restore::Restored(code) => eprintln!("Language: {code} (restored)"),
                Restore::Ignored(code) => eprintln!(
                    "Language: {} (ignored unsupported stored code '{code}')",
                    language.language()
                ),
            }
        }
        self.language = Some(Arc::new(Mutex::new(language)));
        Ok(self)
    }

    /// The language provider.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ContextUnavailable`] if no provider was installed.
    pub fn language(&self) -> Result<SharedLanguage, AppError> {
        self.language.as_ref().map(Arc::clone).ok_or(AppError::ContextUnavailable)
    }

    /// Run `f` with exclusive access to the language context.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ContextUnavailable`] if no provider was installed,
    /// [`AppError::Poisoned`] if a previous holder panicked, or whatever `f` returns.
    pub fn with_language<R>(
        &self,
        f: impl FnOnce(&mut LanguageContext) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let shared = self.language()?;
        let mut guard = shared.lock().map_err(|e| AppError::Poisoned(e.to_string()))?;
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::preference_store::LANGUAGE_KEY;

    #[test]
    fn missing_provider_fails_every_time() {
        let ctx = ServiceContext::in_memory().unwrap();
        for _ in 0..3 {
            assert!(matches!(ctx.language(), Err(AppError::ContextUnavailable)));
            assert!(matches!(
                ctx.with_language(|l| Ok(l.language().to_string())),
                Err(AppError::ContextUnavailable)
            ));
        }
    }

    #[test]
    fn provider_sees_embedded_tables() {
        let ctx = ServiceContext::in_memory()
            .unwrap()
            .with_provider(&LanguageSettings::default(), false)
            .unwrap();
        let title = ctx.with_language(|l| {
            l.set_language("hi")?;
            Ok(l.translate("nav.home"))
        });
        assert_eq!(title.unwrap(), "मुखपृष्ठ");
        assert_eq!(ctx.store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let ctx = ServiceContext::in_memory()
            .unwrap()
            .with_provider(&LanguageSettings::default(), false)
            .unwrap();
        let shared = ctx.language().unwrap();
        let _ = std::thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("handler crashed while holding the language context");
        })
        .join();

        let result = ctx.with_language(|l| Ok(l.language().to_string()));
        assert!(matches!(result, Err(AppError::Poisoned(_))));
    }

    #[test]
    fn disabled_provider_from_config() {
        let mut config = Config::default();
        config.i18n.enabled = false;
        config.storage.path = Some("/nonexistent/career-platform/storage.json".into());
        let ctx = ServiceContext::from_config(&config, false).unwrap();
        assert!(matches!(ctx.language(), Err(AppError::ContextUnavailable)));
    }
}
