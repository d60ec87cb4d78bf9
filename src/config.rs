//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Localization settings.
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Preference store settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: "127.0.0.1:3000".to_string() }
    }
}

/// Localization settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Whether a language provider is installed at all.
    pub enabled: bool,
    /// Language active before the store is read.
    pub default_lang: String,
    /// Language consulted when a key is missing in the active one.
    pub fallback_lang: String,
    /// Folder holding `<code>.json` tables that override the embedded ones.
    pub messages_dir: Option<String>,
    /// Reject codes outside the supported set instead of accepting them.
    pub strict_codes: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_lang: "en".to_string(),
            fallback_lang: "en".to_string(),
            messages_dir: None,
            strict_codes: false,
        }
    }
}

/// Preference store settings.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file backing the store.
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the bind address, preferring environment variable.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        std::env::var("CAREER_PLATFORM_BIND").unwrap_or_else(|_| self.server.bind.clone())
    }

    /// Get the store path, preferring environment variable, then the file value,
    /// then `~/.local/share/career-platform/storage.json`.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        if let Ok(p) = std::env::var("CAREER_PLATFORM_STORAGE") {
            return PathBuf::from(p);
        }
        match self.storage.path.as_deref() {
            Some(p) => expand_home(p),
            None => default_storage_path(),
        }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `CAREER_PLATFORM_CONFIG` environment variable
/// 3. `~/.config/career-platform/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("CAREER_PLATFORM_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/career-platform/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/career-platform/config.toml")
    } else {
        PathBuf::from("career-platform.toml")
    }
}

fn default_storage_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".local/share/career-platform/storage.json")
    } else {
        PathBuf::from("career-platform-storage.json")
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.i18n.enabled);
        assert_eq!(config.i18n.default_lang, "en");
        assert_eq!(config.i18n.fallback_lang, "en");
        assert!(config.i18n.messages_dir.is_none());
        assert!(!config.i18n.strict_codes);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.i18n.default_lang, "en");
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("career_platform_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
bind = "0.0.0.0:8080"

[i18n]
default_lang = "hi"
messages_dir = "/srv/messages"
strict_codes = true

[storage]
path = "/var/lib/career-platform/storage.json"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.i18n.default_lang, "hi");
        assert_eq!(config.i18n.fallback_lang, "en");
        assert_eq!(config.i18n.messages_dir.as_deref(), Some("/srv/messages"));
        assert!(config.i18n.strict_codes);
        assert!(config.i18n.enabled);
        assert_eq!(config.storage.path.as_deref(), Some("/var/lib/career-platform/storage.json"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("career_platform_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }

    #[test]
    fn expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/var/lib/x.json"), PathBuf::from("/var/lib/x.json"));
    }
}
