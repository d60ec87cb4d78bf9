//! Translation tables read from JSON documents.
//!
//! Each document is an object per language; nested objects flatten into
//! dotted keys, so `{"hero": {"title": "..."}}` answers `hero.title`.
//! Non-string leaves (numbers, booleans) are stored as their JSON text;
//! arrays and nulls are skipped.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::locale::Language;
use crate::ports::TranslationTable;

/// Tables compiled into the binary, one per supported language.
const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("hi", include_str!("../../locales/hi.json")),
    ("ta", include_str!("../../locales/ta.json")),
    ("te", include_str!("../../locales/te.json")),
    ("bn", include_str!("../../locales/bn.json")),
];

/// Flattened key → string tables per language code.
#[derive(Debug, Default)]
pub struct JsonTable {
    langs: HashMap<String, HashMap<String, String>>,
}

impl JsonTable {
    /// Create an empty table set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables embedded at compile time for every supported language.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded document is not valid JSON.
    pub fn embedded() -> Result<Self, String> {
        let mut table = Self::new();
        for &(code, source) in EMBEDDED {
            table
                .merge_str(code, source)
                .map_err(|e| format!("Embedded table '{code}' is invalid: {e}"))?;
        }
        debug_assert!(Language::all().iter().all(|l| table.langs.contains_key(l.code())));
        Ok(table)
    }

    /// Merge `<dir>/<code>.json` files over the current tables.
    ///
    /// Entries read from disk replace existing entries with the same key.
    /// A missing directory is not an error. Returns the number of files merged.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a JSON file cannot be read or parsed.
    pub fn merge_dir(&mut self, dir: &Path) -> Result<usize, String> {
        if !dir.exists() {
            return Ok(0);
        }

        let entries = std::fs::read_dir(dir)
            .map_err(|e| format!("Failed to read messages dir {}: {e}", dir.display()))?;

        let mut merged = 0;
        for entry in entries {
            let path = entry.map_err(|e| format!("Failed to read dir entry: {e}"))?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            self.merge_str(code, &content)
                .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
            merged += 1;
        }
        Ok(merged)
    }

    /// Merge one JSON document as the table for `code`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not a JSON object.
    pub fn merge_str(&mut self, code: &str, source: &str) -> Result<(), String> {
        let value: Value = serde_json::from_str(source).map_err(|e| e.to_string())?;
        let Value::Object(root) = value else {
            return Err("top-level value must be an object".to_string());
        };

        let table = self.langs.entry(code.to_string()).or_default();
        for (key, value) in root {
            flatten_into(table, key, value);
        }
        Ok(())
    }
}

fn flatten_into(table: &mut HashMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::String(s) => {
            table.insert(prefix, s);
        }
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(table, format!("{prefix}.{key}"), nested);
            }
        }
        Value::Number(n) => {
            table.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            table.insert(prefix, b.to_string());
        }
        Value::Array(_) | Value::Null => {}
    }
}

impl TranslationTable for JsonTable {
    fn lookup(&self, lang: &str, key: &str) -> Option<String> {
        self.langs.get(lang).and_then(|table| table.get(key)).cloned()
    }

    fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.langs.keys().cloned().collect();
        codes.sort();
        codes
    }
}
