//! Language tables for user-facing text.
//!
//! One flat string-to-string table per language, keyed by a two-letter code.
//! Tables ship embedded in the binary; a directory of `<code>.json` files can
//! be used instead. Lookups never fail: a missing key resolves to itself.

mod languages;

pub use languages::{
    detect_language, is_supported, supported_languages, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES,
};

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Embedded language tables, keyed by two-letter code.
const EMBEDDED_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("zh", include_str!("../../locales/zh.json")),
    ("ru", include_str!("../../locales/ru.json")),
    ("ja", include_str!("../../locales/ja.json")),
    ("de", include_str!("../../locales/de.json")),
    ("pt", include_str!("../../locales/pt.json")),
    ("fr", include_str!("../../locales/fr.json")),
];

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("No language table for '{0}'")]
    MissingTable(String),

    #[error("Failed to read language file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse language table for '{code}': {source}")]
    ParseError {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where language tables are loaded from.
#[derive(Debug, Clone, Default)]
pub enum LocaleSource {
    /// Tables compiled into the binary.
    #[default]
    Embedded,
    /// A directory of `<code>.json` files.
    Dir(PathBuf),
}

impl LocaleSource {
    fn read(&self, code: &str) -> Result<String, I18nError> {
        match self {
            LocaleSource::Embedded => EMBEDDED_TABLES
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, json)| (*json).to_string())
                .ok_or_else(|| I18nError::MissingTable(code.to_string())),
            LocaleSource::Dir(dir) => {
                let path = dir.join(format!("{code}.json"));
                fs::read_to_string(&path).map_err(|source| I18nError::ReadError { path, source })
            }
        }
    }
}

/// One loaded language table plus the source further loads come from.
#[derive(Debug)]
pub struct Catalog {
    source: LocaleSource,
    language: String,
    table: HashMap<String, String>,
}

impl Catalog {
    /// Create a catalog with the default language loaded. Should even the
    /// default table fail to load, the catalog starts empty and [`text`]
    /// echoes keys back.
    ///
    /// [`text`]: Catalog::text
    pub fn new(source: LocaleSource) -> Self {
        let mut catalog = Self {
            source,
            language: DEFAULT_LANGUAGE.to_string(),
            table: HashMap::new(),
        };
        if let Err(e) = catalog.load(DEFAULT_LANGUAGE) {
            tracing::warn!("failed to load default language table: {e}");
        }
        catalog
    }

    /// Load the table for `code`, substituting the default language for
    /// unsupported codes. The current table is only replaced once the new
    /// one has been read and parsed; on failure it stays in place.
    pub fn load(&mut self, code: &str) -> Result<(), I18nError> {
        let code = if is_supported(code) {
            code
        } else {
            DEFAULT_LANGUAGE
        };

        let raw = self.source.read(code)?;
        let table: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| I18nError::ParseError {
                code: code.to_string(),
                source,
            })?;

        debug!(language = code, keys = table.len(), "language table loaded");
        self.language = code.to_string();
        self.table = table;
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Localized string for `key`, or `key` itself verbatim when absent.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.table.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Localized template for `key` with `{placeholder}` substitution.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.text(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(LocaleSource::Embedded)
    }
}
