//! Supported language table and pivot designation.
//!
//! The registry is an immutable value built once at startup and shared by
//! reference. It answers three questions: is a code supported, what is its
//! canonical form, and which language bridges pairs that cannot be
//! translated directly.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::{LulimiError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Default table in definition order: (code, display name).
const ZAMBIAN_LANGUAGES: &[(&str, &str)] = &[
    ("NY", "Nyanja"),
    ("BM", "Bemba"),
    ("TO", "Tonga"),
    ("LO", "Lozi"),
    ("EN", "English"),
];

const DEFAULT_PIVOT: &str = "EN";

/// Canonical (uppercase) language identifier.
///
/// Values are only handed out by a [`LanguageRegistry`], so holding one
/// means the code was registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One row of the registry, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: LanguageCode,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    pivot: LanguageCode,
}

impl LanguageRegistry {
    /// Build a registry from `(code, display name)` pairs.
    ///
    /// Codes are normalized the same way request input is. Fails on an
    /// empty table, duplicate codes, or a pivot that is not in the table.
    pub fn new<I, C, N>(entries: I, pivot: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut languages = Vec::new();

        for (code, name) in entries {
            let code = normalize(code.as_ref());
            if code.is_empty() {
                return Err(LulimiError::Config("language code cannot be empty".to_string()));
            }
            if !seen.insert(code.clone()) {
                return Err(LulimiError::Config(format!("duplicate language code: {}", code)));
            }
            languages.push(Language {
                code: LanguageCode(code),
                name: name.into(),
            });
        }

        if languages.is_empty() {
            return Err(LulimiError::Config("language table cannot be empty".to_string()));
        }

        let pivot = normalize(pivot);
        if !seen.contains(&pivot) {
            return Err(LulimiError::Config(format!(
                "pivot language {} is not a registered language",
                pivot
            )));
        }

        Ok(Self {
            languages,
            pivot: LanguageCode(pivot),
        })
    }

    /// Nyanja, Bemba, Tonga, Lozi and English, pivoting through English.
    pub fn zambian() -> Self {
        Self {
            languages: ZAMBIAN_LANGUAGES
                .iter()
                .map(|(code, name)| Language {
                    code: LanguageCode(code.to_string()),
                    name: name.to_string(),
                })
                .collect(),
            pivot: LanguageCode(DEFAULT_PIVOT.to_string()),
        }
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Map raw input (any case, surrounding whitespace allowed) to the
    /// registered identifier.
    pub fn canonicalize(&self, code: &str) -> Result<LanguageCode> {
        self.lookup(code)
            .map(|language| language.code.clone())
            .ok_or_else(|| LulimiError::UnknownLanguage(code.to_string()))
    }

    pub fn pivot(&self) -> &LanguageCode {
        &self.pivot
    }

    /// All languages in definition order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn display_name(&self, code: &LanguageCode) -> Option<&str> {
        self.languages
            .iter()
            .find(|language| &language.code == code)
            .map(|language| language.name.as_str())
    }

    fn lookup(&self, code: &str) -> Option<&Language> {
        let code = normalize(code);
        self.languages.iter().find(|language| language.code.0 == code)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::zambian()
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}
