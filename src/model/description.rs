// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use smol_str::SmolStr;

use super::value::ModelValue;

/// The language pair the graph is being edited under: the language of the
/// current user and the system default it falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages {
    user: SmolStr,
    system: SmolStr,
}

pub const DEFAULT_LANGUAGE: &str = "en";

impl Languages {
    pub fn new(user: impl Into<SmolStr>, system: impl Into<SmolStr>) -> Self {
        Self {
            user: user.into(),
            system: system.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn system(&self) -> &str {
        &self.system
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_LANGUAGE)
    }
}

/// Display labels for a node or attribute meta, one per language tag.
///
/// Resolution walks user language, then system language, then the `"en"`
/// default; when nothing matches the caller falls back to the node id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelDescription {
    values: BTreeMap<SmolStr, String>,
}

impl ModelDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<SmolStr>,
        V: Into<String>,
    {
        Self {
            values: labels
                .into_iter()
                .map(|(language, value)| (normalize_language(language.into()), value.into()))
                .collect(),
        }
    }

    /// Copies language entries out of a multi-language attribute value,
    /// so a node's descriptions mirror its label attribute.
    pub fn from_value(value: &ModelValue) -> Self {
        match value {
            ModelValue::MultiLang(values) => Self {
                values: values
                    .iter()
                    .map(|(language, value)| (normalize_language(language.clone()), value.clone()))
                    .collect(),
            },
            ModelValue::String(value) => Self::from_labels([(DEFAULT_LANGUAGE, value.clone())]),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.is_empty())
    }

    pub fn set(&mut self, language: impl Into<SmolStr>, value: impl Into<String>) {
        self.values
            .insert(normalize_language(language.into()), value.into());
    }

    pub fn by_language(&self, language: &str) -> Option<&str> {
        self.values
            .get(normalize_language(SmolStr::new(language)).as_str())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves the display label for the given language pair, falling
    /// back to `fallback` (typically the node id) when no label exists.
    pub fn resolve<'a>(&'a self, languages: &Languages, fallback: &'a str) -> &'a str {
        self.by_language(languages.user())
            .or_else(|| self.by_language(languages.system()))
            .or_else(|| self.by_language(DEFAULT_LANGUAGE))
            .unwrap_or(fallback)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(SmolStr::as_str)
    }
}

// Payloads are inconsistent about label casing ("EN" in hierarchy
// payloads, "en" in attribute values); the map is keyed lowercase.
fn normalize_language(language: SmolStr) -> SmolStr {
    if language.chars().all(|ch| ch.is_ascii_lowercase()) {
        language
    } else {
        SmolStr::new(language.to_ascii_lowercase())
    }
}
