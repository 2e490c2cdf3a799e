// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

/// A single attribute value as edited in the model graph.
///
/// Values arrive from the backend as loosely typed JSON and are coerced
/// against the attribute type declared by metadata. Multi-language values
/// keep one entry per language tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelValue {
    #[default]
    Empty,
    Boolean(bool),
    Integer(i64),
    String(String),
    MultiLang(BTreeMap<SmolStr, String>),
}

impl ModelValue {
    pub fn multi_lang<I, L, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<SmolStr>,
        V: Into<String>,
    {
        Self::MultiLang(
            entries
                .into_iter()
                .map(|(language, value)| (language.into(), value.into()))
                .collect(),
        )
    }

    /// Emptiness as used by changeset filtering and validation: booleans
    /// and integers always carry information, strings and language maps
    /// are empty when they hold no non-empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Boolean(_) | Self::Integer(_) => false,
            Self::String(value) => value.is_empty(),
            Self::MultiLang(values) => values.values().all(|value| value.is_empty()),
        }
    }

    /// Equality modulo type-specific normalization. Backends deliver
    /// boolean attributes either as JSON booleans or as the strings
    /// "true"/"false"; both spellings compare equal here so that the
    /// dirty flag is not tripped by a representation change.
    pub fn normalized_eq(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Self::Boolean(boolean), Self::String(text))
            | (Self::String(text), Self::Boolean(boolean)) => {
                matches!(
                    (*boolean, text.as_str()),
                    (true, "true") | (false, "false")
                )
            }
            _ => false,
        }
    }

    pub fn language(&self, language: &str) -> Option<&str> {
        match self {
            Self::MultiLang(values) => values.get(language).map(String::as_str),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Coerces a raw JSON payload value against a declared attribute type
    /// tag. Mismatches are hard errors that propagate to the caller; the
    /// linking layer performs no local recovery.
    pub fn from_json(attr_type: &str, raw: &serde_json::Value) -> Result<Self, ValueError> {
        if raw.is_null() {
            return Ok(Self::Empty);
        }

        match attr_type {
            "boolean" => match raw {
                serde_json::Value::Bool(value) => Ok(Self::Boolean(*value)),
                serde_json::Value::String(text) => match text.as_str() {
                    "true" => Ok(Self::Boolean(true)),
                    "false" => Ok(Self::Boolean(false)),
                    _ => Err(ValueError::TypeMismatch {
                        attr_type: SmolStr::new(attr_type),
                        found: json_kind(raw),
                    }),
                },
                _ => Err(ValueError::TypeMismatch {
                    attr_type: SmolStr::new(attr_type),
                    found: json_kind(raw),
                }),
            },
            "integer" | "order" => raw
                .as_i64()
                .map(Self::Integer)
                .ok_or_else(|| ValueError::TypeMismatch {
                    attr_type: SmolStr::new(attr_type),
                    found: json_kind(raw),
                }),
            "label" | "multiLangString" => match raw {
                serde_json::Value::Object(map) => {
                    let mut values = BTreeMap::new();
                    for (language, value) in map {
                        let serde_json::Value::String(text) = value else {
                            return Err(ValueError::TypeMismatch {
                                attr_type: SmolStr::new(attr_type),
                                found: json_kind(value),
                            });
                        };
                        values.insert(SmolStr::new(language), text.clone());
                    }
                    Ok(Self::MultiLang(values))
                }
                // Some older payloads deliver a plain string for the
                // default language; accept it as a single-entry map.
                serde_json::Value::String(text) => {
                    Ok(Self::multi_lang([("en", text.clone())]))
                }
                _ => Err(ValueError::TypeMismatch {
                    attr_type: SmolStr::new(attr_type),
                    found: json_kind(raw),
                }),
            },
            _ => match raw {
                serde_json::Value::String(text) => Ok(Self::String(text.clone())),
                serde_json::Value::Number(number) => number
                    .as_i64()
                    .map(Self::Integer)
                    .ok_or(ValueError::TypeMismatch {
                        attr_type: SmolStr::new(attr_type),
                        found: "float",
                    }),
                serde_json::Value::Bool(value) => Ok(Self::Boolean(*value)),
                _ => Err(ValueError::TypeMismatch {
                    attr_type: SmolStr::new(attr_type),
                    found: json_kind(raw),
                }),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Empty => serde_json::Value::Null,
            Self::Boolean(value) => serde_json::Value::Bool(*value),
            Self::Integer(value) => serde_json::Value::Number((*value).into()),
            Self::String(value) => serde_json::Value::String(value.clone()),
            Self::MultiLang(values) => serde_json::Value::Object(
                values
                    .iter()
                    .map(|(language, value)| {
                        (
                            language.to_string(),
                            serde_json::Value::String(value.clone()),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ModelValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ModelValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    TypeMismatch {
        attr_type: SmolStr,
        found: &'static str,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { attr_type, found } => {
                write!(
                    f,
                    "value does not match declared attribute type (type={attr_type}, found {found})"
                )
            }
        }
    }
}

impl std::error::Error for ValueError {}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
