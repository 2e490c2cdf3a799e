// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Attribute metadata: the per-family catalogs that drive linking,
//! defaults and validation.

use std::fmt;

use smol_str::SmolStr;

use crate::model::{
    AttributeId, IdError, Keyed, ModelDescription, ModelList, ModelValue, ValueError,
};
use crate::payload;

/// Metadata for one attribute: declared type, default value, validation
/// and display labels. Linkers materialize one [`crate::model::ModelAttribute`]
/// per metadata entry of the relevant block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttributeMeta {
    id: AttributeId,
    uri: Option<String>,
    attr_type: SmolStr,
    default_value: ModelValue,
    mandatory: bool,
    descriptions: ModelDescription,
}

impl ModelAttributeMeta {
    pub fn new(id: AttributeId, attr_type: impl Into<SmolStr>) -> Self {
        Self {
            id,
            uri: None,
            attr_type: attr_type.into(),
            default_value: ModelValue::Empty,
            mandatory: false,
            descriptions: ModelDescription::new(),
        }
    }

    pub fn id(&self) -> &AttributeId {
        &self.id
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri;
    }

    pub fn attr_type(&self) -> &str {
        &self.attr_type
    }

    pub fn default_value(&self) -> &ModelValue {
        &self.default_value
    }

    pub fn set_default_value(&mut self, default_value: ModelValue) {
        self.default_value = default_value;
    }

    pub fn mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn set_mandatory(&mut self, mandatory: bool) {
        self.mandatory = mandatory;
    }

    pub fn descriptions(&self) -> &ModelDescription {
        &self.descriptions
    }

    pub fn set_descriptions(&mut self, descriptions: ModelDescription) {
        self.descriptions = descriptions;
    }
}

impl Keyed for ModelAttributeMeta {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

/// One metadata catalog (e.g. the field attributes block).
pub type MetaBlock = ModelList<ModelAttributeMeta>;

/// All metadata blocks delivered by the backend, one per node family,
/// plus the header types every definition is expected to expose.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelsMeta {
    semantics: MetaBlock,
    definitions: MetaBlock,
    properties: MetaBlock,
    fields: MetaBlock,
    regions: MetaBlock,
    controls: MetaBlock,
    control_params: MetaBlock,
    headers: MetaBlock,
    header_types: Vec<SmolStr>,
}

impl ModelsMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn semantics(&self) -> &MetaBlock {
        &self.semantics
    }

    pub fn definitions(&self) -> &MetaBlock {
        &self.definitions
    }

    pub fn properties(&self) -> &MetaBlock {
        &self.properties
    }

    pub fn fields(&self) -> &MetaBlock {
        &self.fields
    }

    pub fn regions(&self) -> &MetaBlock {
        &self.regions
    }

    pub fn controls(&self) -> &MetaBlock {
        &self.controls
    }

    pub fn control_params(&self) -> &MetaBlock {
        &self.control_params
    }

    pub fn headers(&self) -> &MetaBlock {
        &self.headers
    }

    /// Header types every definition exposes; headers without raw data
    /// are synthesized from this list.
    pub fn header_types(&self) -> &[SmolStr] {
        &self.header_types
    }

    pub fn from_payload(payload: &payload::MetaData) -> Result<Self, MetaError> {
        Ok(Self {
            semantics: block_from_payload(&payload.semantics)?,
            definitions: block_from_payload(&payload.definitions)?,
            properties: block_from_payload(&payload.properties)?,
            fields: block_from_payload(&payload.fields)?,
            regions: block_from_payload(&payload.regions)?,
            controls: block_from_payload(&payload.controls)?,
            control_params: block_from_payload(&payload.control_params)?,
            headers: block_from_payload(&payload.headers)?,
            header_types: payload.header_types.iter().map(SmolStr::new).collect(),
        })
    }
}

fn block_from_payload(entries: &[payload::AttributeMetaData]) -> Result<MetaBlock, MetaError> {
    let mut block = MetaBlock::new();
    for entry in entries {
        let id = AttributeId::new(entry.id.clone()).map_err(|source| MetaError::InvalidId {
            id: entry.id.clone(),
            source,
        })?;

        let mut meta = ModelAttributeMeta::new(id, entry.attr_type.as_str());
        meta.set_uri(entry.uri.clone());
        meta.set_mandatory(entry.validation_model.mandatory);
        meta.set_descriptions(ModelDescription::from_labels(
            entry
                .labels
                .iter()
                .map(|(language, label)| (language.as_str(), label.as_str())),
        ));

        if !entry.default_value.is_null() {
            let default_value = ModelValue::from_json(&entry.attr_type, &entry.default_value)
                .map_err(|source| MetaError::InvalidDefault {
                    id: entry.id.clone(),
                    source,
                })?;
            meta.set_default_value(default_value);
        }

        block.insert(meta);
    }
    Ok(block)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    InvalidId { id: String, source: IdError },
    InvalidDefault { id: String, source: ValueError },
}

impl fmt::Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { id, source } => {
                write!(f, "invalid attribute meta id '{id}': {source}")
            }
            Self::InvalidDefault { id, source } => {
                write!(f, "invalid default value for attribute meta '{id}': {source}")
            }
        }
    }
}

impl std::error::Error for MetaError {}

#[cfg(test)]
mod tests {
    use super::ModelsMeta;
    use crate::payload::MetaData;

    fn meta_payload() -> MetaData {
        serde_json::from_value(serde_json::json!({
            "definitions": [
                {"id": "abstract", "type": "boolean", "defaultValue": true,
                 "validationModel": {"mandatory": false},
                 "labels": {"en": "Is abstract", "bg": "Абстрактна"}},
                {"id": "label", "type": "label", "defaultValue": "",
                 "validationModel": {"mandatory": true},
                 "labels": {"en": "Label"}}
            ],
            "headerTypes": ["default_header", "compact_header"]
        }))
        .expect("meta payload")
    }

    #[test]
    fn builds_blocks_with_defaults_and_validation() {
        let meta = ModelsMeta::from_payload(&meta_payload()).expect("meta");

        let is_abstract = meta.definitions().get("abstract").expect("abstract meta");
        assert_eq!(is_abstract.attr_type(), "boolean");
        assert_eq!(is_abstract.default_value().as_bool(), Some(true));
        assert!(!is_abstract.mandatory());

        let label = meta.definitions().get("label").expect("label meta");
        assert!(label.mandatory());
        assert_eq!(label.descriptions().by_language("en"), Some("Label"));
    }

    #[test]
    fn header_types_are_exposed_in_declared_order() {
        let meta = ModelsMeta::from_payload(&meta_payload()).expect("meta");
        let types = meta
            .header_types()
            .iter()
            .map(|header_type| header_type.as_str())
            .collect::<Vec<_>>();
        assert_eq!(types, ["default_header", "compact_header"]);
    }

    #[test]
    fn rejects_type_mismatched_defaults() {
        let payload: MetaData = serde_json::from_value(serde_json::json!({
            "fields": [{"id": "order", "type": "integer", "defaultValue": "ten"}]
        }))
        .expect("meta payload");

        assert!(ModelsMeta::from_payload(&payload).is_err());
    }
}
