// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Inbound REST payload DTOs.
//!
//! These mirror the JSON shapes delivered by the definitions/classes API:
//! hierarchy arrays, flat model data keyed by id, metadata maps and
//! semantic property arrays. They are plain serde carriers; all semantic
//! interpretation happens in the linkers and builders.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One node of the models hierarchy payload. Top-level entries are
/// semantic classes; entries under `subTypes` are definitions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub sub_types: Vec<HierarchyNode>,
}

/// The flat model-data payload: fully attributed classes and definitions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelData {
    #[serde(default)]
    pub classes: Vec<ClassData>,
    #[serde(default)]
    pub definitions: Vec<DefinitionData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassData {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionData {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub fields: Vec<FieldData>,
    #[serde(default)]
    pub regions: Vec<RegionData>,
    #[serde(default)]
    pub headers: Vec<HeaderData>,
}

/// A raw attribute: name, declared type tag and loosely typed value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeData {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldData {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub controls: Vec<ControlData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionData {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlData {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub control_params: Vec<ControlParamData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlParamData {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

/// A semantic property with its domain class.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyData {
    pub id: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

/// The models metadata payload: one block of attribute metadata per node
/// family plus the declared header types.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default)]
    pub semantics: Vec<AttributeMetaData>,
    #[serde(default)]
    pub definitions: Vec<AttributeMetaData>,
    #[serde(default)]
    pub properties: Vec<AttributeMetaData>,
    #[serde(default)]
    pub fields: Vec<AttributeMetaData>,
    #[serde(default)]
    pub regions: Vec<AttributeMetaData>,
    #[serde(default)]
    pub controls: Vec<AttributeMetaData>,
    #[serde(default)]
    pub control_params: Vec<AttributeMetaData>,
    #[serde(default)]
    pub headers: Vec<AttributeMetaData>,
    #[serde(default)]
    pub header_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeMetaData {
    pub id: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(rename = "type")]
    pub attr_type: String,
    #[serde(default)]
    pub default_value: serde_json::Value,
    #[serde(default)]
    pub validation_model: ValidationModelData,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationModelData {
    #[serde(default)]
    pub mandatory: bool,
}

#[cfg(test)]
mod tests {
    use super::{HierarchyNode, MetaData, ModelData};

    #[test]
    fn hierarchy_payload_deserializes() {
        let payload = serde_json::json!([
            {
                "id": "emf:Entity",
                "parentId": null,
                "labels": {"EN": "emf:Entity", "BG": "emf:Елемент"},
                "subTypes": [
                    {"id": "entity", "parentId": null, "abstract": true},
                    {"id": "media", "parentId": "entity", "abstract": true}
                ]
            }
        ]);

        let nodes: Vec<HierarchyNode> =
            serde_json::from_value(payload).expect("hierarchy payload");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].sub_types.len(), 2);
        assert_eq!(nodes[0].sub_types[1].parent_id.as_deref(), Some("entity"));
        assert!(nodes[0].sub_types[0].is_abstract);
    }

    #[test]
    fn model_data_defaults_optional_collections() {
        let payload = serde_json::json!({
            "definitions": [
                {
                    "id": "media",
                    "parent": "entity",
                    "attributes": [
                        {"name": "abstract", "type": "boolean", "value": false}
                    ],
                    "fields": [
                        {
                            "id": "title",
                            "regionId": "generalDetails",
                            "attributes": [
                                {"name": "mandatory", "type": "boolean", "value": true}
                            ]
                        }
                    ]
                }
            ]
        });

        let data: ModelData = serde_json::from_value(payload).expect("model data");
        assert!(data.classes.is_empty());
        let definition = &data.definitions[0];
        assert_eq!(definition.fields[0].region_id.as_deref(), Some("generalDetails"));
        assert!(definition.regions.is_empty());
        assert!(definition.headers.is_empty());
    }

    #[test]
    fn meta_payload_defaults_validation_model() {
        let payload = serde_json::json!({
            "fields": [
                {"id": "name", "type": "identifier", "defaultValue": "",
                 "validationModel": {"mandatory": true}},
                {"id": "codeList", "type": "codeList"}
            ],
            "headerTypes": ["default_header", "compact_header"]
        });

        let meta: MetaData = serde_json::from_value(payload).expect("meta payload");
        assert!(meta.fields[0].validation_model.mandatory);
        assert!(!meta.fields[1].validation_model.mandatory);
        assert_eq!(meta.header_types.len(), 2);
    }
}
