// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Linkers populate model nodes from raw payload entries plus metadata.
//!
//! Every linker is a pure function of its inputs whose only side effect
//! is mutating the target node: it constructs child model objects, links
//! their attributes against the matching metadata block and sets the
//! parent back-reference. Malformed values are errors that propagate to
//! the caller; there is no local recovery.

use std::collections::BTreeMap;
use std::fmt;

use crate::meta::{MetaBlock, ModelAttributeMeta, ModelsMeta};
use crate::model::{
    IdError, ModelAttribute, ModelBase, ModelControl, ModelControlParam, ModelDescription,
    ModelField, ModelHeader, ModelId, ModelRegion, ModelValue, ValueError,
};
use crate::payload::{
    AttributeData, ControlData, ControlParamData, FieldData, HeaderData, RegionData,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    InvalidId {
        id: String,
        source: IdError,
    },
    Value {
        attribute: String,
        source: ValueError,
    },
    MissingRegion {
        field: String,
        region: String,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { id, source } => write!(f, "invalid model id '{id}': {source}"),
            Self::Value { attribute, source } => {
                write!(f, "invalid value for attribute '{attribute}': {source}")
            }
            Self::MissingRegion { field, region } => {
                write!(f, "field '{field}' references unknown region '{region}'")
            }
        }
    }
}

impl std::error::Error for LinkError {}

fn model_id(id: &str) -> Result<ModelId, LinkError> {
    ModelId::new(id).map_err(|source| LinkError::InvalidId {
        id: id.to_owned(),
        source,
    })
}

/// Materializes one attribute per metadata entry on the target node.
///
/// Raw entries are matched against the meta id or, for semantic
/// attributes, the meta URI; either way the created attribute carries the
/// canonical meta id, so URIs never leak into changeset selectors.
/// Entries without raw data link the metadata default. Raw entries with
/// no metadata counterpart are ignored.
pub fn link_attributes(
    base: &mut ModelBase,
    raw: &[AttributeData],
    meta: &MetaBlock,
) -> Result<(), LinkError> {
    for entry in meta.models() {
        let matched = raw
            .iter()
            .find(|attribute| attribute_matches(attribute, entry));

        let value = match matched {
            Some(attribute) => ModelValue::from_json(entry.attr_type(), &attribute.value)
                .map_err(|source| LinkError::Value {
                    attribute: attribute.name.clone(),
                    source,
                })?,
            None => entry.default_value().clone(),
        };

        base.attributes_mut().insert(ModelAttribute::new(
            entry.id().clone(),
            entry.attr_type(),
            value,
            entry.mandatory(),
        ));
    }
    base.set_loaded(true);
    Ok(())
}

fn attribute_matches(attribute: &AttributeData, meta: &ModelAttributeMeta) -> bool {
    attribute.name == meta.id().as_str() || Some(attribute.name.as_str()) == meta.uri()
}

pub const LABEL_ATTRIBUTE: &str = "label";

/// Populates display descriptions from the raw label map, falling back
/// to the values of the node's label attribute so descriptions mirror
/// what the label attribute holds.
///
/// When neither source yields a label the node keeps whatever
/// descriptions it already carries (semantic classes get theirs from the
/// hierarchy payload, which the flat model data does not repeat).
pub fn link_descriptions(base: &mut ModelBase, labels: &BTreeMap<String, String>) {
    let mut descriptions = ModelDescription::from_labels(
        labels
            .iter()
            .map(|(language, label)| (language.as_str(), label.as_str())),
    );

    if descriptions.is_empty() {
        if let Some(label) = base.attribute(LABEL_ATTRIBUTE) {
            descriptions = ModelDescription::from_value(label.value());
        }
    }

    if !descriptions.is_empty() {
        base.set_descriptions(descriptions);
    }
}

/// Constructs region nodes on the definition base.
pub fn link_regions(
    definition_id: &ModelId,
    regions: &mut crate::model::ModelList<ModelRegion>,
    raw: &[RegionData],
    meta: &ModelsMeta,
) -> Result<(), LinkError> {
    for entry in raw {
        let mut region = ModelRegion::new(model_id(&entry.id)?);
        link_attributes(region.base_mut(), &entry.attributes, meta.regions())?;
        link_descriptions(region.base_mut(), &BTreeMap::new());
        region.base_mut().set_parent(Some(definition_id.clone()));
        regions.insert(region);
    }
    Ok(())
}

/// Constructs field nodes with their controls. Regions must already be
/// linked: a field referencing an unknown region is an error.
///
/// A raw `parent` names the definition that declared the field; fields
/// delivered without one are owned by the containing definition. The
/// distinction drives copy-on-write when inherited fields are edited.
pub fn link_fields(
    definition: &mut crate::model::ModelDefinition,
    raw: &[FieldData],
    meta: &ModelsMeta,
) -> Result<(), LinkError> {
    let definition_id = definition.id().clone();
    for entry in raw {
        let mut field = ModelField::new(model_id(&entry.id)?);
        link_attributes(field.base_mut(), &entry.attributes, meta.fields())?;
        link_descriptions(field.base_mut(), &BTreeMap::new());
        let owner = match entry.parent.as_deref() {
            Some(parent) => model_id(parent)?,
            None => definition_id.clone(),
        };
        field.base_mut().set_parent(Some(owner));

        if let Some(region_id) = entry.region_id.as_deref() {
            if !definition.regions().contains(region_id) {
                return Err(LinkError::MissingRegion {
                    field: entry.id.clone(),
                    region: region_id.to_owned(),
                });
            }
            field.set_region_id(Some(model_id(region_id)?));
        }

        link_controls(&mut field, &entry.controls, meta)?;
        definition.fields_mut().insert(field);
    }
    Ok(())
}

/// Constructs control nodes (and their params) on a field.
pub fn link_controls(
    field: &mut ModelField,
    raw: &[ControlData],
    meta: &ModelsMeta,
) -> Result<(), LinkError> {
    let field_id = field.id().clone();
    for entry in raw {
        let mut control = ModelControl::new(model_id(&entry.id)?);
        link_attributes(control.base_mut(), &entry.attributes, meta.controls())?;
        control.base_mut().set_parent(Some(field_id.clone()));
        link_control_params(&mut control, &entry.control_params, meta)?;
        field.controls_mut().insert(control);
    }
    Ok(())
}

/// Constructs the parameter nodes of a control.
pub fn link_control_params(
    control: &mut ModelControl,
    raw: &[ControlParamData],
    meta: &ModelsMeta,
) -> Result<(), LinkError> {
    let control_id = control.id().clone();
    for entry in raw {
        let mut param = ModelControlParam::new(model_id(&entry.id)?);
        link_attributes(param.base_mut(), &entry.attributes, meta.control_params())?;
        param.base_mut().set_parent(Some(control_id.clone()));
        control.params_mut().insert(param);
    }
    Ok(())
}

/// Constructs header nodes on a definition: one per header type declared
/// by metadata, raw data or not. Raw entries for undeclared header types
/// are dropped.
pub fn link_headers(
    definition: &mut crate::model::ModelDefinition,
    raw: &[HeaderData],
    meta: &ModelsMeta,
) -> Result<(), LinkError> {
    let definition_id = definition.id().clone();
    for header_type in meta.header_types() {
        let mut header = ModelHeader::new(model_id(header_type)?, header_type.clone());

        let raw_entry = raw.iter().find(|entry| entry.id == header_type.as_str());
        let attributes = raw_entry.map(|entry| entry.attributes.as_slice()).unwrap_or(&[]);
        link_attributes(header.base_mut(), attributes, meta.headers())?;
        header.base_mut().set_parent(Some(definition_id.clone()));

        definition.headers_mut().insert(header);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{link_attributes, link_descriptions, link_fields, link_headers, link_regions};
    use crate::meta::ModelsMeta;
    use crate::model::{ModelBase, ModelDefinition, ModelId, ModelKind, ModelValue};
    use crate::payload::{AttributeData, FieldData, HeaderData, MetaData, RegionData};

    fn meta() -> ModelsMeta {
        let payload: MetaData = serde_json::from_value(serde_json::json!({
            "semantics": [
                {"id": "title", "uri": "http://purl.org/dc/terms/title", "type": "label",
                 "validationModel": {"mandatory": true}}
            ],
            "fields": [
                {"id": "name", "type": "identifier", "validationModel": {"mandatory": true}},
                {"id": "label", "type": "label"},
                {"id": "mandatory", "type": "boolean", "defaultValue": false},
                {"id": "displayType", "type": "displayType", "defaultValue": "HIDDEN"}
            ],
            "regions": [
                {"id": "label", "type": "label"},
                {"id": "order", "type": "integer"}
            ],
            "headers": [
                {"id": "value", "type": "label"}
            ],
            "headerTypes": ["default_header", "compact_header"]
        }))
        .expect("meta payload");
        ModelsMeta::from_payload(&payload).expect("meta")
    }

    fn raw_attributes(json: serde_json::Value) -> Vec<AttributeData> {
        serde_json::from_value(json).expect("raw attributes")
    }

    #[test]
    fn links_one_attribute_per_meta_entry_with_defaults() {
        let mut base = ModelBase::new(ModelId::new("title").expect("id"), ModelKind::Field);
        let raw = raw_attributes(serde_json::json!([
            {"name": "label", "type": "label", "value": {"en": "Title"}}
        ]));

        link_attributes(&mut base, &raw, meta().fields()).expect("link");

        assert_eq!(base.attributes().len(), 4);
        assert_eq!(
            base.attribute("label").expect("label").value().language("en"),
            Some("Title")
        );
        // missing raw entries fall back to metadata defaults
        assert_eq!(
            base.attribute("mandatory").expect("mandatory").value(),
            &ModelValue::Boolean(false)
        );
        assert_eq!(
            base.attribute("displayType").expect("displayType").value(),
            &ModelValue::from("HIDDEN")
        );
        assert!(base.is_loaded());
        // nothing is dirty right after linking
        assert!(!base.is_dirty());
    }

    #[test]
    fn links_semantic_attributes_by_uri_under_their_canonical_id() {
        let mut base = ModelBase::new(ModelId::new("emf:Entity").expect("id"), ModelKind::Class);
        let raw = raw_attributes(serde_json::json!([
            {"name": "http://purl.org/dc/terms/title", "type": "label",
             "value": {"en": "Entity", "bg": "Обект"}}
        ]));

        link_attributes(&mut base, &raw, meta().semantics()).expect("link");

        let title = base.attribute("title").expect("title attribute");
        assert_eq!(title.value().language("bg"), Some("Обект"));
    }

    #[test]
    fn type_mismatched_values_propagate_as_errors() {
        let mut base = ModelBase::new(ModelId::new("title").expect("id"), ModelKind::Field);
        let raw = raw_attributes(serde_json::json!([
            {"name": "mandatory", "type": "boolean", "value": 5}
        ]));

        assert!(link_attributes(&mut base, &raw, meta().fields()).is_err());
    }

    #[test]
    fn descriptions_fall_back_to_label_attribute() {
        let mut base = ModelBase::new(ModelId::new("title").expect("id"), ModelKind::Field);
        let raw = raw_attributes(serde_json::json!([
            {"name": "label", "type": "label", "value": {"en": "Title", "bg": "Наименование"}}
        ]));
        link_attributes(&mut base, &raw, meta().fields()).expect("link");

        link_descriptions(&mut base, &BTreeMap::new());
        assert_eq!(base.descriptions().by_language("bg"), Some("Наименование"));
    }

    #[test]
    fn descriptions_without_any_label_source_are_kept() {
        use crate::model::{Languages, ModelDescription};

        let mut base = ModelBase::new(ModelId::new("emf:Entity").expect("id"), ModelKind::Class);
        base.set_descriptions(ModelDescription::from_labels([("en", "Entity")]));
        // semantic attributes carry no "label" entry
        let raw = raw_attributes(serde_json::json!([
            {"name": "http://purl.org/dc/terms/title", "type": "label",
             "value": {"en": "Entity"}}
        ]));
        link_attributes(&mut base, &raw, meta().semantics()).expect("link");

        link_descriptions(&mut base, &BTreeMap::new());
        assert_eq!(base.description(&Languages::default()), "Entity");
    }

    #[test]
    fn fields_link_into_their_regions() {
        let mut definition =
            ModelDefinition::new(ModelId::new("media").expect("definition id"));
        let regions: Vec<RegionData> = serde_json::from_value(serde_json::json!([
            {"id": "generalDetails", "attributes": []}
        ]))
        .expect("regions");
        let fields: Vec<FieldData> = serde_json::from_value(serde_json::json!([
            {"id": "title", "regionId": "generalDetails", "attributes": []},
            {"id": "description", "attributes": []}
        ]))
        .expect("fields");

        let definition_id = definition.id().clone();
        link_regions(&definition_id, definition.regions_mut(), &regions, &meta())
            .expect("link regions");
        link_fields(&mut definition, &fields, &meta()).expect("link fields");

        let title = definition.field("title").expect("title field");
        assert_eq!(title.region_id().map(|id| id.as_str()), Some("generalDetails"));
        assert!(title.is_owned_by(&definition_id));

        let description = definition.field("description").expect("description field");
        assert_eq!(description.region_id(), None);
    }

    #[test]
    fn fields_with_a_declaring_parent_stay_owned_by_it() {
        let mut definition =
            ModelDefinition::new(ModelId::new("media").expect("definition id"));
        let fields: Vec<FieldData> = serde_json::from_value(serde_json::json!([
            {"id": "description", "parent": "entity", "attributes": []}
        ]))
        .expect("fields");

        link_fields(&mut definition, &fields, &meta()).expect("link fields");

        let inherited = definition.field("description").expect("description field");
        assert!(!inherited.is_owned_by(definition.id()));
        assert_eq!(
            inherited.base().parent().map(|id| id.as_str()),
            Some("entity")
        );
    }

    #[test]
    fn field_with_unknown_region_is_an_error() {
        let mut definition =
            ModelDefinition::new(ModelId::new("media").expect("definition id"));
        let fields: Vec<FieldData> = serde_json::from_value(serde_json::json!([
            {"id": "title", "regionId": "missing", "attributes": []}
        ]))
        .expect("fields");

        assert!(link_fields(&mut definition, &fields, &meta()).is_err());
    }

    #[test]
    fn missing_headers_are_synthesized_from_declared_types() {
        let mut definition =
            ModelDefinition::new(ModelId::new("media").expect("definition id"));
        let raw: Vec<HeaderData> = serde_json::from_value(serde_json::json!([
            {"id": "default_header",
             "attributes": [{"name": "value", "type": "label", "value": {"en": "Default"}}]},
            {"id": "undeclared_header", "attributes": []}
        ]))
        .expect("headers");

        link_headers(&mut definition, &raw, &meta()).expect("link headers");

        assert_eq!(definition.headers().len(), 2);
        assert!(definition.header("default_header").is_some());
        // synthesized even though the payload had no data for it
        assert!(definition.header("compact_header").is_some());
        // undeclared raw entries are dropped
        assert!(definition.header("undeclared_header").is_none());
    }
}
