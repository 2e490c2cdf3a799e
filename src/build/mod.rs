// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Builders assemble the store in two passes: a hierarchy pass that
//! inserts bare stubs for every class and definition, and a linking pass
//! that attributes them from the flat model-data payload.
//!
//! The two-pass split exists because parent references can point forward
//! in the payload; resolution only runs once every stub is registered.

use std::collections::BTreeMap;
use std::fmt;

use crate::link::{
    link_attributes, link_descriptions, link_fields, link_headers, link_regions, LinkError,
};
use crate::meta::ModelsMeta;
use crate::model::{
    IdError, ModelClass, ModelDefinition, ModelDescription, ModelId, ModelProperty,
};
use crate::payload::{HierarchyNode, ModelData, PropertyData};
use crate::store::ModelStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    InvalidId {
        id: String,
        source: IdError,
    },
    /// A parent reference that no registered stub answers to.
    UnresolvedParent {
        id: String,
        parent: String,
    },
    /// Model data for an id the hierarchy never declared.
    UnknownModel {
        id: String,
    },
    Link(LinkError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { id, source } => write!(f, "invalid model id '{id}': {source}"),
            Self::UnresolvedParent { id, parent } => {
                write!(f, "model '{id}' references unknown parent '{parent}'")
            }
            Self::UnknownModel { id } => write!(f, "model data for undeclared model '{id}'"),
            Self::Link(source) => write!(f, "linking failed: {source}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Link(source) => Some(source),
            _ => None,
        }
    }
}

impl From<LinkError> for BuildError {
    fn from(source: LinkError) -> Self {
        Self::Link(source)
    }
}

fn model_id(id: &str) -> Result<ModelId, BuildError> {
    ModelId::new(id).map_err(|source| BuildError::InvalidId {
        id: id.to_owned(),
        source,
    })
}

/// Builds the store skeleton from the hierarchy payload.
///
/// Top-level nodes become class stubs; their `subTypes` (recursively)
/// become definition stubs typed by the enclosing class. Stubs carry
/// hierarchy labels as descriptions but no attributes until a linking
/// pass loads them.
///
/// A definition without an explicit parent resolves its parent to the
/// enclosing class, so walking up from any definition always reaches the
/// semantic hierarchy.
pub fn build_store_from_hierarchy(nodes: &[HierarchyNode]) -> Result<ModelStore, BuildError> {
    let mut store = ModelStore::new();
    // declared parent per stub id, resolved after every stub exists
    let mut class_parents = BTreeMap::new();
    let mut definition_parents = BTreeMap::new();

    for node in nodes {
        let class_id = model_id(&node.id)?;
        let mut class = ModelClass::new(class_id.clone());
        class
            .base_mut()
            .set_descriptions(labels_to_descriptions(&node.labels));
        store.classes_mut().insert(class);
        if let Some(parent) = &node.parent_id {
            class_parents.insert(node.id.clone(), parent.clone());
        }

        for sub_type in &node.sub_types {
            insert_definition_stubs(&mut store, sub_type, &class_id, &mut definition_parents)?;
        }
    }

    for (id, parent) in &class_parents {
        if !store.classes().contains(parent) {
            return Err(BuildError::UnresolvedParent {
                id: id.clone(),
                parent: parent.clone(),
            });
        }
        if let Some(class) = store.classes_mut().get_mut(id) {
            class.base_mut().set_parent(Some(model_id(parent)?));
        }
    }

    for (id, parent) in &definition_parents {
        if !store.definitions().contains(parent) {
            return Err(BuildError::UnresolvedParent {
                id: id.clone(),
                parent: parent.clone(),
            });
        }
        if let Some(definition) = store.definitions_mut().get_mut(id) {
            definition.base_mut().set_parent(Some(model_id(parent)?));
        }
    }

    Ok(store)
}

fn insert_definition_stubs(
    store: &mut ModelStore,
    node: &HierarchyNode,
    class_id: &ModelId,
    parents: &mut BTreeMap<String, String>,
) -> Result<(), BuildError> {
    let mut definition = ModelDefinition::new(model_id(&node.id)?);
    definition.set_type_ref(Some(class_id.clone()));
    definition.set_abstract(node.is_abstract);
    definition
        .base_mut()
        .set_descriptions(labels_to_descriptions(&node.labels));

    match &node.parent_id {
        Some(parent) => {
            parents.insert(node.id.clone(), parent.clone());
        }
        // root definitions of a class hang off the class itself
        None => definition.base_mut().set_parent(Some(class_id.clone())),
    }

    store.definitions_mut().insert(definition);

    for sub_type in &node.sub_types {
        insert_definition_stubs(store, sub_type, class_id, parents)?;
    }
    Ok(())
}

fn labels_to_descriptions(labels: &BTreeMap<String, String>) -> ModelDescription {
    ModelDescription::from_labels(
        labels
            .iter()
            .map(|(language, label)| (language.as_str(), label.as_str())),
    )
}

/// Attributes existing stubs from the flat model-data payload. Every
/// entry must name a stub the hierarchy pass registered.
pub fn link_model(
    store: &mut ModelStore,
    data: &ModelData,
    meta: &ModelsMeta,
) -> Result<(), BuildError> {
    for entry in &data.classes {
        let Some(class) = store.classes_mut().get_mut(&entry.id) else {
            return Err(BuildError::UnknownModel {
                id: entry.id.clone(),
            });
        };
        link_attributes(class.base_mut(), &entry.attributes, meta.semantics())?;
        link_descriptions(class.base_mut(), &entry.labels);
    }

    for entry in &data.definitions {
        if !store.definitions().contains(&entry.id) {
            return Err(BuildError::UnknownModel {
                id: entry.id.clone(),
            });
        }
        let definition_id = model_id(&entry.id)?;
        // regions first so fields can resolve their regionId
        {
            let definition = store
                .definitions_mut()
                .get_mut(&entry.id)
                .ok_or_else(|| BuildError::UnknownModel {
                    id: entry.id.clone(),
                })?;
            link_attributes(definition.base_mut(), &entry.attributes, meta.definitions())?;
            link_descriptions(definition.base_mut(), &entry.labels);
            link_regions(
                &definition_id,
                definition.regions_mut(),
                &entry.regions,
                meta,
            )?;
            link_fields(definition, &entry.fields, meta)?;
            link_headers(definition, &entry.headers, meta)?;
        }
    }

    Ok(())
}

/// Builds property nodes from the semantic properties payload. Each
/// property hangs off its domain class, which must already be stored.
pub fn build_properties(
    store: &mut ModelStore,
    raw: &[PropertyData],
    meta: &ModelsMeta,
) -> Result<(), BuildError> {
    for entry in raw {
        let mut property = ModelProperty::new(model_id(&entry.id)?);
        link_attributes(property.base_mut(), &entry.attributes, meta.properties())?;
        link_descriptions(property.base_mut(), &BTreeMap::new());

        if let Some(domain) = &entry.domain {
            if !store.classes().contains(domain) {
                return Err(BuildError::UnresolvedParent {
                    id: entry.id.clone(),
                    parent: domain.clone(),
                });
            }
            property.base_mut().set_parent(Some(model_id(domain)?));
        }

        store.properties_mut().insert(property);
    }
    Ok(())
}

/// Whether a definition inherits from the given ancestor, walking parent
/// links through the definition list.
pub fn inherits_from(store: &ModelStore, definition_id: &str, ancestor_id: &str) -> bool {
    let mut current = store.definition(definition_id);
    while let Some(definition) = current {
        let Some(parent) = definition.base().parent() else {
            return false;
        };
        if parent.as_str() == ancestor_id {
            return true;
        }
        current = store.definition(parent.as_str());
    }
    false
}
