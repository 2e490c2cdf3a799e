// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! The cross-type model registry: one keyed list per top-level model
//! kind, with lookup across all kinds.

use crate::model::{
    ModelBase, ModelClass, ModelDefinition, ModelKind, ModelList, ModelProperty,
};

/// Registry of every top-level node of the editing session. Nested nodes
/// (fields, regions, controls, headers) live on their definitions and are
/// addressed through them.
///
/// Mutation is single-threaded and synchronous; the store has no interior
/// mutability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelStore {
    classes: ModelList<ModelClass>,
    definitions: ModelList<ModelDefinition>,
    properties: ModelList<ModelProperty>,
}

/// A kind-tagged borrow of a stored top-level node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoredModel<'a> {
    Class(&'a ModelClass),
    Definition(&'a ModelDefinition),
    Property(&'a ModelProperty),
}

impl<'a> StoredModel<'a> {
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Class(_) => ModelKind::Class,
            Self::Definition(_) => ModelKind::Definition,
            Self::Property(_) => ModelKind::Property,
        }
    }

    pub fn base(&self) -> &'a ModelBase {
        match self {
            Self::Class(class) => class.base(),
            Self::Definition(definition) => definition.base(),
            Self::Property(property) => property.base(),
        }
    }
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &ModelList<ModelClass> {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ModelList<ModelClass> {
        &mut self.classes
    }

    pub fn definitions(&self) -> &ModelList<ModelDefinition> {
        &self.definitions
    }

    pub fn definitions_mut(&mut self) -> &mut ModelList<ModelDefinition> {
        &mut self.definitions
    }

    pub fn properties(&self) -> &ModelList<ModelProperty> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ModelList<ModelProperty> {
        &mut self.properties
    }

    pub fn class(&self, id: &str) -> Option<&ModelClass> {
        self.classes.get(id)
    }

    pub fn definition(&self, id: &str) -> Option<&ModelDefinition> {
        self.definitions.get(id)
    }

    pub fn definition_mut(&mut self, id: &str) -> Option<&mut ModelDefinition> {
        self.definitions.get_mut(id)
    }

    pub fn property(&self, id: &str) -> Option<&ModelProperty> {
        self.properties.get(id)
    }

    /// Lookup across all kinds, short-circuiting on the first list that
    /// contains the id (classes, then definitions, then properties).
    pub fn find(&self, id: &str) -> Option<StoredModel<'_>> {
        if let Some(class) = self.classes.get(id) {
            return Some(StoredModel::Class(class));
        }
        if let Some(definition) = self.definitions.get(id) {
            return Some(StoredModel::Definition(definition));
        }
        self.properties.get(id).map(StoredModel::Property)
    }

    pub fn find_kind(&self, id: &str) -> Option<ModelKind> {
        self.find(id).map(|model| model.kind())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Properties whose domain parent is the given class, in insertion
    /// order.
    pub fn class_properties<'a>(
        &'a self,
        class_id: &'a str,
    ) -> impl Iterator<Item = &'a ModelProperty> {
        self.properties
            .models()
            .filter(move |property| {
                property
                    .base()
                    .parent()
                    .is_some_and(|parent| parent.as_str() == class_id)
            })
    }
}
