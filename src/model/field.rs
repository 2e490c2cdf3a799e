// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use super::base::{ModelBase, ModelKind};
use super::control::ModelControl;
use super::ids::ModelId;
use super::list::{Keyed, ModelList};
use super::region::ORDER_ATTRIBUTE;

/// A definition field. The `parent` back-reference on the base names the
/// definition that *owns* the field: a field listed on a definition whose
/// id differs from that parent is inherited from an ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    base: ModelBase,
    region_id: Option<ModelId>,
    /// The definition this field was forked from when an inherited field
    /// was overridden; `None` for fields that were never inherited.
    reference: Option<ModelId>,
    controls: ModelList<ModelControl>,
}

impl ModelField {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Field),
            region_id: None,
            reference: None,
            controls: ModelList::new(),
        }
    }

    pub fn id(&self) -> &ModelId {
        self.base.id()
    }

    pub fn base(&self) -> &ModelBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }

    pub fn region_id(&self) -> Option<&ModelId> {
        self.region_id.as_ref()
    }

    pub fn set_region_id(&mut self, region_id: Option<ModelId>) {
        self.region_id = region_id;
    }

    pub fn reference(&self) -> Option<&ModelId> {
        self.reference.as_ref()
    }

    pub fn set_reference(&mut self, reference: Option<ModelId>) {
        self.reference = reference;
    }

    pub fn controls(&self) -> &ModelList<ModelControl> {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ModelList<ModelControl> {
        &mut self.controls
    }

    /// Whether the field is owned by the given definition. Inherited
    /// fields keep the ancestor definition as their parent until they are
    /// forked by a copy-on-write edit.
    pub fn is_owned_by(&self, definition_id: &ModelId) -> bool {
        self.base.parent() == Some(definition_id)
    }

    /// Presentation order, when the field carries an order attribute.
    pub fn order(&self) -> Option<i64> {
        self.base
            .attribute(ORDER_ATTRIBUTE)
            .and_then(|attribute| attribute.value().as_integer())
    }
}

impl Keyed for ModelField {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}
