// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use super::base::{ModelBase, ModelKind};
use super::field::ModelField;
use super::header::ModelHeader;
use super::ids::ModelId;
use super::list::{Keyed, ModelList};
use super::region::ModelRegion;

/// A definition node. Its `parent` back-reference points at the parent
/// definition it inherits from; `type_ref` names the semantic class the
/// definition belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDefinition {
    base: ModelBase,
    type_ref: Option<ModelId>,
    is_abstract: bool,
    fields: ModelList<ModelField>,
    regions: ModelList<ModelRegion>,
    headers: ModelList<ModelHeader>,
}

impl ModelDefinition {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Definition),
            type_ref: None,
            is_abstract: false,
            fields: ModelList::new(),
            regions: ModelList::new(),
            headers: ModelList::new(),
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

    pub fn type_ref(&self) -> Option<&ModelId> {
        self.type_ref.as_ref()
    }

    pub fn set_type_ref(&mut self, type_ref: Option<ModelId>) {
        self.type_ref = type_ref;
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn fields(&self) -> &ModelList<ModelField> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ModelList<ModelField> {
        &mut self.fields
    }

    pub fn field(&self, id: &str) -> Option<&ModelField> {
        self.fields.get(id)
    }

    pub fn regions(&self) -> &ModelList<ModelRegion> {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut ModelList<ModelRegion> {
        &mut self.regions
    }

    pub fn region(&self, id: &str) -> Option<&ModelRegion> {
        self.regions.get(id)
    }

    pub fn headers(&self) -> &ModelList<ModelHeader> {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut ModelList<ModelHeader> {
        &mut self.headers
    }

    pub fn header(&self, id: &str) -> Option<&ModelHeader> {
        self.headers.get(id)
    }

    /// Fields belonging to the given region, in insertion order.
    pub fn region_fields<'a>(
        &'a self,
        region_id: &'a ModelId,
    ) -> impl Iterator<Item = &'a ModelField> {
        self.fields
            .models()
            .filter(move |field| field.region_id() == Some(region_id))
    }

    /// Presentation order for the field list: by the order attribute with
    /// unordered fields last, ties broken owned-before-inherited. Two
    /// stable passes, so remaining ties keep their payload order.
    pub fn sort_fields(&mut self) {
        let owner = self.base.id().clone();
        self.fields
            .sort_by(|left, right| {
                let left_inherited = !left.is_owned_by(&owner);
                let right_inherited = !right.is_owned_by(&owner);
                left_inherited.cmp(&right_inherited)
            });
        self.fields.sort_by(|left, right| {
            left.order()
                .unwrap_or(i64::MAX)
                .cmp(&right.order().unwrap_or(i64::MAX))
        });
    }

    /// Presentation order for the region list: by the order attribute,
    /// unordered regions last.
    pub fn sort_regions(&mut self) {
        self.regions.sort_by(|left, right| {
            left.order()
                .unwrap_or(i64::MAX)
                .cmp(&right.order().unwrap_or(i64::MAX))
        });
    }
}

impl Keyed for ModelDefinition {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}
