// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use super::base::{ModelBase, ModelKind};
use super::ids::ModelId;
use super::list::Keyed;

pub const ORDER_ATTRIBUTE: &str = "order";

/// A named grouping of fields inside a definition. Fields point at their
/// region through `ModelField::region_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRegion {
    base: ModelBase,
}

impl ModelRegion {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Region),
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

    /// Presentation order, when the region carries an order attribute.
    pub fn order(&self) -> Option<i64> {
        self.base
            .attribute(ORDER_ATTRIBUTE)
            .and_then(|attribute| attribute.value().as_integer())
    }
}

impl Keyed for ModelRegion {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}
