// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use super::base::{ModelBase, ModelKind};
use super::ids::ModelId;
use super::list::{Keyed, ModelList};

/// A UI control attached to a field (e.g. a picker or a default-value
/// expression), carrying its own attributes and parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelControl {
    base: ModelBase,
    params: ModelList<ModelControlParam>,
}

impl ModelControl {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Control),
            params: ModelList::new(),
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

    pub fn params(&self) -> &ModelList<ModelControlParam> {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ModelList<ModelControlParam> {
        &mut self.params
    }

    /// Whether this control belongs to the field it currently sits on, as
    /// opposed to being propagated from an inherited field.
    pub fn is_owned_by(&self, field_id: &ModelId) -> bool {
        self.base.parent() == Some(field_id)
    }
}

impl Keyed for ModelControl {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}

/// A single named parameter of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelControlParam {
    base: ModelBase,
}

impl ModelControlParam {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::ControlParam),
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
}

impl Keyed for ModelControlParam {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}
