// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use smol_str::SmolStr;

use super::ids::AttributeId;
use super::list::Keyed;
use super::value::ModelValue;

/// A single editable attribute of a model node.
///
/// Holds the current value and the pre-edit ("old") value the node was
/// linked with. The dirty flag is never stored: an attribute is dirty
/// exactly when the current value differs from the old value under
/// normalized comparison (see [`ModelValue::normalized_eq`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAttribute {
    id: AttributeId,
    attr_type: SmolStr,
    value: ModelValue,
    old_value: ModelValue,
    mandatory: bool,
}

impl ModelAttribute {
    pub fn new(
        id: AttributeId,
        attr_type: impl Into<SmolStr>,
        value: ModelValue,
        mandatory: bool,
    ) -> Self {
        Self {
            id,
            attr_type: attr_type.into(),
            old_value: value.clone(),
            value,
            mandatory,
        }
    }

    pub fn id(&self) -> &AttributeId {
        &self.id
    }

    pub fn attr_type(&self) -> &str {
        &self.attr_type
    }

    pub fn value(&self) -> &ModelValue {
        &self.value
    }

    pub fn old_value(&self) -> &ModelValue {
        &self.old_value
    }

    pub fn mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn set_value(&mut self, value: ModelValue) {
        self.value = value;
    }

    /// Reverts the current value back to the pre-edit value.
    pub fn revert(&mut self) {
        self.value = self.old_value.clone();
    }

    /// Accepts the current value as the new baseline, e.g. after the
    /// backend acknowledged a submitted changeset.
    pub fn commit(&mut self) {
        self.old_value = self.value.clone();
    }

    pub fn is_dirty(&self) -> bool {
        !self.value.normalized_eq(&self.old_value)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// A mandatory attribute with an empty value is invalid; everything
    /// else is valid.
    pub fn is_valid(&self) -> bool {
        !(self.mandatory && self.value.is_empty())
    }
}

impl Keyed for ModelAttribute {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}
