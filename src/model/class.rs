// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use super::base::{ModelBase, ModelKind};
use super::ids::ModelId;
use super::list::Keyed;

/// A semantic class node. Its `parent` back-reference points at the
/// parent class in the ontology; semantic properties reference the class
/// as their domain through their own parent link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelClass {
    base: ModelBase,
}

impl ModelClass {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Class),
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

impl Keyed for ModelClass {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}
