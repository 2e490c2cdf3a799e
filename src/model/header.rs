// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use smol_str::SmolStr;

use super::base::{ModelBase, ModelKind};
use super::ids::ModelId;
use super::list::Keyed;

/// A rendered header variant of a definition (e.g. `default_header`,
/// `compact_header`). One header node exists per header type declared by
/// metadata, whether or not the backend delivered data for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHeader {
    base: ModelBase,
    header_type: SmolStr,
}

impl ModelHeader {
    pub fn new(id: ModelId, header_type: impl Into<SmolStr>) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Header),
            header_type: header_type.into(),
        }
    }

    pub fn id(&self) -> &ModelId {
        self.base.id()
    }

    pub fn header_type(&self) -> &str {
        &self.header_type
    }

    pub fn base(&self) -> &ModelBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }
}

impl Keyed for ModelHeader {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}
