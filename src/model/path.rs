// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use smallvec::SmallVec;

use super::base::ModelKind;
use super::ids::ModelId;

/// One `kind=id` step of a model path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathSegment {
    kind: ModelKind,
    id: ModelId,
}

impl PathSegment {
    pub fn new(kind: ModelKind, id: ModelId) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn id(&self) -> &ModelId {
        &self.id
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind, self.id)
    }
}

/// The address of a node or attribute inside the graph, rendered as the
/// canonical changeset selector `kind=id/kind=id/...`. Paths are short
/// (definition/field/control/attribute at the deepest), hence the inline
/// segment storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ModelPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl ModelPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(kind: ModelKind, id: ModelId) -> Self {
        let mut path = Self::new();
        path.push(kind, id);
        path
    }

    pub fn push(&mut self, kind: ModelKind, id: ModelId) {
        self.segments.push(PathSegment::new(kind, id));
    }

    #[must_use]
    pub fn join(mut self, kind: ModelKind, id: ModelId) -> Self {
        self.push(kind, id);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The canonical selector string submitted to the backend.
    pub fn selector(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
