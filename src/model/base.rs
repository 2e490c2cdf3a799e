// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use super::attribute::ModelAttribute;
use super::description::{Languages, ModelDescription};
use super::ids::ModelId;
use super::list::ModelList;

/// Explicit discriminator for every node capability in the graph.
///
/// The string forms double as changeset selector segments
/// (`definition=...`, `field=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    Class,
    Definition,
    Property,
    Field,
    Region,
    Header,
    Attribute,
    Control,
    ControlParam,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Definition => "definition",
            Self::Property => "property",
            Self::Field => "field",
            Self::Region => "region",
            Self::Header => "header",
            Self::Attribute => "attribute",
            Self::Control => "control",
            Self::ControlParam => "controlParam",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared state of every model node: identity, a non-owning parent
/// back-reference used for navigation and inheritance checks, the
/// attribute collection and display descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBase {
    id: ModelId,
    kind: ModelKind,
    parent: Option<ModelId>,
    attributes: ModelList<ModelAttribute>,
    descriptions: ModelDescription,
    loaded: bool,
}

impl ModelBase {
    pub fn new(id: ModelId, kind: ModelKind) -> Self {
        Self {
            id,
            kind,
            parent: None,
            attributes: ModelList::new(),
            descriptions: ModelDescription::new(),
            loaded: false,
        }
    }

    pub fn id(&self) -> &ModelId {
        &self.id
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn parent(&self) -> Option<&ModelId> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: Option<ModelId>) {
        self.parent = parent;
    }

    pub fn attributes(&self) -> &ModelList<ModelAttribute> {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut ModelList<ModelAttribute> {
        &mut self.attributes
    }

    pub fn attribute(&self, id: &str) -> Option<&ModelAttribute> {
        self.attributes.get(id)
    }

    pub fn attribute_mut(&mut self, id: &str) -> Option<&mut ModelAttribute> {
        self.attributes.get_mut(id)
    }

    pub fn descriptions(&self) -> &ModelDescription {
        &self.descriptions
    }

    pub fn set_descriptions(&mut self, descriptions: ModelDescription) {
        self.descriptions = descriptions;
    }

    /// Display label under the given language pair, falling back to the id.
    pub fn description(&self, languages: &Languages) -> &str {
        self.descriptions.resolve(languages, self.id.as_str())
    }

    /// A node is dirty when any of its attributes diverged from its
    /// pre-edit value.
    pub fn is_dirty(&self) -> bool {
        self.attributes.models().any(ModelAttribute::is_dirty)
    }

    pub fn is_valid(&self) -> bool {
        self.attributes.models().all(ModelAttribute::is_valid)
    }

    /// Whether the node's attributes have been populated by a linker
    /// pass, as opposed to being a bare hierarchy stub.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn set_loaded(&mut self, loaded: bool) {
        self.loaded = loaded;
    }
}
