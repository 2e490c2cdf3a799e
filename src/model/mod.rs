// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Core model node types: values, attributes, descriptions, the keyed
//! list, and one node struct per model capability.
//!
//! Parent links between nodes are non-owning [`ModelId`] back-references
//! resolved through the store; inheritance checks compare owner tags
//! instead of object identity.

pub mod attribute;
pub mod base;
pub mod class;
pub mod control;
pub mod definition;
pub mod description;
pub mod field;
pub mod header;
pub mod ids;
pub mod list;
pub mod path;
pub mod property;
pub mod region;
pub mod value;

pub use attribute::ModelAttribute;
pub use base::{ModelBase, ModelKind};
pub use class::ModelClass;
pub use control::{ModelControl, ModelControlParam};
pub use definition::ModelDefinition;
pub use description::{Languages, ModelDescription, DEFAULT_LANGUAGE};
pub use field::ModelField;
pub use header::ModelHeader;
pub use ids::{AttributeId, Id, IdError, ModelId};
pub use list::{Keyed, ModelList};
pub use path::{ModelPath, PathSegment};
pub use property::{sort_properties_by_label, ModelProperty};
pub use region::{ModelRegion, ORDER_ATTRIBUTE};
pub use value::{ModelValue, ValueError};
