// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! Edit actions and their processors.
//!
//! An action is a transient command: created on user interaction with the
//! snapshots its undo needs, executed once against the store, optionally
//! restored once, and turned into a changeset for backend submission. The
//! dispatcher routes each action to its processor through an explicit
//! registration table built at startup.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use crate::model::{
    AttributeId, Id, ModelAttribute, ModelBase, ModelControl, ModelControlParam, ModelDefinition,
    ModelField, ModelId, ModelKind, ModelPath, ModelProperty, ModelRegion, ModelValue,
};
use crate::store::ModelStore;

/// The declared type tag of an action, used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    CreateField,
    CreateProperty,
    CreateControl,
    CreateControlParam,
    RemoveControl,
    RestoreInheritedAttribute,
    RestoreInheritedField,
    RestoreInheritedRegion,
    RestoreInheritedControl,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateField => "createField",
            Self::CreateProperty => "createProperty",
            Self::CreateControl => "createControl",
            Self::CreateControlParam => "createControlParam",
            Self::RemoveControl => "removeControl",
            Self::RestoreInheritedAttribute => "restoreInheritedAttribute",
            Self::RestoreInheritedField => "restoreInheritedField",
            Self::RestoreInheritedRegion => "restoreInheritedRegion",
            Self::RestoreInheritedControl => "restoreInheritedControl",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transient edit command. Each variant carries its target and
/// context ids plus the snapshots `restore` needs, captured when the
/// action is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelAction {
    CreateField {
        definition: ModelId,
        field: ModelField,
    },
    CreateProperty {
        class: ModelId,
        property: ModelProperty,
    },
    CreateControl {
        definition: ModelId,
        field: ModelId,
        control: ModelControl,
        /// The field as it stood before execution; restoring an action
        /// whose context was forked collapses back to this snapshot.
        prior_field: ModelField,
    },
    CreateControlParam {
        definition: ModelId,
        field: ModelId,
        control: ModelId,
        param: ModelControlParam,
    },
    RemoveControl {
        definition: ModelId,
        field: ModelId,
        control: ModelControl,
    },
    RestoreInheritedAttribute {
        target: ModelId,
        /// Overridden attributes as they stood before execution.
        attributes: Vec<ModelAttribute>,
    },
    RestoreInheritedField {
        definition: ModelId,
        /// The overridden field as it stood before execution.
        field: ModelField,
    },
    RestoreInheritedRegion {
        definition: ModelId,
        /// The overridden region as it stood before execution.
        region: ModelRegion,
    },
    RestoreInheritedControl {
        definition: ModelId,
        field: ModelId,
        control: ModelControl,
    },
}

impl ModelAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::CreateField { .. } => ActionType::CreateField,
            Self::CreateProperty { .. } => ActionType::CreateProperty,
            Self::CreateControl { .. } => ActionType::CreateControl,
            Self::CreateControlParam { .. } => ActionType::CreateControlParam,
            Self::RemoveControl { .. } => ActionType::RemoveControl,
            Self::RestoreInheritedAttribute { .. } => ActionType::RestoreInheritedAttribute,
            Self::RestoreInheritedField { .. } => ActionType::RestoreInheritedField,
            Self::RestoreInheritedRegion { .. } => ActionType::RestoreInheritedRegion,
            Self::RestoreInheritedControl { .. } => ActionType::RestoreInheritedControl,
        }
    }

    /// Creates a control action, snapshotting the context field so a
    /// copy-on-write fork can be collapsed on restore.
    pub fn create_control(
        store: &ModelStore,
        definition: ModelId,
        field: ModelId,
        control: ModelControl,
    ) -> Result<Self, ActionError> {
        let prior_field = lookup_field(store, &definition, &field)?.clone();
        Ok(Self::CreateControl {
            definition,
            field,
            control,
            prior_field,
        })
    }

    /// Creates a remove-control action carrying the control snapshot its
    /// restore re-attaches.
    pub fn remove_control(
        store: &ModelStore,
        definition: ModelId,
        field: ModelId,
        control_id: &str,
    ) -> Result<Self, ActionError> {
        let control = lookup_control(store, &definition, &field, control_id)?.clone();
        Ok(Self::RemoveControl {
            definition,
            field,
            control,
        })
    }

    /// Creates a restore-inherited-attribute action, snapshotting the
    /// overridden values of the listed attributes.
    pub fn restore_inherited_attribute(
        store: &ModelStore,
        target: ModelId,
        attribute_ids: &[&str],
    ) -> Result<Self, ActionError> {
        let Some(model) = store.find(target.as_str()) else {
            return Err(ActionError::UnknownModel {
                id: target.into_string(),
            });
        };
        let mut attributes = Vec::with_capacity(attribute_ids.len());
        for &id in attribute_ids {
            let Some(attribute) = model.base().attribute(id) else {
                return Err(ActionError::NotFound {
                    kind: ModelKind::Attribute,
                    id: id.to_owned(),
                });
            };
            attributes.push(attribute.clone());
        }
        Ok(Self::RestoreInheritedAttribute { target, attributes })
    }

    /// Creates a restore-inherited-field action carrying the overridden
    /// field snapshot.
    pub fn restore_inherited_field(
        store: &ModelStore,
        definition: ModelId,
        field: ModelId,
    ) -> Result<Self, ActionError> {
        let field = lookup_field(store, &definition, &field)?.clone();
        Ok(Self::RestoreInheritedField { definition, field })
    }

    /// Creates a restore-inherited-region action carrying the overridden
    /// region snapshot.
    pub fn restore_inherited_region(
        store: &ModelStore,
        definition: ModelId,
        region: ModelId,
    ) -> Result<Self, ActionError> {
        let region = lookup_region(store, &definition, &region)?.clone();
        Ok(Self::RestoreInheritedRegion { definition, region })
    }

    /// Creates a restore-inherited-control action carrying the overridden
    /// control snapshot.
    pub fn restore_inherited_control(
        store: &ModelStore,
        definition: ModelId,
        field: ModelId,
        control_id: &str,
    ) -> Result<Self, ActionError> {
        let control = lookup_control(store, &definition, &field, control_id)?.clone();
        Ok(Self::RestoreInheritedControl {
            definition,
            field,
            control,
        })
    }
}

/// Operation tag of one changeset entry, serialized in the backend's
/// spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeOperation {
    Modify,
    Restore,
    Create,
}

/// One entry of the outbound changeset: a selector addressing the node
/// or attribute, the operation, and the new value when one applies.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ModelChange {
    pub selector: String,
    pub operation: ChangeOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ModelChange {
    pub fn modify(path: &ModelPath, value: Option<serde_json::Value>) -> Self {
        Self {
            selector: path.selector(),
            operation: ChangeOperation::Modify,
            value,
        }
    }

    pub fn restore(path: &ModelPath) -> Self {
        Self {
            selector: path.selector(),
            operation: ChangeOperation::Restore,
            value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// No processor registered for the action's declared type while the
    /// dispatcher enforces registration.
    NoProcessor { action_type: ActionType },
    NotFound { kind: ModelKind, id: String },
    AlreadyExists { kind: ModelKind, id: String },
    /// A top-level model id that no store list answers to.
    UnknownModel { id: String },
    /// An action handed to a processor of a different declared type.
    TypeMismatch {
        expected: ActionType,
        found: ActionType,
    },
    /// A restore-inherited action against a model with no parent to
    /// inherit from.
    MissingInheritedSource { id: String },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProcessor { action_type } => {
                write!(f, "no processor registered for action type '{action_type}'")
            }
            Self::NotFound { kind, id } => write!(f, "{kind} '{id}' not found"),
            Self::AlreadyExists { kind, id } => write!(f, "{kind} '{id}' already exists"),
            Self::UnknownModel { id } => write!(f, "no stored model with id '{id}'"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "processor for '{expected}' received a '{found}' action")
            }
            Self::MissingInheritedSource { id } => {
                write!(f, "model '{id}' has no parent to restore from")
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// A processor applies, undoes, and describes one action type. `restore`
/// is the exact inverse of `execute`.
pub trait ActionProcessor {
    fn action_type(&self) -> ActionType;

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError>;

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError>;

    fn changeset(
        &self,
        store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError>;
}

/// Routes actions to processors through an explicit registration table.
///
/// With enforcement on (the default) an unregistered action type is an
/// immediate error; with enforcement off such actions are skipped, for
/// optional-hook invocations.
pub struct ActionDispatcher {
    processors: BTreeMap<ActionType, Box<dyn ActionProcessor>>,
    enforce: bool,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self {
            processors: BTreeMap::new(),
            enforce: true,
        }
    }

    /// A dispatcher with every built-in processor registered.
    pub fn with_default_processors() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Box::new(CreateFieldProcessor));
        dispatcher.register(Box::new(CreatePropertyProcessor));
        dispatcher.register(Box::new(CreateControlProcessor));
        dispatcher.register(Box::new(CreateControlParamProcessor));
        dispatcher.register(Box::new(RemoveControlProcessor));
        dispatcher.register(Box::new(RestoreInheritedAttributeProcessor));
        dispatcher.register(Box::new(RestoreInheritedFieldProcessor));
        dispatcher.register(Box::new(RestoreInheritedRegionProcessor));
        dispatcher.register(Box::new(RestoreInheritedControlProcessor));
        dispatcher
    }

    pub fn register(&mut self, processor: Box<dyn ActionProcessor>) {
        self.processors.insert(processor.action_type(), processor);
    }

    pub fn set_enforce(&mut self, enforce: bool) {
        self.enforce = enforce;
    }

    pub fn enforce(&self) -> bool {
        self.enforce
    }

    fn processor(&self, action: &ModelAction) -> Result<Option<&dyn ActionProcessor>, ActionError> {
        match self.processors.get(&action.action_type()) {
            Some(processor) => Ok(Some(processor.as_ref())),
            None if self.enforce => Err(ActionError::NoProcessor {
                action_type: action.action_type(),
            }),
            None => Ok(None),
        }
    }

    /// Executes the actions in order, returning how many were applied.
    pub fn execute(
        &self,
        store: &mut ModelStore,
        actions: &[ModelAction],
    ) -> Result<usize, ActionError> {
        let mut applied = 0;
        for action in actions {
            if let Some(processor) = self.processor(action)? {
                processor.execute(store, action)?;
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Undoes the actions in reverse order, returning how many were
    /// restored.
    pub fn restore(
        &self,
        store: &mut ModelStore,
        actions: &[ModelAction],
    ) -> Result<usize, ActionError> {
        let mut restored = 0;
        for action in actions.iter().rev() {
            if let Some(processor) = self.processor(action)? {
                processor.restore(store, action)?;
                restored += 1;
            }
        }
        Ok(restored)
    }

    /// The concatenated changeset of all actions, in order.
    pub fn changeset(
        &self,
        store: &ModelStore,
        actions: &[ModelAction],
    ) -> Result<Vec<ModelChange>, ActionError> {
        let mut changes = Vec::new();
        for action in actions {
            if let Some(processor) = self.processor(action)? {
                changes.extend(processor.changeset(store, action)?);
            }
        }
        Ok(changes)
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::with_default_processors()
    }
}

include!("processors.rs");
