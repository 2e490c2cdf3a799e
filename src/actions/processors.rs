// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

/// Built-in processor implementations and shared lookup helpers. Keeps
/// `actions::mod` focused on the public action types and dispatch.
fn mismatch(expected: ActionType, action: &ModelAction) -> ActionError {
    ActionError::TypeMismatch {
        expected,
        found: action.action_type(),
    }
}

fn not_found<T>(kind: ModelKind, id: &Id<T>) -> ActionError {
    ActionError::NotFound {
        kind,
        id: id.as_str().to_owned(),
    }
}

fn already_exists<T>(kind: ModelKind, id: &Id<T>) -> ActionError {
    ActionError::AlreadyExists {
        kind,
        id: id.as_str().to_owned(),
    }
}

fn lookup_field<'a>(
    store: &'a ModelStore,
    definition: &ModelId,
    field: &ModelId,
) -> Result<&'a ModelField, ActionError> {
    let Some(target) = store.definition(definition.as_str()) else {
        return Err(not_found(ModelKind::Definition, definition));
    };
    target
        .field(field.as_str())
        .ok_or_else(|| not_found(ModelKind::Field, field))
}

fn lookup_control<'a>(
    store: &'a ModelStore,
    definition: &ModelId,
    field: &ModelId,
    control_id: &str,
) -> Result<&'a ModelControl, ActionError> {
    let context = lookup_field(store, definition, field)?;
    context.controls().get(control_id).ok_or_else(|| ActionError::NotFound {
        kind: ModelKind::Control,
        id: control_id.to_owned(),
    })
}

fn lookup_region<'a>(
    store: &'a ModelStore,
    definition: &ModelId,
    region: &ModelId,
) -> Result<&'a ModelRegion, ActionError> {
    let Some(target) = store.definition(definition.as_str()) else {
        return Err(not_found(ModelKind::Definition, definition));
    };
    target
        .region(region.as_str())
        .ok_or_else(|| not_found(ModelKind::Region, region))
}

/// The inherited original of an overridden field: the fork source when
/// the field records one, else the nearest ancestor definition carrying
/// a field with the same id.
fn inherited_field(
    store: &ModelStore,
    definition: &ModelId,
    field_id: &str,
) -> Option<ModelField> {
    let context = store.definition(definition.as_str())?.field(field_id)?;
    if let Some(found) = context
        .reference()
        .and_then(|source| store.definition(source.as_str()))
        .and_then(|source| source.field(field_id))
    {
        return Some(found.clone());
    }

    let mut parent = store.definition(definition.as_str())?.base().parent().cloned();
    while let Some(ancestor_id) = parent {
        let Some(ancestor) = store.definition(ancestor_id.as_str()) else {
            // parent chains end at a semantic class
            return None;
        };
        if let Some(found) = ancestor.field(field_id) {
            return Some(found.clone());
        }
        parent = ancestor.base().parent().cloned();
    }
    None
}

/// The inherited original of an overridden region, from the nearest
/// ancestor definition carrying a region with the same id.
fn inherited_region(
    store: &ModelStore,
    definition: &ModelId,
    region_id: &str,
) -> Option<ModelRegion> {
    let mut parent = store.definition(definition.as_str())?.base().parent().cloned();
    while let Some(ancestor_id) = parent {
        let ancestor = store.definition(ancestor_id.as_str())?;
        if let Some(found) = ancestor.region(region_id) {
            return Some(found.clone());
        }
        parent = ancestor.base().parent().cloned();
    }
    None
}

fn definition_mut<'a>(
    store: &'a mut ModelStore,
    id: &ModelId,
) -> Result<&'a mut ModelDefinition, ActionError> {
    store
        .definition_mut(id.as_str())
        .ok_or_else(|| not_found(ModelKind::Definition, id))
}

fn base_mut_of<'a>(
    store: &'a mut ModelStore,
    id: &ModelId,
) -> Result<&'a mut ModelBase, ActionError> {
    if store.classes().contains(id.as_str()) {
        let class = store
            .classes_mut()
            .get_mut(id.as_str())
            .ok_or_else(|| not_found(ModelKind::Class, id))?;
        return Ok(class.base_mut());
    }
    if store.definitions().contains(id.as_str()) {
        let definition = store
            .definitions_mut()
            .get_mut(id.as_str())
            .ok_or_else(|| not_found(ModelKind::Definition, id))?;
        return Ok(definition.base_mut());
    }
    let property = store
        .properties_mut()
        .get_mut(id.as_str())
        .ok_or_else(|| ActionError::UnknownModel {
            id: id.as_str().to_owned(),
        })?;
    Ok(property.base_mut())
}

/// Changeset entries for a freshly created node: every non-empty
/// attribute regardless of dirtiness, tagged MODIFY, so the backend
/// receives the complete initial state.
fn creation_changes(path: &ModelPath, base: &ModelBase) -> Vec<ModelChange> {
    base.attributes()
        .models()
        .filter(|attribute| !attribute.is_empty())
        .map(|attribute| {
            let attribute_path = path
                .clone()
                .join(ModelKind::Attribute, attribute.id().clone().retag());
            ModelChange::modify(&attribute_path, Some(attribute.value().to_json()))
        })
        .collect()
}

pub struct CreateFieldProcessor;

impl ActionProcessor for CreateFieldProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::CreateField
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateField { definition, field } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        if target.fields().contains(field.id().as_str()) {
            return Err(already_exists(ModelKind::Field, field.id()));
        }
        let mut field = field.clone();
        field.base_mut().set_parent(Some(definition.clone()));
        target.fields_mut().insert(field);
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateField { definition, field } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        if target.fields_mut().remove(field.id().as_str()).is_none() {
            return Err(not_found(ModelKind::Field, field.id()));
        }
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::CreateField { definition, field } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Field, field.id().clone());
        Ok(creation_changes(&path, field.base()))
    }
}

pub struct CreatePropertyProcessor;

impl ActionProcessor for CreatePropertyProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::CreateProperty
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateProperty { class, property } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        if !store.classes().contains(class.as_str()) {
            return Err(not_found(ModelKind::Class, class));
        }
        if store.properties().contains(property.id().as_str()) {
            return Err(already_exists(ModelKind::Property, property.id()));
        }
        let mut property = property.clone();
        property.base_mut().set_parent(Some(class.clone()));
        store.properties_mut().insert(property);
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateProperty { property, .. } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        if store
            .properties_mut()
            .remove(property.id().as_str())
            .is_none()
        {
            return Err(not_found(ModelKind::Property, property.id()));
        }
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::CreateProperty { class, property } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Class, class.clone())
            .join(ModelKind::Property, property.id().clone());
        Ok(creation_changes(&path, property.base()))
    }
}

pub struct CreateControlProcessor;

impl ActionProcessor for CreateControlProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::CreateControl
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateControl {
            definition,
            field,
            control,
            ..
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };

        if context.controls().contains(control.id().as_str()) {
            return Err(already_exists(ModelKind::Control, control.id()));
        }

        // copy-on-write: an inherited context is forked into the
        // definition before it may carry an owned control; the duplicate
        // check above runs first so a failed execute leaves no fork
        if !context.is_owned_by(definition) {
            let source = context.base().parent().cloned();
            context.base_mut().set_parent(Some(definition.clone()));
            context.set_reference(source);
        }
        let mut control = control.clone();
        control.base_mut().set_parent(Some(field.clone()));
        context.controls_mut().insert(control);
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateControl {
            definition,
            field,
            control,
            prior_field,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        if prior_field.is_owned_by(definition) {
            let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
                return Err(not_found(ModelKind::Field, field));
            };
            if context.controls_mut().remove(control.id().as_str()).is_none() {
                return Err(not_found(ModelKind::Control, control.id()));
            }
        } else {
            if !target.fields().contains(field.as_str()) {
                return Err(not_found(ModelKind::Field, field));
            }
            // collapse the fork back to the inherited original
            target.fields_mut().insert(prior_field.clone());
        }
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::CreateControl {
            definition,
            field,
            control,
            ..
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Field, field.clone())
            .join(ModelKind::Control, control.id().clone());
        Ok(creation_changes(&path, control.base()))
    }
}

pub struct CreateControlParamProcessor;

impl ActionProcessor for CreateControlParamProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::CreateControlParam
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateControlParam {
            definition,
            field,
            control,
            param,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };
        let Some(owner) = context.controls_mut().get_mut(control.as_str()) else {
            return Err(not_found(ModelKind::Control, control));
        };
        if owner.params().contains(param.id().as_str()) {
            return Err(already_exists(ModelKind::ControlParam, param.id()));
        }
        let mut param = param.clone();
        param.base_mut().set_parent(Some(control.clone()));
        owner.params_mut().insert(param);
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::CreateControlParam {
            definition,
            field,
            control,
            param,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };
        let Some(owner) = context.controls_mut().get_mut(control.as_str()) else {
            return Err(not_found(ModelKind::Control, control));
        };
        if owner.params_mut().remove(param.id().as_str()).is_none() {
            return Err(not_found(ModelKind::ControlParam, param.id()));
        }
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::CreateControlParam {
            definition,
            field,
            control,
            param,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Field, field.clone())
            .join(ModelKind::Control, control.clone())
            .join(ModelKind::ControlParam, param.id().clone());
        Ok(creation_changes(&path, param.base()))
    }
}

pub struct RemoveControlProcessor;

impl ActionProcessor for RemoveControlProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::RemoveControl
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RemoveControl {
            definition,
            field,
            control,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };
        if context.controls_mut().remove(control.id().as_str()).is_none() {
            return Err(not_found(ModelKind::Control, control.id()));
        }
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RemoveControl {
            definition,
            field,
            control,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };
        context.controls_mut().insert(control.clone());
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::RemoveControl {
            definition,
            field,
            control,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Field, field.clone())
            .join(ModelKind::Control, control.id().clone());
        // a MODIFY with no value marks the node deleted
        Ok(vec![ModelChange::modify(&path, None)])
    }
}

pub struct RestoreInheritedAttributeProcessor;

impl ActionProcessor for RestoreInheritedAttributeProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::RestoreInheritedAttribute
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedAttribute { target, attributes } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let parent = {
            let Some(model) = store.find(target.as_str()) else {
                return Err(ActionError::UnknownModel {
                    id: target.as_str().to_owned(),
                });
            };
            model.base().parent().cloned()
        };
        let Some(parent) = parent else {
            return Err(ActionError::MissingInheritedSource {
                id: target.as_str().to_owned(),
            });
        };

        // read the inherited values before taking the target mutably
        let inherited: Vec<(AttributeId, ModelValue)> = {
            let Some(source) = store.find(parent.as_str()) else {
                return Err(ActionError::UnknownModel {
                    id: parent.into_string(),
                });
            };
            attributes
                .iter()
                .map(|snapshot| {
                    let value = source
                        .base()
                        .attribute(snapshot.id().as_str())
                        .map(|attribute| attribute.value().clone())
                        .unwrap_or_default();
                    (snapshot.id().clone(), value)
                })
                .collect()
        };

        let base = base_mut_of(store, target)?;
        for (id, value) in inherited {
            let Some(attribute) = base.attribute_mut(id.as_str()) else {
                return Err(not_found(ModelKind::Attribute, &id));
            };
            attribute.set_value(value);
        }
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedAttribute { target, attributes } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let base = base_mut_of(store, target)?;
        for snapshot in attributes {
            let Some(attribute) = base.attribute_mut(snapshot.id().as_str()) else {
                return Err(not_found(ModelKind::Attribute, snapshot.id()));
            };
            attribute.set_value(snapshot.value().clone());
        }
        Ok(())
    }

    fn changeset(
        &self,
        store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::RestoreInheritedAttribute { target, attributes } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let Some(kind) = store.find_kind(target.as_str()) else {
            return Err(ActionError::UnknownModel {
                id: target.as_str().to_owned(),
            });
        };
        let base_path = ModelPath::of(kind, target.clone());
        Ok(attributes
            .iter()
            .map(|attribute| {
                let path = base_path
                    .clone()
                    .join(ModelKind::Attribute, attribute.id().clone().retag());
                ModelChange::restore(&path)
            })
            .collect())
    }
}

pub struct RestoreInheritedFieldProcessor;

impl ActionProcessor for RestoreInheritedFieldProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::RestoreInheritedField
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedField { definition, field } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        lookup_field(store, definition, field.id())?;
        let Some(inherited) = inherited_field(store, definition, field.id().as_str()) else {
            return Err(ActionError::MissingInheritedSource {
                id: field.id().as_str().to_owned(),
            });
        };

        let target = definition_mut(store, definition)?;
        // same id, so the replace keeps the field's list position
        target.fields_mut().insert(inherited);
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedField { definition, field } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        target.fields_mut().insert(field.clone());
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::RestoreInheritedField { definition, field } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Field, field.id().clone());
        Ok(vec![ModelChange::restore(&path)])
    }
}

pub struct RestoreInheritedRegionProcessor;

impl ActionProcessor for RestoreInheritedRegionProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::RestoreInheritedRegion
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedRegion { definition, region } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        lookup_region(store, definition, region.id())?;
        let Some(inherited) = inherited_region(store, definition, region.id().as_str()) else {
            return Err(ActionError::MissingInheritedSource {
                id: region.id().as_str().to_owned(),
            });
        };

        let target = definition_mut(store, definition)?;
        target.regions_mut().insert(inherited);
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedRegion { definition, region } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        target.regions_mut().insert(region.clone());
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::RestoreInheritedRegion { definition, region } = action else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Region, region.id().clone());
        Ok(vec![ModelChange::restore(&path)])
    }
}

pub struct RestoreInheritedControlProcessor;

impl ActionProcessor for RestoreInheritedControlProcessor {
    fn action_type(&self) -> ActionType {
        ActionType::RestoreInheritedControl
    }

    fn execute(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedControl {
            definition,
            field,
            control,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };

        // resolve the inherited control from the fork source, if any,
        // before mutating the field
        let inherited: Option<ModelControl> = {
            let context = lookup_field(store, definition, field)?;
            if !context.controls().contains(control.id().as_str()) {
                return Err(not_found(ModelKind::Control, control.id()));
            }
            context
                .reference()
                .and_then(|source| store.definition(source.as_str()))
                .and_then(|source| source.field(field.as_str()))
                .and_then(|source_field| source_field.controls().get(control.id().as_str()))
                .cloned()
        };

        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };
        match inherited {
            // the inherited copy shares the overridden control's id, so
            // the replace keeps its position in the control list
            Some(inherited) => context.controls_mut().insert(inherited),
            None => {
                context.controls_mut().remove(control.id().as_str());
            }
        }
        Ok(())
    }

    fn restore(&self, store: &mut ModelStore, action: &ModelAction) -> Result<(), ActionError> {
        let ModelAction::RestoreInheritedControl {
            definition,
            field,
            control,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let target = definition_mut(store, definition)?;
        let Some(context) = target.fields_mut().get_mut(field.as_str()) else {
            return Err(not_found(ModelKind::Field, field));
        };
        // replaces the re-linked inherited control when one was attached
        context.controls_mut().insert(control.clone());
        Ok(())
    }

    fn changeset(
        &self,
        _store: &ModelStore,
        action: &ModelAction,
    ) -> Result<Vec<ModelChange>, ActionError> {
        let ModelAction::RestoreInheritedControl {
            definition,
            field,
            control,
        } = action
        else {
            return Err(mismatch(self.action_type(), action));
        };
        let path = ModelPath::of(ModelKind::Definition, definition.clone())
            .join(ModelKind::Field, field.clone())
            .join(ModelKind::Control, control.id().clone());
        Ok(vec![ModelChange::restore(&path)])
    }
}
