// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use ontic::model::{
    AttributeId, ModelAttribute, ModelClass, ModelControl, ModelDefinition, ModelField, ModelId,
    ModelValue,
};
use ontic::payload::HierarchyNode;
use ontic::store::ModelStore;

fn id(value: &str) -> ModelId {
    ModelId::new(value).expect("model id")
}

fn attribute(name: &str, value: &str) -> ModelAttribute {
    ModelAttribute::new(
        AttributeId::new(name).expect("attribute id"),
        "string",
        ModelValue::from(value),
        false,
    )
}

/// A store with `definitions` definitions of `fields` fields each, every
/// field carrying one control and a couple of attributes. Definition
/// `def0` owns every field; the others inherit them from `def0`.
pub fn store(definitions: usize, fields: usize) -> ModelStore {
    let mut store = ModelStore::new();
    store.classes_mut().insert(ModelClass::new(id("emf:Entity")));

    for d in 0..definitions {
        let definition_id = format!("def{d}");
        let mut definition = ModelDefinition::new(id(&definition_id));
        definition.set_type_ref(Some(id("emf:Entity")));
        if d > 0 {
            definition.base_mut().set_parent(Some(id("def0")));
        } else {
            definition.base_mut().set_parent(Some(id("emf:Entity")));
        }
        definition
            .base_mut()
            .attributes_mut()
            .insert(attribute("label", &definition_id));

        for f in 0..fields {
            let field_id = format!("field{f}");
            let mut field = ModelField::new(id(&field_id));
            field.base_mut().set_parent(Some(id("def0")));
            field
                .base_mut()
                .attributes_mut()
                .insert(attribute("name", &field_id));
            field
                .base_mut()
                .attributes_mut()
                .insert(attribute("label", &field_id));

            let mut control = ModelControl::new(id("DEFAULT_VALUE_PATTERN"));
            control.base_mut().set_parent(Some(id(&field_id)));
            control
                .base_mut()
                .attributes_mut()
                .insert(attribute("template", "$[id]"));
            field.controls_mut().insert(control);

            definition.fields_mut().insert(field);
        }
        store.definitions_mut().insert(definition);
    }

    store
}

/// A hierarchy payload with `classes` classes of `definitions` chained
/// definitions each.
pub fn hierarchy(classes: usize, definitions: usize) -> Vec<HierarchyNode> {
    (0..classes)
        .map(|c| {
            let sub_types = (0..definitions)
                .map(|d| HierarchyNode {
                    id: format!("c{c}d{d}"),
                    parent_id: (d > 0).then(|| format!("c{c}d{}", d - 1)),
                    labels: Default::default(),
                    is_abstract: d == 0,
                    sub_types: Vec::new(),
                })
                .collect();
            HierarchyNode {
                id: format!("emf:Class{c}"),
                parent_id: None,
                labels: Default::default(),
                is_abstract: false,
                sub_types,
            }
        })
        .collect()
}
