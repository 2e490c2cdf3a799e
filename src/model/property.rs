// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use super::base::{ModelBase, ModelKind};
use super::description::Languages;
use super::ids::ModelId;
use super::list::{Keyed, ModelList};

/// A semantic property. Its `parent` back-reference names the domain
/// class the property is declared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProperty {
    base: ModelBase,
}

impl ModelProperty {
    pub fn new(id: ModelId) -> Self {
        Self {
            base: ModelBase::new(id, ModelKind::Property),
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

impl Keyed for ModelProperty {
    fn key(&self) -> &str {
        self.base.id().as_str()
    }
}

/// Sorts properties alphabetically by their display label under the
/// given language pair, the order class views list them in.
pub fn sort_properties_by_label(properties: &mut ModelList<ModelProperty>, languages: &Languages) {
    properties.sort_by(|left, right| {
        left.base()
            .description(languages)
            .cmp(right.base().description(languages))
    });
}

#[cfg(test)]
mod tests {
    use super::{sort_properties_by_label, ModelProperty};
    use crate::model::description::{Languages, ModelDescription};
    use crate::model::ids::ModelId;
    use crate::model::list::ModelList;

    fn property(id: &str, label: Option<&str>) -> ModelProperty {
        let mut property = ModelProperty::new(ModelId::new(id).expect("model id"));
        if let Some(label) = label {
            property
                .base_mut()
                .set_descriptions(ModelDescription::from_labels([("en", label)]));
        }
        property
    }

    #[test]
    fn properties_sort_by_resolved_label() {
        let mut properties = ModelList::new();
        properties.insert(property("dcterms:title", Some("Title")));
        properties.insert(property("emf:createdBy", Some("Created by")));
        // no label, so the id is the sort key
        properties.insert(property("skos:notation", None));

        sort_properties_by_label(&mut properties, &Languages::default());

        let ids = properties
            .models()
            .map(|property| property.id().as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["emf:createdBy", "dcterms:title", "skos:notation"]);
    }
}
