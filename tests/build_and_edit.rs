// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

//! End-to-end: payload fixtures through builders and linkers into a
//! store, then edit actions through the dispatcher, changesets and undo.

use std::fs;
use std::path::{Path, PathBuf};

use ontic::actions::{ActionDispatcher, ChangeOperation, ModelAction};
use ontic::build::{build_properties, build_store_from_hierarchy, inherits_from, link_model};
use ontic::meta::ModelsMeta;
use ontic::model::{Languages, ModelControl, ModelField, ModelId, ModelValue};
use ontic::payload::{HierarchyNode, MetaData, ModelData, PropertyData};
use ontic::store::ModelStore;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_fixture<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let path = fixtures_dir().join(name);
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
    serde_json::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {path:?}: {err}"))
}

fn id(value: &str) -> ModelId {
    ModelId::new(value).expect("model id")
}

fn loaded_store() -> ModelStore {
    let hierarchy: Vec<HierarchyNode> = read_fixture("hierarchy.json");
    let meta_payload: MetaData = read_fixture("meta.json");
    let data: ModelData = read_fixture("model_data.json");
    let properties: Vec<PropertyData> = read_fixture("properties.json");

    let meta = ModelsMeta::from_payload(&meta_payload).expect("meta");
    let mut store = build_store_from_hierarchy(&hierarchy).expect("hierarchy");
    link_model(&mut store, &data, &meta).expect("link model");
    build_properties(&mut store, &properties, &meta).expect("properties");
    store
}

#[test]
fn builds_the_full_graph_from_payload_fixtures() {
    let store = loaded_store();
    let languages = Languages::default();

    // hierarchy: definitions without an explicit parent hang off the class
    let entity = store.definition("entity").expect("entity");
    assert_eq!(
        entity.base().parent().map(|parent| parent.as_str()),
        Some("emf:Entity")
    );
    assert!(inherits_from(&store, "audio", "entity"));

    let class = store.class("emf:Entity").expect("emf:Entity");
    assert_eq!(class.base().description(&languages), "Entity");
    assert_eq!(
        class
            .base()
            .attribute("title")
            .expect("title")
            .value()
            .language("bg"),
        Some("Обект")
    );

    let media = store.definition("media").expect("media");
    assert!(media.base().is_loaded());
    assert!(media.is_abstract());
    assert_eq!(media.base().description(&languages), "Media definition");

    // audio had no model data and stays a bare stub
    assert!(!store.definition("audio").expect("audio").base().is_loaded());

    // boolean delivered as a string normalizes without turning dirty
    let title = media.field("title").expect("title");
    assert_eq!(
        title
            .base()
            .attribute("mandatory")
            .expect("mandatory")
            .value()
            .as_bool(),
        Some(true)
    );
    assert!(!title.base().is_dirty());
    assert_eq!(
        title.region_id().map(|region| region.as_str()),
        Some("generalDetails")
    );
    assert_eq!(
        media
            .region("generalDetails")
            .expect("generalDetails")
            .order(),
        Some(10)
    );

    // inherited field keeps its declaring definition as owner
    let description = media.field("description").expect("description");
    assert!(!description.is_owned_by(media.id()));

    // every declared header type exists, raw data or not
    assert!(media.header("default_header").is_some());
    assert!(media.header("compact_header").is_some());
    assert_eq!(media.headers().len(), 2);

    let property = store.property("dcterms:title").expect("dcterms:title");
    assert_eq!(
        property.base().parent().map(|parent| parent.as_str()),
        Some("emf:Entity")
    );
    assert_eq!(store.class_properties("emf:Entity").count(), 1);
}

#[test]
fn editing_an_inherited_field_forks_and_undo_collapses() {
    let mut store = loaded_store();
    let dispatcher = ActionDispatcher::with_default_processors();

    let action = ModelAction::create_control(
        &store,
        id("media"),
        id("description"),
        ModelControl::new(id("RELATED_FIELDS")),
    )
    .expect("action");
    let actions = [action];

    dispatcher.execute(&mut store, &actions).expect("execute");
    let forked = store
        .definition("media")
        .expect("media")
        .field("description")
        .expect("description");
    assert!(forked.is_owned_by(&id("media")));
    assert_eq!(
        forked.reference().map(|source| source.as_str()),
        Some("entity")
    );
    assert!(forked.controls().contains("RELATED_FIELDS"));

    let changes = dispatcher.changeset(&store, &actions).expect("changeset");
    assert!(changes
        .iter()
        .all(|change| change.selector.starts_with("definition=media/field=description")));

    dispatcher.restore(&mut store, &actions).expect("restore");
    let collapsed = store
        .definition("media")
        .expect("media")
        .field("description")
        .expect("description");
    assert!(!collapsed.is_owned_by(&id("media")));
    assert!(collapsed.reference().is_none());
    assert!(!collapsed.controls().contains("RELATED_FIELDS"));
}

#[test]
fn create_field_batch_produces_a_complete_creation_changeset() {
    let mut store = loaded_store();
    let dispatcher = ActionDispatcher::with_default_processors();

    let mut field = ModelField::new(id("uploadedBy"));
    field.base_mut().attributes_mut().insert(
        ontic::model::ModelAttribute::new(
            ontic::model::AttributeId::new("label").expect("attribute id"),
            "label",
            ModelValue::multi_lang([("en", "Uploaded by")]),
            false,
        ),
    );
    field.base_mut().attributes_mut().insert(
        ontic::model::ModelAttribute::new(
            ontic::model::AttributeId::new("order").expect("attribute id"),
            "integer",
            ModelValue::Empty,
            false,
        ),
    );
    let actions = [ModelAction::CreateField {
        definition: id("media"),
        field,
    }];

    let applied = dispatcher.execute(&mut store, &actions).expect("execute");
    assert_eq!(applied, 1);

    let changes = dispatcher.changeset(&store, &actions).expect("changeset");
    // empty attributes are filtered, non-empty ones sent as MODIFY
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].selector,
        "definition=media/field=uploadedBy/attribute=label"
    );
    assert_eq!(changes[0].operation, ChangeOperation::Modify);
    assert_eq!(
        changes[0].value,
        Some(serde_json::json!({ "en": "Uploaded by" }))
    );

    dispatcher.restore(&mut store, &actions).expect("restore");
    assert!(store
        .definition("media")
        .expect("media")
        .field("uploadedBy")
        .is_none());
}

#[test]
fn restoring_an_overridden_attribute_follows_the_definition_parent() {
    let mut store = loaded_store();
    let dispatcher = ActionDispatcher::with_default_processors();

    store
        .definition_mut("media")
        .expect("media")
        .base_mut()
        .attribute_mut("label")
        .expect("label")
        .set_value(ModelValue::multi_lang([("en", "Media (edited)")]));
    assert!(store.definition("media").expect("media").base().is_dirty());

    let action = ModelAction::restore_inherited_attribute(&store, id("media"), &["label"])
        .expect("action");
    let actions = [action];

    dispatcher.execute(&mut store, &actions).expect("execute");
    assert_eq!(
        store
            .definition("media")
            .expect("media")
            .base()
            .attribute("label")
            .expect("label")
            .value()
            .language("en"),
        Some("Entity definition")
    );

    let changes = dispatcher.changeset(&store, &actions).expect("changeset");
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].operation, ChangeOperation::Restore);
    assert_eq!(changes[0].selector, "definition=media/attribute=label");
    assert_eq!(changes[0].value, None);

    dispatcher.restore(&mut store, &actions).expect("restore");
    assert_eq!(
        store
            .definition("media")
            .expect("media")
            .base()
            .attribute("label")
            .expect("label")
            .value()
            .language("en"),
        Some("Media (edited)")
    );
}
