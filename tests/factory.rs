// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Instance factory, accessors and key resolution on derived models.

mod common;

use common::*;
use entity_meta::{DataModel, ModelError, ModelParent, ModelType, ParentLink};
use serde_json::{Value, json};

#[test]
fn concrete_instance_through_interface() {
    let manager = manager();
    let parent = ParentLink::new(ModelType::of::<Web>()).into_ref();

    let list = manager
        .concrete_instance::<dyn IList>(Some(parent))
        .unwrap();

    assert_eq!(list.model_type(), ModelType::of::<List>());
    assert_eq!(list.title(), "");
    let parent = list.parent().unwrap();
    assert_eq!(parent.model_type(), ModelType::of::<Web>());
}

#[test]
fn concrete_instance_of_concrete_type() {
    let web = manager().concrete_instance::<Web>(None).unwrap();
    assert!(web.parent.is_none());
    assert!(web.id.is_empty());
}

#[test]
fn model_without_parent_slot_drops_parent() {
    let parent = ParentLink::new(ModelType::of::<Web>()).into_ref();
    let team = manager()
        .transient_instance(ModelType::of::<Team>(), Some(parent))
        .unwrap();

    assert!(team.parent().is_none());
}

#[test]
fn unregistered_interface_is_unknown_type() {
    trait INothing: DataModel {}

    let err = match manager().concrete_instance::<dyn INothing>(None) {
        Err(err) => err,
        Ok(_) => panic!("interface has no implementation")
    };
    assert!(matches!(err, ModelError::UnknownType { .. }));
}

#[test]
fn transient_instance_by_registered_name() {
    let manager = manager();
    let model = manager
        .transient_instance_by_name("SP.ContentType", None)
        .unwrap();

    assert_eq!(model.model_type(), ModelType::of::<ContentType>());
    assert!(model.downcast_ref::<ContentType>().is_some());

    let list = manager.transient_instance_by_name("List", None).unwrap();
    assert!(list.downcast_ref::<List>().is_some());
}

#[test]
fn transient_instance_by_name_rejects_empty_and_unknown() {
    let manager = manager();

    let err = manager.transient_instance_by_name("", None).unwrap_err();
    assert!(err.is_argument());

    let err = manager
        .transient_instance_by_name("SP.Nothing", None)
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownType { name } if name == "SP.Nothing"));
}

#[test]
fn accessors_read_and_write_fields() {
    let info = manager().static_info_of::<List>().unwrap();
    let title = info.field("Title").unwrap();
    let mut list = List {
        title: "Documents".to_string(),
        ..List::default()
    };

    assert_eq!(title.accessor.get(&list).unwrap(), json!("Documents"));

    title.accessor.set(&mut list, json!("Pages")).unwrap();
    assert_eq!(list.title, "Pages");

    let template = info.field("TemplateType").unwrap();
    template.accessor.set(&mut list, json!(101)).unwrap();
    assert_eq!(list.template_type, 101);
}

#[test]
fn accessor_rejects_bad_value_and_wrong_model() {
    let info = manager().static_info_of::<List>().unwrap();
    let title = info.field("Title").unwrap();

    let mut list = List::default();
    let err = title.accessor.set(&mut list, json!(42)).unwrap_err();
    assert!(matches!(err, ModelError::Value { ref field, .. } if field == "Title"));

    let err = title.accessor.get(&Web::default()).unwrap_err();
    assert!(matches!(err, ModelError::TypeMismatch { .. }));
}

#[test]
fn overflow_values_are_accessible() {
    let info = manager().static_info_of::<ListItem>().unwrap();
    let values = info.field("Values").unwrap();
    let mut item = ListItem::default();

    values
        .accessor
        .set(&mut item, json!({ "Title": "Spec", "Size": 3 }))
        .unwrap();
    assert_eq!(item.values.get("Size"), Some(&json!(3)));

    let read = values.accessor.get(&item).unwrap();
    assert_eq!(read["Title"], Value::from("Spec"));
}

#[test]
fn key_accessor_reads_key_field() {
    let manager = manager();
    let item = ListItem {
        id: 7,
        ..ListItem::default()
    };

    let keys = manager.entity_key_accessors(&item).unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].field_name(), "Id");
    assert_eq!(keys[0].value(&item).unwrap(), json!(7));

    let content_type = ContentType {
        id: "0x0101".to_string(),
        ..ContentType::default()
    };
    let keys = manager.entity_key_accessors(&content_type).unwrap();
    assert_eq!(keys[0].value(&content_type).unwrap(), json!("0x0101"));
}

#[test]
fn missing_key_is_reported() {
    let err = manager()
        .entity_key_accessors(&Feature::default())
        .unwrap_err();
    assert!(matches!(err, ModelError::MissingKey { .. }));
}

#[test]
fn collection_flag_is_derived() {
    assert!(ListCollection::default().is_collection());
    assert!(!List::default().is_collection());

    let link = ParentLink::of(&ListCollection::default());
    assert!(ModelParent::is_collection(&link));
}
