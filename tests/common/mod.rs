// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Models shared by the integration tests.

#![allow(dead_code)]

use std::{collections::BTreeMap, sync::Arc};

use entity_meta::{DataModel, EntityManager, Model, ParentRef, RegistryBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub trait IWeb: DataModel {}

pub trait IList: DataModel {
    fn title(&self) -> &str;
}

#[derive(Model, Default)]
#[model(implements(IWeb))]
#[rest(uri = "_api/web", entity_type = "SP.Web")]
#[graph(uri = "sites/{Site.GraphId}")]
pub struct Web {
    #[key]
    #[graph(name = "id")]
    pub id: String,

    pub title: String,

    #[rest(name = "ServerRelativeUrl")]
    #[graph(name = "webUrl")]
    pub url: String,

    #[parent]
    pub parent: Option<ParentRef>
}

impl IWeb for Web {}

#[derive(Model, Default)]
#[model(implements(IList))]
#[rest(
    uri = "_api/web/lists/getbyid(guid'{Id}')",
    entity_type = "SP.List",
    target = "Web",
    linq_get = "_api/web/lists"
)]
#[graph(uri = "sites/{Parent.GraphId}/lists/{GraphId}", target = "Web")]
pub struct List {
    #[key]
    #[graph(name = "id")]
    pub id: String,

    /// Display name of the list.
    #[rest(name = "Title")]
    #[graph(name = "displayName")]
    pub title: String,

    #[rest]
    #[graph(json_path = "list.template")]
    pub template_type: i32,

    #[rest(expandable)]
    #[graph(get = "sites/{Parent.GraphId}/lists/{GraphId}/items", expandable)]
    pub items: Vec<ListItem>,

    #[system]
    pub requested: bool,

    #[parent]
    pub parent: Option<ParentRef>
}

impl IList for List {
    fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Model, Default, Clone, Serialize, Deserialize)]
#[rest(
    uri = "_api/web/lists/getbyid(guid'{Parent.Id}')/items({Id})",
    target = "List",
    overflow_property = "FieldValues"
)]
#[graph(
    uri = "sites/{Parent.GraphId}/lists/{Parent.Id}/items/{GraphId}",
    target = "List",
    overflow_property = "fields"
)]
pub struct ListItem {
    #[key]
    pub id: i32,

    #[overflow]
    pub values: BTreeMap<String, Value>,

    #[serde(skip)]
    #[parent]
    pub parent: Option<ParentRef>
}

#[derive(Model, Default)]
#[rest(uri = "_api/web/lists/getbyid(guid'{Parent.Id}')/items({Id})/attachments")]
#[graph(uri = "sites/{Site.GraphId}/drive/items/{GraphId}", overflow_property = "additionalData")]
pub struct Attachment {
    #[key]
    pub id: String,

    #[overflow]
    pub values: BTreeMap<String, Value>
}

#[derive(Model, Default)]
#[model(collection)]
#[rest(uri = "_api/web/lists", target = "Web")]
pub struct ListCollection {
    pub count: u32,

    #[parent]
    pub parent: Option<ParentRef>
}

#[derive(Model, Default)]
#[rest(
    uri = "_api/web/contenttypes('{Id}')",
    target = "Web",
    linq_get = "_api/web/contenttypes"
)]
#[rest(
    uri = "_api/web/lists/getbyid(guid'{Parent.Id}')/contenttypes('{Id}')",
    target = "List",
    linq_get = "_api/web/lists/getbyid(guid'{Parent.Id}')/contenttypes"
)]
pub struct ContentType {
    #[key]
    #[rest(name = "StringId")]
    pub id: String,

    pub name: String,

    #[parent]
    pub parent: Option<ParentRef>
}

#[derive(Model, Default)]
#[graph(uri = "teams/{Site.GroupId}", beta)]
pub struct Team {
    #[key]
    pub id: String,

    pub display_name: String,

    #[graph(name = "funSettings", custom_mapping)]
    pub fun_settings: Value
}

#[derive(Model, Default)]
#[rest(uri = "_api/web/features")]
pub struct Feature {
    #[rest(name = "DefinitionId")]
    pub definition_id: String
}

#[derive(Model, Default)]
#[model(expando)]
#[rest(uri = "_api/web/broken")]
pub struct Broken {
    pub title: String
}

#[derive(Model, Default)]
pub struct Unmapped {
    pub id: String
}

/// Route `tracing` output through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Registry with every test model.
pub fn registry() -> RegistryBuilder {
    let mut registry = RegistryBuilder::new();
    registry
        .register::<Web>()
        .register::<List>()
        .register::<ListItem>()
        .register::<Attachment>()
        .register::<ListCollection>()
        .register_named::<ContentType>("SP.ContentType")
        .register::<Team>()
        .register::<Feature>()
        .register::<Broken>()
        .register::<Unmapped>();
    registry
}

/// Manager over [`registry`].
pub fn manager() -> EntityManager {
    init_tracing();
    EntityManager::new(Arc::new(registry().build()))
}
