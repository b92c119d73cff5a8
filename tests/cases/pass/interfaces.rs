// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use entity_meta::prelude::*;

pub trait IWeb: DataModel {}

pub trait IFolder: DataModel {
    fn name(&self) -> &str;
}

#[derive(Model, Default)]
#[model(implements(IWeb))]
#[rest(uri = "_api/web")]
pub struct Web {
    #[key]
    pub id: String
}

impl IWeb for Web {}

#[derive(Model, Default)]
#[model(implements(IFolder))]
#[rest(uri = "_api/web/getfolderbyid('{Id}')", target = "Web")]
pub struct Folder {
    #[key]
    pub unique_id: String,

    pub name: String,

    #[parent]
    pub parent: Option<ParentRef>
}

impl IFolder for Folder {
    fn name(&self) -> &str {
        &self.name
    }
}

fn main() {
    let mut registry = ModelRegistry::builder();
    registry.register::<Web>().register::<Folder>();
    let manager = EntityManager::new(Arc::new(registry.build()));

    let parent = ParentLink::new(ModelType::of::<Web>()).into_ref();
    let folder = manager
        .concrete_instance::<dyn IFolder>(Some(parent))
        .unwrap();
    assert!(folder.parent().is_some());
    assert_eq!(folder.name(), "");
}
