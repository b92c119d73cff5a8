// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_meta::prelude::*;

#[derive(Model, Default)]
#[rest(uri = "_api/web/features", entity_type = "SP.Feature")]
pub struct Feature {
    #[key]
    #[rest(name = "DefinitionId")]
    pub definition_id: String,

    pub display_name: Option<String>,

    #[system]
    pub loaded: bool
}

fn main() {
    let decl = Feature::declaration();
    assert_eq!(decl.properties.len(), 3);
    assert_eq!(Feature::DEFINITION_ID.name(), "DefinitionId");

    let feature = Feature::new_model();
    assert!(feature.display_name.is_none());
}
