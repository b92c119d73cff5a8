// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use entity_meta::prelude::*;
use serde_json::Value;

#[derive(Model, Default)]
#[rest(uri = "_api/web/lists/items({Id})", overflow_property = "FieldValues")]
#[graph(uri = "items/{GraphId}", overflow_property = "fields", beta)]
pub struct Item {
    #[key]
    pub id: i64,

    #[overflow]
    pub values: HashMap<String, Value>
}

fn main() {
    let decl = Item::declaration();
    assert!(decl.expando);
    assert_eq!(Item::VALUES.name(), "Values");
}
