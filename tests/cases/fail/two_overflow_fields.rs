// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use std::collections::BTreeMap;

use entity_meta::prelude::*;
use serde_json::Value;

#[derive(Model, Default)]
#[rest(uri = "_api/items({Id})", overflow_property = "FieldValues")]
pub struct Item {
    #[key]
    pub id: i32,

    #[overflow]
    pub values: BTreeMap<String, Value>,

    #[overflow]
    pub extra: BTreeMap<String, Value>
}

fn main() {}
