// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use entity_meta::prelude::*;

#[derive(Model, Default)]
#[rest(uri = "_api/web/folders('{Id}')")]
pub struct Folder {
    #[key]
    pub id: String,

    #[parent]
    pub parent: Option<ParentRef>,

    #[parent]
    pub owner: Option<ParentRef>
}

fn main() {}
