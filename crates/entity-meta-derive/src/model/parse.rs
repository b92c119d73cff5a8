// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Model derive macro.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── model.rs   - ModelDef, #[model(...)] via darling FromDeriveInput
//! ├── target.rs  - #[rest(...)] / #[graph(...)] on the struct
//! └── field.rs   - FieldDef, field mappings and markers
//! ```
//!
//! # Data Structures
//!
//! ```text
//! ModelDef
//! ├── ident: Ident                (struct name)
//! ├── vis: Visibility
//! ├── expando: bool               (#[model(expando)] or an #[overflow] field)
//! ├── collection: bool            (#[model(collection)])
//! ├── implements: Vec<Path>       (#[model(implements(IList))])
//! ├── rest: Vec<RestTarget>
//! ├── graph: Vec<GraphTarget>
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident, ty
//!         ├── mappings: Vec<FieldMapping>   (Rest / Graph, in order)
//!         └── markers: FieldMarkers         (key, system, parent, overflow)
//! ```

mod field;
mod model;
mod target;

pub use field::{FieldDef, FieldMapping};
pub use model::ModelDef;
pub use target::{GraphTarget, RestTarget};
