// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Derive macro for entity-meta models.
//!
//! Use it through the `entity-meta` crate; generated code refers to
//! `::entity_meta`.
//!
//! # Attribute Quick Reference
//!
//! ## Model-Level
//!
//! ```rust,ignore
//! #[derive(Model, Default, Serialize, Deserialize)]
//! #[model(expando, collection, implements(IList))]   // all optional
//! #[rest(
//!     uri = "_api/web/lists/getbyid(guid'{Id}')",     // required
//!     target = "Web",                                 // context type, default: the model
//!     entity_type = "SP.List",
//!     get = "...", linq_get = "...", update = "...", delete = "...",
//!     overflow_property = "..."
//! )]
//! #[graph(uri = "sites/{Parent.GraphId}/lists/{GraphId}", id = "id", beta)]
//! pub struct List { /* ... */ }
//! ```
//!
//! `#[rest(...)]` and `#[graph(...)]` may be repeated, once per context.
//!
//! ## Field-Level
//!
//! ```rust,ignore
//! pub struct List {
//!     #[key]                                  // key field
//!     #[graph(name = "id")]
//!     pub id: String,
//!
//!     #[rest(name = "Title", expandable, expand_by_default, custom_mapping, json_path = "...")]
//!     pub title: String,
//!
//!     #[graph(get = "sites/{Parent.GraphId}/lists/{GraphId}/items", expandable)]
//!     pub items: Vec<ListItem>,
//!
//!     #[system]                               // never mapped
//!     pub requested_at: u64,
//!
//!     #[parent]                               // backs DataModel::parent
//!     pub parent: Option<ParentRef>,
//!
//!     #[overflow]                             // property "Values"
//!     pub values: BTreeMap<String, Value>,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Generated Item | Description |
//! |----------------|-------------|
//! | `impl DataModel` | Type token, downcasting, parent slot |
//! | `impl Model` | Declaration table, field accessors, `Default` factory, interfaces |
//! | `List::TITLE`, ... | `FieldSelector<List>` per mapped field |

mod model;
mod utils;

use proc_macro::TokenStream;

/// Derive the runtime model traits from mapping attributes.
///
/// Property names are the PascalCase of field names (`display_name` becomes
/// `DisplayName`). Every mapped field type must implement `Serialize` and
/// `DeserializeOwned`, and the struct must implement `Default`.
///
/// # Compile Errors
///
/// - enums, unions, tuple and unit structs
/// - generic structs
/// - more than one `#[overflow]` or `#[parent]` field
/// - unknown attribute keys, missing `uri`
///
/// # Example
///
/// ```rust,ignore
/// use entity_meta::Model;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Model, Default, Serialize, Deserialize)]
/// #[rest(uri = "_api/web", entity_type = "SP.Web")]
/// #[graph(uri = "sites/{Site.GraphId}")]
/// pub struct Web {
///     #[key]
///     #[graph(name = "id")]
///     pub id: String,
///
///     pub title: String,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model, rest, graph, key, system, parent, overflow))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
