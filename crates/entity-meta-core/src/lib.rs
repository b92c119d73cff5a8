// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime types for entity-meta models.
//!
//! Models declare how they map to two backends: the legacy resource API
//! (`rest`) and the graph API (`graph`). This crate turns those declarations
//! into cached, immutable metadata and hands out per-call copies of it.
//!
//! # Overview
//!
//! - [`Model`], [`DataModel`] — traits every model implements
//! - [`ModelDecl`] — declaration table generated by `#[derive(Model)]`
//! - [`scan`](scan::scan) — declarations to [`EntityStaticInfo`]
//! - [`ModelRegistry`] — interface resolution and factories
//! - [`EntityManager`] — metadata cache, field selection, key access
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! Most users should use `entity-meta` directly, which re-exports this crate
//! together with the derive macro:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use entity_meta::prelude::*;
//!
//! let mut registry = RegistryBuilder::new();
//! registry.register::<Web>().register::<List>();
//! let manager = EntityManager::new(Arc::new(registry.build()));
//!
//! let info = manager.class_info(Some(&list), &[List::TITLE])?;
//! assert_eq!(info.rest_get(), Some("_api/web/lists/getbyid(guid'{Id}')"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decl;
pub mod error;
pub mod info;
pub mod key;
pub mod manager;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod scan;
pub mod select;

#[cfg(test)]
mod testing;

pub use decl::{
    FieldAccessor, GraphFieldDecl, GraphTypeDecl, ModelDecl, OVERFLOW_FIELD_NAME, PropertyAttr,
    PropertyDecl, RestFieldDecl, RestTypeDecl
};
pub use error::ModelError;
pub use info::{EntityCallInfo, EntityFieldInfo, EntityStaticInfo, GraphTypeInfo, RestTypeInfo};
pub use key::KeyAccessor;
pub use manager::EntityManager;
pub use model::{DataModel, Model, ModelParent, ModelType, ParentLink, ParentRef};
pub use registry::{ModelRegistry, RegistryBuilder};
pub use select::FieldSelector;
/// Re-export serde_json for generated field accessors.
pub use serde_json;
