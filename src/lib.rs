// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # entity-meta
//!
//! One crate, all features. Re-exports:
//! - [`Model`](macro@Model) derive macro from `entity-meta-derive`
//! - All types from `entity-meta-core` ([`EntityManager`],
//!   [`RegistryBuilder`], [`FieldSelector`], ...)
//!
//! Models map to two backends: the legacy resource API (`rest`) and the
//! graph API (`graph`). Mappings are declared with attributes, registered
//! once at startup, scanned lazily into cached metadata and specialized per
//! call.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use entity_meta::prelude::*;
//!
//! #[derive(Model, Default)]
//! #[rest(uri = "_api/web", entity_type = "SP.Web")]
//! #[graph(uri = "sites/{Site.GraphId}")]
//! pub struct Web {
//!     #[key]
//!     #[graph(name = "id")]
//!     pub id: String,
//!     pub title: String,
//! }
//!
//! let mut registry = RegistryBuilder::new();
//! registry.register::<Web>();
//! let manager = EntityManager::new(Arc::new(registry.build()));
//!
//! // Load the title only; the key is always loaded.
//! let info = manager.class_info::<Web>(None, &[Web::TITLE])?;
//! assert_eq!(info.fields_to_load().count(), 2);
//! ```

pub use entity_meta_core::*;
#[cfg(feature = "derive")]
pub use entity_meta_derive::Model;

/// Convenient re-exports, including the derive macro.
pub mod prelude {
    pub use entity_meta_core::prelude::*;
    #[cfg(feature = "derive")]
    pub use entity_meta_derive::Model;
}
