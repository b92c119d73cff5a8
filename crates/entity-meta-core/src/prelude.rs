// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_meta_core::prelude::*;
//! ```

pub use crate::{
    DataModel, EntityCallInfo, EntityFieldInfo, EntityManager, EntityStaticInfo, FieldSelector,
    KeyAccessor, Model, ModelError, ModelParent, ModelRegistry, ModelType, ParentLink, ParentRef,
    RegistryBuilder
};
