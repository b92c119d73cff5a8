// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-call field selection.
//!
//! A caller narrows the fields fetched for one request with a list of
//! [`FieldSelector`]s. `#[derive(Model)]` generates one selector constant per
//! mapped field:
//!
//! ```rust,ignore
//! let info = manager.class_info(Some(&list), &[List::TITLE, List::ITEMS])?;
//! ```
//!
//! [`specialize`] turns the cached [`EntityStaticInfo`] into an
//! [`EntityCallInfo`] with load flags and the call context applied.

use std::{fmt, marker::PhantomData};

use tracing::trace;

use crate::{DataModel, EntityCallInfo, EntityStaticInfo, ModelError};

/// Typed reference to one field of model `T`.
pub struct FieldSelector<T: ?Sized> {
    name:  &'static str,
    model: PhantomData<fn() -> T>
}

impl<T: ?Sized> FieldSelector<T> {
    /// Selector for the property `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            model: PhantomData
        }
    }

    /// Selector built from a property name at runtime.
    ///
    /// Names are matched ignoring case; an unknown name fails when the
    /// selection is applied.
    pub const fn named(name: &'static str) -> Self {
        Self::new(name)
    }

    /// Property name selected.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized> Clone for FieldSelector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for FieldSelector<T> {}

impl<T: ?Sized> PartialEq for FieldSelector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: ?Sized> Eq for FieldSelector<T> {}

impl<T: ?Sized> fmt::Debug for FieldSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldSelector({})", self.name)
    }
}

/// Specialize `info` for one call.
///
/// With no `names` every field keeps its default load flag. Otherwise graph
/// loading is restricted to the selected fields, leaving out fields that
/// always need a dedicated query, and the rest selection is flagged for the
/// downstream query builder. Key fields are always loaded.
///
/// When `target` is attached to a parent, the owning model type (skipping a
/// collection wrapper) becomes the call context.
///
/// # Errors
///
/// [`ModelError::UnknownField`] when a name matches no field.
pub fn specialize(
    info: &EntityStaticInfo,
    names: &[&str],
    target: Option<&dyn DataModel>
) -> Result<EntityCallInfo, ModelError> {
    let mut call = EntityCallInfo::new(info);

    if !names.is_empty() {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let field = info
                .field(name)
                .ok_or_else(|| ModelError::UnknownField {
                    model: info.model_type.name().to_string(),
                    field: (*name).to_string()
                })?;
            selected.push(field.name.as_str());
        }

        let graph_candidates = selected
            .iter()
            .filter(|name| {
                info.field(name)
                    .is_some_and(|field| !field.is_graph_non_expandable_collection())
            })
            .count();

        if graph_candidates > 0 {
            call.graph_fields_loaded_via_expression = true;
            for field in call.fields_mut() {
                if !selected.contains(&field.name.as_str()) {
                    field.load = false;
                }
            }
        }
        call.rest_fields_loaded_via_expression = true;
    }

    for field in call.fields_mut() {
        if field.is_key() {
            field.load = true;
        }
    }

    if let Some(parent) = target.and_then(|model| model.parent()) {
        let owner = if parent.is_collection() {
            parent.parent()
        } else {
            Some(parent.clone())
        };
        call.target = owner.map(|owner| owner.model_type());
    }

    trace!(
        model = %info.model_type,
        selected = names.len(),
        target = ?call.target,
        "specialized entity info"
    );
    Ok(call)
}
