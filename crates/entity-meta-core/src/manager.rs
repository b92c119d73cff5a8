// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity metadata service.
//!
//! [`EntityManager`] owns the metadata cache and is the single entry point
//! used by query builders and model code:
//!
//! - [`static_info`](EntityManager::static_info): cached metadata of a type
//! - [`class_info`](EntityManager::class_info): metadata specialized for one
//!   call
//! - [`entity_key_accessors`](EntityManager::entity_key_accessors): untyped
//!   key access
//! - [`concrete_instance`](EntityManager::concrete_instance): new instances
//!   for concrete or interface types
//!
//! The manager is `Send + Sync` and meant to be shared behind an [`Arc`].
//! Metadata is scanned lazily on first use; concurrent first requests for
//! the same type may scan twice, but only one result is ever published.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::{
    DataModel, EntityCallInfo, EntityStaticInfo, FieldSelector, KeyAccessor, Model, ModelError,
    ModelRegistry, ModelType, ParentRef, scan::scan, select::specialize
};

/// Metadata cache and instance factory over a [`ModelRegistry`].
#[derive(Debug)]
pub struct EntityManager {
    registry: Arc<ModelRegistry>,
    cache:    DashMap<ModelType, Arc<EntityStaticInfo>>
}

impl EntityManager {
    /// Manager with an empty cache.
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self {
            registry,
            cache: DashMap::new()
        }
    }

    /// Registry backing this manager.
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Static metadata of `model_type`, scanning it on first use.
    ///
    /// Interface types are resolved to their concrete model first.
    ///
    /// # Errors
    ///
    /// [`ModelError::Configuration`] when the type is not registered or its
    /// declarations are invalid. Failed scans are not cached.
    pub fn static_info(&self, model_type: ModelType) -> Result<Arc<EntityStaticInfo>, ModelError> {
        let concrete = self.registry.resolve_concrete_type(model_type);

        if let Some(info) = self.cache.get(&concrete) {
            trace!(model = %concrete, "entity info cache hit");
            return Ok(Arc::clone(info.value()));
        }

        debug!(model = %concrete, "entity info cache miss");
        let decl = self.registry.declaration(concrete).ok_or_else(|| {
            ModelError::configuration(concrete.name(), "type has no rest or graph mapping")
        })?;
        let scanned = Arc::new(scan(&decl)?);

        let resident = Arc::clone(
            self.cache
                .entry(concrete)
                .or_insert_with(|| Arc::clone(&scanned))
                .value()
        );
        if Arc::ptr_eq(&resident, &scanned) {
            debug!(model = %concrete, fields = resident.fields.len(), "entity info published");
        } else {
            debug!(model = %concrete, "entity info published concurrently, using resident copy");
        }
        Ok(resident)
    }

    /// Typed shortcut for [`static_info`](Self::static_info).
    ///
    /// # Errors
    ///
    /// See [`static_info`](Self::static_info).
    pub fn static_info_of<T: ?Sized + 'static>(&self) -> Result<Arc<EntityStaticInfo>, ModelError> {
        self.static_info(ModelType::of::<T>())
    }

    /// Metadata of `T` specialized for one call.
    ///
    /// `target` is the instance the call is made for; its parent chain
    /// decides which context-specific templates apply. `fields` restricts
    /// loading to the selected fields, keys are always loaded.
    ///
    /// # Errors
    ///
    /// [`ModelError::Configuration`] for invalid declarations.
    pub fn class_info<T: Model>(
        &self,
        target: Option<&T>,
        fields: &[FieldSelector<T>]
    ) -> Result<EntityCallInfo, ModelError> {
        let names: Vec<&str> = fields.iter().map(FieldSelector::name).collect();
        self.class_info_for(
            ModelType::of::<T>(),
            target.map(|model| model as &dyn DataModel),
            &names
        )
    }

    /// Untyped variant of [`class_info`](Self::class_info).
    ///
    /// # Errors
    ///
    /// [`ModelError::Configuration`] for invalid declarations,
    /// [`ModelError::UnknownField`] when a name matches no field.
    pub fn class_info_for(
        &self,
        model_type: ModelType,
        target: Option<&dyn DataModel>,
        fields: &[&str]
    ) -> Result<EntityCallInfo, ModelError> {
        let info = self.static_info(model_type)?;
        specialize(&info, fields, target)
    }

    /// Key accessors for the runtime type of `model`.
    ///
    /// Always a single accessor; the list shape leaves room for composite
    /// keys.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingKey`] when the type declares no key.
    pub fn entity_key_accessors(&self, model: &dyn DataModel) -> Result<Vec<KeyAccessor>, ModelError> {
        let info = self.static_info(model.model_type())?;
        let key = info.key_field().ok_or_else(|| ModelError::MissingKey {
            model: info.model_type.name().to_string()
        })?;
        Ok(vec![KeyAccessor::new(key)])
    }

    /// New instance of `R`, a concrete model or a registered interface.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownType`] when `R` is not registered.
    pub fn concrete_instance<R: ?Sized + 'static>(
        &self,
        parent: Option<ParentRef>
    ) -> Result<Box<R>, ModelError> {
        self.registry.create_as::<R>(parent)
    }

    /// New untyped instance of `model_type`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownType`] when the type is not registered.
    pub fn transient_instance(
        &self,
        model_type: ModelType,
        parent: Option<ParentRef>
    ) -> Result<Box<dyn DataModel>, ModelError> {
        self.registry.create(model_type, parent)
    }

    /// New untyped instance of the model registered as `name`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Argument`] for an empty name,
    /// [`ModelError::UnknownType`] for an unregistered one.
    pub fn transient_instance_by_name(
        &self,
        name: &str,
        parent: Option<ParentRef>
    ) -> Result<Box<dyn DataModel>, ModelError> {
        self.registry.create_by_name(name, parent)
    }

    /// Types with published metadata.
    pub fn cached_types(&self) -> Vec<ModelType> {
        self.cache.iter().map(|entry| *entry.key()).collect()
    }

    /// Number of types with published metadata.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no metadata is published yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
