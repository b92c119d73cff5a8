// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model registry: type resolution and instance factories.
//!
//! Models are registered once at startup through a [`RegistryBuilder`];
//! the resulting [`ModelRegistry`] is immutable and shared by every caller.
//!
//! ```rust,ignore
//! let mut builder = RegistryBuilder::new();
//! builder.register::<Web>().register::<List>();
//! let registry = Arc::new(builder.build());
//! ```
//!
//! For every registered model the registry keeps:
//!
//! | Entry | Used for |
//! |-------|----------|
//! | declaration fn | scanning on a metadata cache miss |
//! | factory fn | building fresh instances |
//! | interface links | resolving `dyn Trait` to the concrete model |
//! | casters | returning typed `Box<R>` for concrete and interface types |

use std::{any::Any, collections::HashMap};

use tracing::{debug, trace};

use crate::{DataModel, Model, ModelError, ModelType, ParentRef, decl::ModelDecl};

type Declare = fn() -> ModelDecl;
type Factory = fn() -> Box<dyn DataModel>;
type Caster<R> = Box<dyn Fn(Box<dyn DataModel>) -> Option<Box<R>> + Send + Sync>;

#[derive(Clone, Copy)]
struct Registration {
    declare: Declare,
    factory: Factory
}

fn create_model<T: Model>() -> Box<dyn DataModel> {
    Box::new(T::new_model())
}

fn short_name(name: &'static str) -> &'static str {
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Collects model registrations before the registry is frozen.
#[derive(Default)]
pub struct RegistryBuilder {
    models:     HashMap<ModelType, Registration>,
    names:      HashMap<&'static str, ModelType>,
    interfaces: HashMap<ModelType, ModelType>,
    casters:    HashMap<ModelType, Box<dyn Any + Send + Sync>>
}

impl RegistryBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register model `T` under its type name and the interfaces it declares.
    pub fn register<T: Model>(&mut self) -> &mut Self {
        let model_type = ModelType::of::<T>();
        self.register_named::<T>(short_name(model_type.name()))
    }

    /// Register model `T` under an explicit name.
    pub fn register_named<T: Model>(&mut self, name: &'static str) -> &mut Self {
        let model_type = ModelType::of::<T>();
        debug!(model = %model_type, name, "registering model");

        self.models.insert(
            model_type,
            Registration {
                declare: T::declaration,
                factory: create_model::<T>
            }
        );
        self.names.insert(model_type.name(), model_type);
        if let Some(previous) = self.names.insert(name, model_type)
            && previous != model_type
        {
            debug!(name, previous = %previous, "model name now refers to another type");
        }

        let caster: Caster<T> = Box::new(|model| model.into_any().downcast::<T>().ok());
        self.casters.insert(model_type, Box::new(caster));

        T::register_interfaces(self);
        self
    }

    /// Link interface `I` to concrete model `T`.
    ///
    /// `upcast` converts the concrete box into the interface box, usually
    /// just `|model| model`.
    pub fn interface<I: ?Sized + 'static, T: Model>(
        &mut self,
        upcast: fn(Box<T>) -> Box<I>
    ) -> &mut Self {
        let interface = ModelType::of::<I>();
        let concrete = ModelType::of::<T>();
        debug!(interface = %interface, concrete = %concrete, "registering interface");

        self.interfaces.insert(interface, concrete);
        let caster: Caster<I> =
            Box::new(move |model| model.into_any().downcast::<T>().ok().map(upcast));
        self.casters.insert(interface, Box::new(caster));
        self
    }

    /// Freeze the registrations.
    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            models:     self.models,
            names:      self.names,
            interfaces: self.interfaces,
            casters:    self.casters
        }
    }
}

/// Immutable registry of models, interfaces and factories.
pub struct ModelRegistry {
    models:     HashMap<ModelType, Registration>,
    names:      HashMap<&'static str, ModelType>,
    interfaces: HashMap<ModelType, ModelType>,
    casters:    HashMap<ModelType, Box<dyn Any + Send + Sync>>
}

impl ModelRegistry {
    /// Start collecting registrations.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Translate an interface type into its registered concrete type.
    ///
    /// Anything that is not a registered interface is returned unchanged.
    pub fn resolve_concrete_type(&self, model_type: ModelType) -> ModelType {
        self.interfaces
            .get(&model_type)
            .copied()
            .unwrap_or(model_type)
    }

    /// Whether `model_type` (after resolution) is a registered model.
    pub fn contains(&self, model_type: ModelType) -> bool {
        self.models
            .contains_key(&self.resolve_concrete_type(model_type))
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no model is registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model registered under `name` (short or fully qualified type name).
    pub fn model_type_by_name(&self, name: &str) -> Option<ModelType> {
        self.names.get(name).copied()
    }

    /// Declaration table of a concrete model.
    pub fn declaration(&self, model_type: ModelType) -> Option<ModelDecl> {
        self.models
            .get(&model_type)
            .map(|registration| (registration.declare)())
    }

    /// Build an untyped instance and attach `parent`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownType`] when no factory is registered.
    pub fn create(
        &self,
        model_type: ModelType,
        parent: Option<ParentRef>
    ) -> Result<Box<dyn DataModel>, ModelError> {
        let concrete = self.resolve_concrete_type(model_type);
        let registration = self
            .models
            .get(&concrete)
            .ok_or_else(|| ModelError::UnknownType {
                name: model_type.name().to_string()
            })?;

        let mut model = (registration.factory)();
        if let Some(parent) = parent
            && !model.set_parent(Some(parent))
        {
            trace!(model = %concrete, "model has no parent slot, parent dropped");
        }
        trace!(requested = %model_type, model = %concrete, "created model instance");
        Ok(model)
    }

    /// Build an instance typed as `R`, a concrete model or an interface.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownType`] when `R` is not registered.
    pub fn create_as<R: ?Sized + 'static>(
        &self,
        parent: Option<ParentRef>
    ) -> Result<Box<R>, ModelError> {
        let requested = ModelType::of::<R>();
        let caster = self
            .casters
            .get(&requested)
            .and_then(|caster| caster.downcast_ref::<Caster<R>>())
            .ok_or_else(|| ModelError::UnknownType {
                name: requested.name().to_string()
            })?;

        let model = self.create(requested, parent)?;
        let found = model.model_type().name();
        caster(model).ok_or(ModelError::TypeMismatch {
            expected: requested.name(),
            found
        })
    }

    /// Build an untyped instance by registered name.
    ///
    /// # Errors
    ///
    /// [`ModelError::Argument`] for an empty name,
    /// [`ModelError::UnknownType`] for an unknown one.
    pub fn create_by_name(
        &self,
        name: &str,
        parent: Option<ParentRef>
    ) -> Result<Box<dyn DataModel>, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::argument("model type name must not be empty"));
        }

        let model_type = self
            .model_type_by_name(name)
            .ok_or_else(|| ModelError::UnknownType {
                name: name.to_string()
            })?;
        self.create(model_type, parent)
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.models.len())
            .field("interfaces", &self.interfaces.len())
            .finish()
    }
}
