// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model traits and type identity.
//!
//! # Overview
//!
//! - [`ModelType`] — type token for concrete models and `dyn Trait` interfaces
//! - [`DataModel`] — object-safe base every model implements
//! - [`Model`] — static side of a model (declaration table, factory)
//! - [`ModelParent`] — anything a model can be attached to
//!
//! `#[derive(Model)]` implements all of these. Manual implementations are
//! supported for models that need custom behavior.

use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc
};

use crate::{decl::ModelDecl, registry::RegistryBuilder};

/// Type token identifying a model or interface type.
///
/// Equality and hashing only consider the [`TypeId`]; the name is kept for
/// diagnostics.
///
/// # Example
///
/// ```rust
/// use entity_meta_core::ModelType;
///
/// trait IList {}
/// struct List;
///
/// assert_ne!(ModelType::of::<List>(), ModelType::of::<dyn IList>());
/// assert!(ModelType::of::<List>().name().ends_with("List"));
/// ```
#[derive(Clone, Copy)]
pub struct ModelType {
    id:   TypeId,
    name: &'static str
}

impl ModelType {
    /// Token for `T`, which may be unsized (`dyn Trait`).
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id:   TypeId::of::<T>(),
            name: std::any::type_name::<T>()
        }
    }

    /// Underlying type id.
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModelType {}

impl Hash for ModelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelType({})", self.name)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Shared handle to the parent of a model.
pub type ParentRef = Arc<dyn ModelParent>;

/// Something a model can be attached to: another model or a collection.
pub trait ModelParent: Send + Sync {
    /// Type of the parent object.
    fn model_type(&self) -> ModelType;

    /// Whether this parent is a plain collection wrapper.
    ///
    /// Collections are skipped when the owning context of a model is
    /// determined.
    fn is_collection(&self) -> bool {
        false
    }

    /// Parent of this parent, if any.
    fn parent(&self) -> Option<ParentRef> {
        None
    }
}

impl fmt::Debug for dyn ModelParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelParent")
            .field("model_type", &self.model_type())
            .field("is_collection", &self.is_collection())
            .finish()
    }
}

/// Value-only parent description.
///
/// Used when the caller knows the chain of owning types but does not hold
/// the owning objects themselves.
///
/// ```rust
/// use std::sync::Arc;
///
/// use entity_meta_core::{ModelParent, ModelType, ParentLink};
///
/// struct Web;
/// struct ListCollection;
///
/// let web = ParentLink::new(ModelType::of::<Web>()).into_ref();
/// let lists = ParentLink::collection(ModelType::of::<ListCollection>())
///     .with_parent(web)
///     .into_ref();
///
/// assert!(lists.is_collection());
/// assert_eq!(lists.parent().unwrap().model_type(), ModelType::of::<Web>());
/// ```
#[derive(Clone)]
pub struct ParentLink {
    model_type: ModelType,
    collection: bool,
    parent:     Option<ParentRef>
}

impl ParentLink {
    /// Parent link for a model object.
    pub const fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            collection: false,
            parent: None
        }
    }

    /// Parent link for a collection wrapper.
    pub const fn collection(model_type: ModelType) -> Self {
        Self {
            model_type,
            collection: true,
            parent: None
        }
    }

    /// Parent link describing `model` and its parent chain.
    pub fn of(model: &dyn DataModel) -> Self {
        Self {
            model_type: model.model_type(),
            collection: model.is_collection(),
            parent:     model.parent().cloned()
        }
    }

    /// Attach the owner of this link.
    #[must_use]
    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Wrap into a shared [`ParentRef`].
    pub fn into_ref(self) -> ParentRef {
        Arc::new(self)
    }
}

impl ModelParent for ParentLink {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn is_collection(&self) -> bool {
        self.collection
    }

    fn parent(&self) -> Option<ParentRef> {
        self.parent.clone()
    }
}

impl fmt::Debug for ParentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentLink")
            .field("model_type", &self.model_type)
            .field("collection", &self.collection)
            .field("parent", &self.parent)
            .finish()
    }
}

/// Object-safe base of every model.
///
/// This is the untyped representation accepted by key accessors and the
/// dynamic parts of the API.
pub trait DataModel: Any + Send + Sync {
    /// Concrete type of this instance.
    fn model_type(&self) -> ModelType;

    /// Borrow as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as [`Any`] for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert a boxed model into a boxed [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;

    /// Whether this model is a plain collection wrapper.
    fn is_collection(&self) -> bool {
        false
    }

    /// Parent this model is attached to.
    fn parent(&self) -> Option<&ParentRef> {
        None
    }

    /// Attach a parent.
    ///
    /// Returns `false` when the model does not participate in a parent
    /// relationship; the parent is dropped in that case.
    fn set_parent(&mut self, parent: Option<ParentRef>) -> bool {
        let _ = parent;
        false
    }
}

impl dyn DataModel {
    /// Downcast to a concrete model.
    pub fn downcast_ref<T: DataModel>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast to a concrete model.
    pub fn downcast_mut<T: DataModel>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl fmt::Debug for dyn DataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataModel({})", self.model_type())
    }
}

/// Static side of a model.
///
/// Generated by `#[derive(Model)]`.
pub trait Model: DataModel + Sized {
    /// Declarative backend mapping of this type.
    ///
    /// Only read on a metadata cache miss; the result is scanned into
    /// [`EntityStaticInfo`](crate::EntityStaticInfo).
    fn declaration() -> ModelDecl;

    /// Construct a fresh, unattached instance.
    fn new_model() -> Self;

    /// Register the interface types this model implements.
    fn register_interfaces(registry: &mut RegistryBuilder) {
        let _ = registry;
    }
}
