// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declarative backend mapping of a model type.
//!
//! A [`ModelDecl`] is the raw, unprocessed list of mapping annotations of a
//! type: type-level `rest`/`graph` targets and, per property, the field-level
//! attributes in declaration order. `#[derive(Model)]` generates it; the
//! [scanner](crate::scan) turns it into [`EntityStaticInfo`].
//!
//! # Structure
//!
//! ```text
//! ModelDecl
//! ├── model_type
//! ├── expando: bool               (uses the overflow field)
//! ├── rest: Vec<RestTypeDecl>     (#[rest(uri = ...)] on the type)
//! ├── graph: Vec<GraphTypeDecl>   (#[graph(uri = ...)] on the type)
//! └── properties: Vec<PropertyDecl>
//!     └── PropertyDecl
//!         ├── name, declared_type
//!         ├── accessor: FieldAccessor
//!         └── attrs: Vec<PropertyAttr>
//!             ├── Rest(RestFieldDecl)
//!             ├── Graph(GraphFieldDecl)
//!             ├── Key { key_property }
//!             └── System
//! ```
//!
//! [`EntityStaticInfo`]: crate::EntityStaticInfo

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{DataModel, ModelError, ModelType};

/// Property name of the overflow field on expando models.
pub const OVERFLOW_FIELD_NAME: &str = "Values";

/// Type-level mapping to the legacy resource API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestTypeDecl {
    /// Context type this mapping applies to; the declaring type when `None`.
    pub target:            Option<ModelType>,
    /// Backend entity type name (e.g. `SP.List`).
    pub entity_type:       Option<&'static str>,
    /// Resource URI template.
    pub uri:               &'static str,
    /// Override for single item reads.
    pub get:               Option<&'static str>,
    /// Override for collection reads.
    pub linq_get:          Option<&'static str>,
    /// Override for updates.
    pub update:            Option<&'static str>,
    /// Override for deletes.
    pub delete:            Option<&'static str>,
    /// Backend property absorbed by the overflow field.
    pub overflow_property: Option<&'static str>
}

impl RestTypeDecl {
    /// Mapping with only a URI template.
    pub const fn new(uri: &'static str) -> Self {
        Self {
            target: None,
            entity_type: None,
            uri,
            get: None,
            linq_get: None,
            update: None,
            delete: None,
            overflow_property: None
        }
    }
}

/// Type-level mapping to the graph API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphTypeDecl {
    /// Context type this mapping applies to; the declaring type when `None`.
    pub target:            Option<ModelType>,
    /// Name of the id property in graph payloads, `"id"` when `None`.
    pub id:                Option<&'static str>,
    /// Resource URI template.
    pub uri:               &'static str,
    /// Override for single item reads.
    pub get:               Option<&'static str>,
    /// Override for collection reads.
    pub linq_get:          Option<&'static str>,
    /// Override for updates.
    pub update:            Option<&'static str>,
    /// Override for deletes.
    pub delete:            Option<&'static str>,
    /// Backend property absorbed by the overflow field.
    pub overflow_property: Option<&'static str>,
    /// Only available on the beta endpoint.
    pub beta:              bool
}

impl GraphTypeDecl {
    /// Mapping with only a URI template.
    pub const fn new(uri: &'static str) -> Self {
        Self {
            target: None,
            id: None,
            uri,
            get: None,
            linq_get: None,
            update: None,
            delete: None,
            overflow_property: None,
            beta: false
        }
    }
}

/// Field-level mapping to the legacy resource API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestFieldDecl {
    /// Backend field name; the property name when `None`.
    pub name:              Option<&'static str>,
    /// Field can be expanded inline.
    pub expandable:        bool,
    /// Field is expanded when no selection is given.
    pub expand_by_default: bool,
    /// Field is mapped by custom code.
    pub custom_mapping:    bool,
    /// JSON path of the value inside the backend payload.
    pub json_path:         Option<&'static str>
}

/// Field-level mapping to the graph API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphFieldDecl {
    /// Backend field name; camelCase of the property name when `None`.
    pub name:              Option<&'static str>,
    /// Field can be expanded.
    pub expandable:        bool,
    /// Field is expanded when no selection is given.
    pub expand_by_default: bool,
    /// Field is mapped by custom code.
    pub custom_mapping:    bool,
    /// JSON path of the value inside the backend payload.
    pub json_path:         Option<&'static str>,
    /// Dedicated query used to load this field.
    pub get:               Option<&'static str>,
    /// Only available on the beta endpoint.
    pub beta:              bool
}

/// One field-level annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAttr {
    /// Maps the property to a legacy resource API field.
    Rest(RestFieldDecl),
    /// Maps the property to a graph API field.
    Graph(GraphFieldDecl),
    /// The property only redirects to the real key property.
    Key {
        /// Name of the property holding the key.
        key_property: &'static str
    },
    /// Infrastructure property, never mapped.
    System
}

/// Reads a field into the generic value slot.
pub type FieldGetter = fn(&dyn DataModel) -> Result<Value, ModelError>;

/// Writes a field from the generic value slot.
pub type FieldSetter = fn(&mut dyn DataModel, Value) -> Result<(), ModelError>;

/// Read/write handle to one property of a model.
#[derive(Clone, Copy)]
pub struct FieldAccessor {
    get: FieldGetter,
    set: FieldSetter
}

impl FieldAccessor {
    /// Accessor from a getter and a setter.
    pub const fn new(get: FieldGetter, set: FieldSetter) -> Self {
        Self {
            get,
            set
        }
    }

    /// Read the property of `model`.
    ///
    /// # Errors
    ///
    /// [`ModelError::TypeMismatch`] when `model` is not the declaring type,
    /// [`ModelError::Value`] when the value cannot be serialized.
    pub fn get(&self, model: &dyn DataModel) -> Result<Value, ModelError> {
        (self.get)(model)
    }

    /// Write the property of `model`.
    ///
    /// # Errors
    ///
    /// [`ModelError::TypeMismatch`] when `model` is not the declaring type,
    /// [`ModelError::Value`] when `value` does not fit the property type.
    pub fn set(&self, model: &mut dyn DataModel, value: Value) -> Result<(), ModelError> {
        (self.set)(model, value)
    }
}

impl std::fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FieldAccessor")
    }
}

/// Downcast a model for a generated accessor.
///
/// # Errors
///
/// [`ModelError::TypeMismatch`] when `model` is not a `T`.
pub fn downcast_model<T: DataModel>(model: &dyn DataModel) -> Result<&T, ModelError> {
    let found = model.model_type().name();
    model
        .as_any()
        .downcast_ref::<T>()
        .ok_or(ModelError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            found
        })
}

/// Mutable variant of [`downcast_model`].
///
/// # Errors
///
/// [`ModelError::TypeMismatch`] when `model` is not a `T`.
pub fn downcast_model_mut<T: DataModel>(model: &mut dyn DataModel) -> Result<&mut T, ModelError> {
    let found = model.model_type().name();
    model
        .as_any_mut()
        .downcast_mut::<T>()
        .ok_or(ModelError::TypeMismatch {
            expected: std::any::type_name::<T>(),
            found
        })
}

/// Serialize a property value for a generated getter.
///
/// # Errors
///
/// [`ModelError::Value`] when serialization fails.
pub fn to_field_value<V: Serialize + ?Sized>(field: &str, value: &V) -> Result<Value, ModelError> {
    serde_json::to_value(value).map_err(|err| ModelError::value(field, err))
}

/// Deserialize a property value for a generated setter.
///
/// # Errors
///
/// [`ModelError::Value`] when `value` does not fit `V`.
pub fn from_field_value<V: DeserializeOwned>(field: &str, value: Value) -> Result<V, ModelError> {
    serde_json::from_value(value).map_err(|err| ModelError::value(field, err))
}

/// One property of a model and its annotations.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    /// Property name (PascalCase).
    pub name:          &'static str,
    /// Rust type of the property, as written.
    pub declared_type: &'static str,
    /// Read/write handle.
    pub accessor:      FieldAccessor,
    /// Annotations in declaration order.
    pub attrs:         Vec<PropertyAttr>
}

impl PropertyDecl {
    /// Unannotated property.
    pub fn new(name: &'static str, declared_type: &'static str, accessor: FieldAccessor) -> Self {
        Self {
            name,
            declared_type,
            accessor,
            attrs: Vec::new()
        }
    }

    /// Append an annotation.
    #[must_use]
    pub fn with(mut self, attr: PropertyAttr) -> Self {
        self.attrs.push(attr);
        self
    }
}

/// Complete declaration table of a model type.
#[derive(Debug, Clone)]
pub struct ModelDecl {
    /// Declaring type.
    pub model_type: ModelType,
    /// Legacy resource API mappings, in declaration order.
    pub rest:       Vec<RestTypeDecl>,
    /// Graph API mappings, in declaration order.
    pub graph:      Vec<GraphTypeDecl>,
    /// Type carries an overflow field for unmodeled properties.
    pub expando:    bool,
    /// Public properties, in declaration order.
    pub properties: Vec<PropertyDecl>
}

impl ModelDecl {
    /// Empty declaration for `model_type`.
    pub const fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            rest: Vec::new(),
            graph: Vec::new(),
            expando: false,
            properties: Vec::new()
        }
    }

    /// Add a legacy resource API mapping.
    #[must_use]
    pub fn rest(mut self, decl: RestTypeDecl) -> Self {
        self.rest.push(decl);
        self
    }

    /// Add a graph API mapping.
    #[must_use]
    pub fn graph(mut self, decl: GraphTypeDecl) -> Self {
        self.graph.push(decl);
        self
    }

    /// Mark the type as carrying an overflow field.
    #[must_use]
    pub fn expando(mut self) -> Self {
        self.expando = true;
        self
    }

    /// Add a property.
    #[must_use]
    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    /// Whether any backend mapping is declared.
    pub fn has_mapping(&self) -> bool {
        !self.rest.is_empty() || !self.graph.is_empty()
    }
}
