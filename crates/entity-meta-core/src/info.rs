// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved entity metadata.
//!
//! [`EntityStaticInfo`] is produced once per concrete type by the scanner and
//! shared read-only through the cache. [`EntityCallInfo`] is a private copy
//! made for a single request, with field load flags and call context applied.

use std::ops::Deref;

use crate::{FieldAccessor, ModelType};

/// Resolved legacy resource API mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestTypeInfo {
    /// Context type this mapping applies to.
    pub target:            ModelType,
    /// Backend entity type name.
    pub entity_type:       Option<String>,
    /// Resource URI template.
    pub uri:               String,
    /// Template for single item reads.
    pub get:               String,
    /// Template for collection reads.
    pub linq_get:          String,
    /// Template for updates.
    pub update:            String,
    /// Template for deletes.
    pub delete:            String,
    /// Backend property absorbed by the overflow field.
    pub overflow_property: Option<String>
}

/// Resolved graph API mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTypeInfo {
    /// Context type this mapping applies to.
    pub target:            ModelType,
    /// Name of the id property in graph payloads.
    pub id:                String,
    /// Resource URI template.
    pub uri:               String,
    /// Template for single item reads.
    pub get:               String,
    /// Template for collection reads.
    pub linq_get:          String,
    /// Template for updates.
    pub update:            String,
    /// Template for deletes.
    pub delete:            String,
    /// Backend property absorbed by the overflow field.
    pub overflow_property: Option<String>,
    /// Only available on the beta endpoint.
    pub beta:              bool
}

/// Mapping of one model property.
#[derive(Debug, Clone)]
pub struct EntityFieldInfo {
    /// Property name.
    pub name:                     String,
    /// Rust type of the property, as written.
    pub declared_type:            &'static str,
    /// Read/write handle to the property.
    pub accessor:                 FieldAccessor,
    /// Legacy resource API field name.
    pub rest_name:                Option<String>,
    /// Can be expanded inline on the legacy resource API.
    pub rest_expandable:          bool,
    /// Mapped by custom code on the legacy resource API.
    pub rest_use_custom_mapping:  bool,
    /// JSON path on the legacy resource API.
    pub rest_json_path:           Option<String>,
    /// Graph API field name.
    pub graph_name:               Option<String>,
    /// Can be expanded on the graph API.
    pub graph_expandable:         bool,
    /// Mapped by custom code on the graph API.
    pub graph_use_custom_mapping: bool,
    /// JSON path on the graph API.
    pub graph_json_path:          Option<String>,
    /// Dedicated graph query for this field.
    pub graph_get:                Option<String>,
    /// Only available on the graph beta endpoint.
    pub graph_beta:               bool,
    /// Expanded when no field selection is given.
    pub expand_by_default:        bool,
    /// Key of the legacy resource API.
    pub is_rest_key:              bool,
    /// Key of the graph API.
    pub is_graph_key:             bool,
    /// Fetch this field in the current call.
    pub load:                     bool
}

impl EntityFieldInfo {
    /// Unmapped field row.
    pub fn new(name: impl Into<String>, declared_type: &'static str, accessor: FieldAccessor) -> Self {
        Self {
            name: name.into(),
            declared_type,
            accessor,
            rest_name: None,
            rest_expandable: false,
            rest_use_custom_mapping: false,
            rest_json_path: None,
            graph_name: None,
            graph_expandable: false,
            graph_use_custom_mapping: false,
            graph_json_path: None,
            graph_get: None,
            graph_beta: false,
            expand_by_default: false,
            is_rest_key: false,
            is_graph_key: false,
            load: true
        }
    }

    /// Key for either backend.
    pub const fn is_key(&self) -> bool {
        self.is_rest_key || self.is_graph_key
    }

    /// Graph field that always needs a follow-up query.
    pub fn is_graph_non_expandable_collection(&self) -> bool {
        self.graph_expandable && self.graph_get.is_some()
    }
}

/// Static metadata of a concrete model type.
#[derive(Debug, Clone)]
pub struct EntityStaticInfo {
    /// Concrete type described.
    pub model_type:            ModelType,
    /// Type carries an overflow field.
    pub uses_overflow_field:   bool,
    /// Legacy resource API mappings.
    pub rest_targets:          Vec<RestTypeInfo>,
    /// Graph API mappings.
    pub graph_targets:         Vec<GraphTypeInfo>,
    /// Mapped fields, in property order.
    pub fields:                Vec<EntityFieldInfo>,
    /// Property name of the key field.
    pub actual_key_field_name: Option<String>
}

impl EntityStaticInfo {
    /// Empty metadata for `model_type`.
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            uses_overflow_field: false,
            rest_targets: Vec::new(),
            graph_targets: Vec::new(),
            fields: Vec::new(),
            actual_key_field_name: None
        }
    }

    /// Field by property name, ignoring case.
    pub fn field(&self, name: &str) -> Option<&EntityFieldInfo> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Field designated as key.
    pub fn key_field(&self) -> Option<&EntityFieldInfo> {
        let name = self.actual_key_field_name.as_deref()?;
        self.fields.iter().find(|field| field.name == name)
    }

    /// Graph fields that cannot be satisfied by inline expansion.
    pub fn graph_non_expandable_collections(&self) -> impl Iterator<Item = &EntityFieldInfo> {
        self.fields
            .iter()
            .filter(|field| field.is_graph_non_expandable_collection())
    }

    /// Whether a legacy resource API mapping exists.
    pub fn can_use_rest(&self) -> bool {
        !self.rest_targets.is_empty()
    }

    /// Whether a graph API mapping exists.
    pub fn can_use_graph(&self) -> bool {
        !self.graph_targets.is_empty()
    }
}

/// Metadata specialized for one call.
///
/// Dereferences to the copied [`EntityStaticInfo`]; the copy is owned, so
/// changing load flags never touches the cached instance.
#[derive(Debug, Clone)]
pub struct EntityCallInfo {
    info:                                   EntityStaticInfo,
    /// Fields for the legacy resource API were restricted by a selection.
    pub rest_fields_loaded_via_expression:  bool,
    /// Fields for the graph API were restricted by a selection.
    pub graph_fields_loaded_via_expression: bool,
    /// Owning model type the call is made in.
    pub target:                             Option<ModelType>
}

impl EntityCallInfo {
    /// Copy `info` for a call.
    pub fn new(info: &EntityStaticInfo) -> Self {
        Self {
            info:                               info.clone(),
            rest_fields_loaded_via_expression:  false,
            graph_fields_loaded_via_expression: false,
            target:                             None
        }
    }

    /// Mutable access to the copied fields.
    pub fn fields_mut(&mut self) -> &mut [EntityFieldInfo] {
        &mut self.info.fields
    }

    /// Fields marked for loading.
    pub fn fields_to_load(&self) -> impl Iterator<Item = &EntityFieldInfo> {
        self.info.fields.iter().filter(|field| field.load)
    }

    /// Legacy resource API mapping for the call context.
    ///
    /// Picks the mapping declared for [`target`](Self::target), falling back
    /// to the first declared one.
    pub fn rest_target(&self) -> Option<&RestTypeInfo> {
        self.target
            .and_then(|target| {
                self.info
                    .rest_targets
                    .iter()
                    .find(|info| info.target == target)
            })
            .or_else(|| self.info.rest_targets.first())
    }

    /// Graph API mapping for the call context.
    pub fn graph_target(&self) -> Option<&GraphTypeInfo> {
        self.target
            .and_then(|target| {
                self.info
                    .graph_targets
                    .iter()
                    .find(|info| info.target == target)
            })
            .or_else(|| self.info.graph_targets.first())
    }

    /// Backend entity type name on the legacy resource API.
    pub fn rest_entity_type(&self) -> Option<&str> {
        self.rest_target()?.entity_type.as_deref()
    }

    /// Resource URI template on the legacy resource API.
    pub fn rest_uri(&self) -> Option<&str> {
        self.rest_target().map(|info| info.uri.as_str())
    }

    /// Single item read template on the legacy resource API.
    pub fn rest_get(&self) -> Option<&str> {
        self.rest_target().map(|info| info.get.as_str())
    }

    /// Collection read template on the legacy resource API.
    pub fn rest_linq_get(&self) -> Option<&str> {
        self.rest_target().map(|info| info.linq_get.as_str())
    }

    /// Update template on the legacy resource API.
    pub fn rest_update(&self) -> Option<&str> {
        self.rest_target().map(|info| info.update.as_str())
    }

    /// Delete template on the legacy resource API.
    pub fn rest_delete(&self) -> Option<&str> {
        self.rest_target().map(|info| info.delete.as_str())
    }

    /// Resource URI template on the graph API.
    pub fn graph_uri(&self) -> Option<&str> {
        self.graph_target().map(|info| info.uri.as_str())
    }

    /// Single item read template on the graph API.
    pub fn graph_get(&self) -> Option<&str> {
        self.graph_target().map(|info| info.get.as_str())
    }

    /// Collection read template on the graph API.
    pub fn graph_linq_get(&self) -> Option<&str> {
        self.graph_target().map(|info| info.linq_get.as_str())
    }

    /// Update template on the graph API.
    pub fn graph_update(&self) -> Option<&str> {
        self.graph_target().map(|info| info.update.as_str())
    }

    /// Delete template on the graph API.
    pub fn graph_delete(&self) -> Option<&str> {
        self.graph_target().map(|info| info.delete.as_str())
    }

    /// Id property name on the graph API.
    pub fn graph_id(&self) -> Option<&str> {
        self.graph_target().map(|info| info.id.as_str())
    }

    /// Whether the graph mapping is beta only.
    pub fn graph_beta(&self) -> bool {
        self.graph_target().is_some_and(|info| info.beta)
    }
}

impl Deref for EntityCallInfo {
    type Target = EntityStaticInfo;

    fn deref(&self) -> &Self::Target {
        &self.info
    }
}
