// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field mapping attributes.

use darling::FromMeta;

/// `#[rest(...)]` on a field.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromMeta)]
#[darling(default)]
pub struct RestFieldAttr {
    /// Backend field name override.
    pub name:              Option<String>,
    /// Field can be expanded inline.
    pub expandable:        bool,
    /// Expanded when no selection is given.
    pub expand_by_default: bool,
    /// Mapped by custom code.
    pub custom_mapping:    bool,
    /// JSON path inside the payload.
    pub json_path:         Option<String>
}

/// `#[graph(...)]` on a field.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromMeta)]
#[darling(default)]
pub struct GraphFieldAttr {
    /// Backend field name override.
    pub name:              Option<String>,
    /// Field can be expanded.
    pub expandable:        bool,
    /// Expanded when no selection is given.
    pub expand_by_default: bool,
    /// Mapped by custom code.
    pub custom_mapping:    bool,
    /// JSON path inside the payload.
    pub json_path:         Option<String>,
    /// Dedicated query loading this field.
    pub get:               Option<String>,
    /// Only available on the beta endpoint.
    pub beta:              bool
}

/// One mapping attribute of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMapping {
    /// Legacy resource API mapping.
    Rest(RestFieldAttr),
    /// Graph API mapping.
    Graph(GraphFieldAttr)
}
