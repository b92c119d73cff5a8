// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Mapping attributes (`#[rest(...)]`, `#[graph(...)]`) are parsed with
//! darling and kept in declaration order. Markers (`#[key]`, `#[system]`,
//! `#[parent]`, `#[overflow]`) are plain paths.
//!
//! ```rust,ignore
//! #[key]
//! #[graph(name = "id")]
//! pub id: String,
//!
//! #[rest(name = "Title", expandable)]
//! #[graph(json_path = "fields.title")]
//! pub title: String,
//!
//! #[system]
//! pub requested_at: u64,
//! ```

mod mapping;

use convert_case::{Case, Casing};
use quote::ToTokens;
use syn::{Attribute, Field, Ident, Meta, Type};

pub use self::mapping::{FieldMapping, GraphFieldAttr, RestFieldAttr};
use crate::utils::docs::extract_doc_summary;

/// Property name of the overflow field.
pub const OVERFLOW_PROPERTY: &str = "Values";

/// Role of a field besides its mappings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldMarkers {
    /// `#[key]`: the field holds the model key.
    pub key:      bool,
    /// `#[system]`: never mapped.
    pub system:   bool,
    /// `#[parent]`: holds the parent reference, implies `system`.
    pub parent:   bool,
    /// `#[overflow]`: catches unmodeled backend properties.
    pub overflow: bool
}

/// One named field of the model struct.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident:    Ident,
    /// Field type.
    pub ty:       Type,
    /// Mapping attributes in declaration order.
    pub mappings: Vec<FieldMapping>,
    /// Marker attributes.
    pub markers:  FieldMarkers,
    /// First line of the field documentation.
    pub doc:      Option<String>
}

impl FieldDef {
    /// Parse a field and its attributes.
    ///
    /// # Errors
    ///
    /// Unnamed fields and malformed mapping attributes.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Model fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let mut mappings = Vec::new();
        let mut markers = FieldMarkers::default();

        for attr in &field.attrs {
            if attr.path().is_ident("rest") {
                if let Some(rest) = errors.handle(parse_mapping::<RestFieldAttr>(attr)) {
                    mappings.push(FieldMapping::Rest(rest));
                }
            } else if attr.path().is_ident("graph") {
                if let Some(graph) = errors.handle(parse_mapping::<GraphFieldAttr>(attr)) {
                    mappings.push(FieldMapping::Graph(graph));
                }
            } else if attr.path().is_ident("key") {
                markers.key = errors.handle(parse_marker(attr)).is_some();
            } else if attr.path().is_ident("system") {
                markers.system = errors.handle(parse_marker(attr)).is_some();
            } else if attr.path().is_ident("parent") {
                markers.parent = errors.handle(parse_marker(attr)).is_some();
            } else if attr.path().is_ident("overflow") {
                markers.overflow = errors.handle(parse_marker(attr)).is_some();
            }
        }

        errors.finish_with(Self {
            ident,
            ty: field.ty.clone(),
            mappings,
            markers,
            doc: extract_doc_summary(&field.attrs)
        })
    }

    /// Property name: PascalCase of the identifier, or `Values` for the
    /// overflow field.
    #[must_use]
    pub fn property_name(&self) -> String {
        if self.markers.overflow {
            return OVERFLOW_PROPERTY.to_string();
        }
        self.raw_name().to_case(Case::Pascal)
    }

    /// Name of the generated selector constant.
    #[must_use]
    pub fn selector_ident(&self) -> Ident {
        Ident::new(&self.raw_name().to_case(Case::Constant), self.ident.span())
    }

    /// Written form of the field type.
    #[must_use]
    pub fn type_name(&self) -> String {
        let written = self.ty.to_token_stream().to_string();
        written
            .replace(" :: ", "::")
            .replace(":: ", "::")
            .replace(" <", "<")
            .replace("< ", "<")
            .replace(" >", ">")
            .replace(" ,", ",")
            .replace("& ", "&")
    }

    /// Whether the field is declared to the runtime.
    ///
    /// System and parent fields stay invisible to metadata.
    #[must_use]
    pub fn is_property(&self) -> bool {
        !self.markers.system && !self.markers.parent
    }

    fn raw_name(&self) -> String {
        let name = self.ident.to_string();
        name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
    }
}

fn parse_mapping<T: darling::FromMeta + Default>(attr: &Attribute) -> darling::Result<T> {
    match &attr.meta {
        Meta::Path(_) => Ok(T::default()),
        meta => T::from_meta(meta)
    }
}

fn parse_marker(attr: &Attribute) -> darling::Result<()> {
    match &attr.meta {
        Meta::Path(_) => Ok(()),
        _ => Err(darling::Error::custom(format!(
            "#[{}] takes no arguments",
            attr.path().to_token_stream()
        ))
        .with_span(attr))
    }
}
