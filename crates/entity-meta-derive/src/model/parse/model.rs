// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model-level parsing.
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `#[model(expando)]` | `false` | Model has an overflow field |
//! | `#[model(collection)]` | `false` | Model is a collection wrapper |
//! | `#[model(implements(IList, ...))]` | none | Interfaces resolved to this model |

use darling::{FromDeriveInput, util::PathList};
use syn::{Attribute, DeriveInput, Generics, Ident, Path, Visibility};

use super::{
    field::FieldDef,
    target::{GraphTarget, RestTarget, parse_targets}
};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model), supports(struct_named), forward_attrs(rest, graph))]
struct ModelAttrs {
    ident: Ident,

    vis: Visibility,

    generics: Generics,

    attrs: Vec<Attribute>,

    #[darling(default)]
    expando: bool,

    #[darling(default)]
    collection: bool,

    #[darling(default)]
    implements: PathList
}

/// Complete parsed model definition.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier.
    pub ident:      Ident,
    /// Struct visibility, reused for selector constants.
    pub vis:        Visibility,
    /// Model carries an overflow field.
    pub expando:    bool,
    /// Model is a collection wrapper.
    pub collection: bool,
    /// Interfaces this model is registered for.
    pub implements: Vec<Path>,
    /// Legacy resource API mappings.
    pub rest:       Vec<RestTarget>,
    /// Graph API mappings.
    pub graph:      Vec<GraphTarget>,
    /// Named fields in declaration order.
    pub fields:     Vec<FieldDef>
}

impl ModelDef {
    /// Parse a model definition from the derive input.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Generic struct
    /// - More than one `#[overflow]` or `#[parent]` field
    /// - Malformed or unknown attribute keys
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ModelAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(
                darling::Error::custom("Model cannot be derived for generic structs")
                    .with_span(&attrs.generics)
            );
        }

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => {
                    let mut errors = darling::Error::accumulator();
                    let fields = named
                        .named
                        .iter()
                        .filter_map(|field| errors.handle(FieldDef::from_field(field)))
                        .collect();
                    errors.finish_with(fields)?
                }
                _ => {
                    return Err(darling::Error::custom("Model requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Model can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let (rest, graph) = parse_targets(&attrs.attrs)?;

        if fields.iter().filter(|f| f.markers.overflow).count() > 1 {
            return Err(
                darling::Error::custom("Model can have at most one #[overflow] field")
                    .with_span(&input.ident)
            );
        }
        if fields.iter().filter(|f| f.markers.parent).count() > 1 {
            return Err(
                darling::Error::custom("Model can have at most one #[parent] field")
                    .with_span(&input.ident)
            );
        }

        let expando = attrs.expando || fields.iter().any(|f| f.markers.overflow);

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            expando,
            collection: attrs.collection,
            implements: attrs.implements.to_vec(),
            rest,
            graph,
            fields
        })
    }

    /// Fields declared to the runtime, in order.
    pub fn properties(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_property())
    }

    /// Fields marked `#[key]`.
    pub fn key_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.properties().filter(|f| f.markers.key)
    }

    /// Field marked `#[parent]`.
    pub fn parent_field(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.markers.parent)
    }
}
