// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type-level `#[rest(...)]` and `#[graph(...)]` parsing.
//!
//! Both attributes are repeatable: one model can map to several resource
//! shapes, selected at runtime by the owning context (`target`).
//!
//! | Key | `rest` | `graph` | Default |
//! |-----|--------|---------|---------|
//! | `uri` | yes | yes | required |
//! | `target` | yes | yes | the model itself |
//! | `get`, `linq_get`, `update`, `delete` | yes | yes | `uri` |
//! | `overflow_property` | yes | yes | none |
//! | `entity_type` | yes | no | none |
//! | `id` | no | yes | `"id"` |
//! | `beta` | no | yes | `false` |

use darling::FromMeta;
use syn::{Attribute, Path};

/// One `#[rest(...)]` attribute on the struct.
#[derive(Debug, Clone, FromMeta)]
pub struct RestTarget {
    /// Resource URI template.
    pub uri: String,

    /// Context type the mapping applies to.
    pub target: Option<Path>,

    /// Backend entity type name, e.g. `SP.List`.
    pub entity_type: Option<String>,

    /// Single item read override.
    pub get: Option<String>,

    /// Collection read override.
    pub linq_get: Option<String>,

    /// Update override.
    pub update: Option<String>,

    /// Delete override.
    pub delete: Option<String>,

    /// Backend property absorbed by the overflow field.
    pub overflow_property: Option<String>
}

/// One `#[graph(...)]` attribute on the struct.
#[derive(Debug, Clone, FromMeta)]
pub struct GraphTarget {
    /// Resource URI template.
    pub uri: String,

    /// Context type the mapping applies to.
    pub target: Option<Path>,

    /// Id property name in graph payloads.
    pub id: Option<String>,

    /// Single item read override.
    pub get: Option<String>,

    /// Collection read override.
    pub linq_get: Option<String>,

    /// Update override.
    pub update: Option<String>,

    /// Delete override.
    pub delete: Option<String>,

    /// Backend property absorbed by the overflow field.
    pub overflow_property: Option<String>,

    /// Only available on the beta endpoint.
    #[darling(default)]
    pub beta: bool
}

/// Parse every `#[rest(...)]` and `#[graph(...)]` on the struct.
///
/// All malformed attributes are reported, not only the first one.
pub fn parse_targets(attrs: &[Attribute]) -> darling::Result<(Vec<RestTarget>, Vec<GraphTarget>)> {
    let mut errors = darling::Error::accumulator();
    let mut rest = Vec::new();
    let mut graph = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("rest") {
            if let Some(target) = errors.handle(RestTarget::from_meta(&attr.meta)) {
                rest.push(target);
            }
        } else if attr.path().is_ident("graph")
            && let Some(target) = errors.handle(GraphTarget::from_meta(&attr.meta))
        {
            graph.push(target);
        }
    }

    errors.finish_with((rest, graph))
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn attrs(input: DeriveInput) -> Vec<Attribute> {
        input.attrs
    }

    #[test]
    fn parses_rest_target() {
        let input: DeriveInput = syn::parse_quote! {
            #[rest(
                uri = "_api/web/lists/getbyid(guid'{Id}')",
                entity_type = "SP.List",
                target = "Web",
                linq_get = "_api/web/lists",
                overflow_property = "ListFields"
            )]
            struct List {}
        };
        let (rest, graph) = parse_targets(&attrs(input)).unwrap();

        assert!(graph.is_empty());
        let target = &rest[0];
        assert_eq!(target.uri, "_api/web/lists/getbyid(guid'{Id}')");
        assert_eq!(target.entity_type.as_deref(), Some("SP.List"));
        assert!(target.target.as_ref().unwrap().is_ident("Web"));
        assert_eq!(target.linq_get.as_deref(), Some("_api/web/lists"));
        assert!(target.get.is_none());
        assert_eq!(target.overflow_property.as_deref(), Some("ListFields"));
    }

    #[test]
    fn parses_graph_target() {
        let input: DeriveInput = syn::parse_quote! {
            #[graph(uri = "sites/{Parent.GraphId}/lists/{GraphId}", id = "listId", beta)]
            struct List {}
        };
        let (rest, graph) = parse_targets(&attrs(input)).unwrap();

        assert!(rest.is_empty());
        assert_eq!(graph[0].id.as_deref(), Some("listId"));
        assert!(graph[0].beta);
        assert!(graph[0].target.is_none());
    }

    #[test]
    fn targets_are_repeatable_in_order() {
        let input: DeriveInput = syn::parse_quote! {
            #[rest(uri = "_api/web/contenttypes", target = "Web")]
            #[rest(uri = "_api/web/lists/contenttypes", target = "List")]
            struct ContentType {}
        };
        let (rest, _) = parse_targets(&attrs(input)).unwrap();

        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1].uri, "_api/web/lists/contenttypes");
    }

    #[test]
    fn missing_uri_is_error() {
        let input: DeriveInput = syn::parse_quote! {
            #[rest(entity_type = "SP.Web")]
            struct Web {}
        };
        assert!(parse_targets(&attrs(input)).is_err());
    }

    #[test]
    fn unknown_key_is_error() {
        let input: DeriveInput = syn::parse_quote! {
            #[graph(uri = "sites/{Id}", version = "2")]
            struct Site {}
        };
        assert!(parse_targets(&attrs(input)).is_err());
    }

    #[test]
    fn errors_are_accumulated() {
        let input: DeriveInput = syn::parse_quote! {
            #[rest(entity_type = "SP.Web")]
            #[graph(beta)]
            struct Web {}
        };
        let err = parse_targets(&attrs(input)).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
