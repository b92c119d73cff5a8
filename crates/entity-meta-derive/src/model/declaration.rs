// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Model` implementation: declaration table, accessors and factory.
//!
//! Every property gets a getter and a setter converting through
//! `serde_json::Value`, so property types must implement `Serialize` and
//! `DeserializeOwned`. The factory uses `Default`.
//!
//! `#[key]` keeps the field as a regular property and appends a synthetic
//! `Key` property that points the runtime at it.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
    interfaces,
    parse::{FieldDef, FieldMapping, GraphTarget, ModelDef, RestTarget},
    runtime
};

/// Generate `impl Model`.
pub fn generate(model: &ModelDef) -> TokenStream {
    let rt = runtime();
    let ident = &model.ident;

    let accessors = model.properties().map(|field| accessor_fns(model, field));
    let rest = model.rest.iter().map(rest_target);
    let graph = model.graph.iter().map(graph_target);
    let expando = model.expando.then(|| quote!(.expando()));
    let properties = model.properties().map(property);
    let keys = model.key_fields().map(key_property);
    let interfaces = interfaces::generate(model);

    quote! {
        impl #rt::Model for #ident {
            fn declaration() -> #rt::ModelDecl {
                #(#accessors)*

                #rt::ModelDecl::new(#rt::ModelType::of::<Self>())
                    #(.rest(#rest))*
                    #(.graph(#graph))*
                    #expando
                    #(.property(#properties))*
                    #(.property(#keys))*
            }

            fn new_model() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #interfaces
        }
    }
}

fn getter_ident(field: &FieldDef) -> syn::Ident {
    format_ident!("__get_{}", field.ident)
}

fn setter_ident(field: &FieldDef) -> syn::Ident {
    format_ident!("__set_{}", field.ident)
}

/// Nested getter/setter functions for one property.
fn accessor_fns(model: &ModelDef, field: &FieldDef) -> TokenStream {
    let rt = runtime();
    let ident = &model.ident;
    let name = &field.ident;
    let property = field.property_name();
    let getter = getter_ident(field);
    let setter = setter_ident(field);

    quote! {
        fn #getter(
            model: &dyn #rt::DataModel
        ) -> ::core::result::Result<#rt::serde_json::Value, #rt::ModelError> {
            let model = #rt::decl::downcast_model::<#ident>(model)?;
            #rt::decl::to_field_value(#property, &model.#name)
        }

        fn #setter(
            model: &mut dyn #rt::DataModel,
            value: #rt::serde_json::Value
        ) -> ::core::result::Result<(), #rt::ModelError> {
            let model = #rt::decl::downcast_model_mut::<#ident>(model)?;
            model.#name = #rt::decl::from_field_value(#property, value)?;
            ::core::result::Result::Ok(())
        }
    }
}

fn accessor(field: &FieldDef) -> TokenStream {
    let rt = runtime();
    let getter = getter_ident(field);
    let setter = setter_ident(field);
    quote!(#rt::FieldAccessor::new(#getter, #setter))
}

fn opt_str(value: Option<&String>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None)
    }
}

fn opt_target(target: Option<&syn::Path>) -> TokenStream {
    let rt = runtime();
    match target {
        Some(path) => quote!(::core::option::Option::Some(#rt::ModelType::of::<#path>())),
        None => quote!(::core::option::Option::None)
    }
}

fn rest_target(rest: &RestTarget) -> TokenStream {
    let rt = runtime();
    let uri = &rest.uri;
    let target = opt_target(rest.target.as_ref());
    let entity_type = opt_str(rest.entity_type.as_ref());
    let get = opt_str(rest.get.as_ref());
    let linq_get = opt_str(rest.linq_get.as_ref());
    let update = opt_str(rest.update.as_ref());
    let delete = opt_str(rest.delete.as_ref());
    let overflow_property = opt_str(rest.overflow_property.as_ref());

    quote! {
        #rt::RestTypeDecl {
            target: #target,
            entity_type: #entity_type,
            uri: #uri,
            get: #get,
            linq_get: #linq_get,
            update: #update,
            delete: #delete,
            overflow_property: #overflow_property
        }
    }
}

fn graph_target(graph: &GraphTarget) -> TokenStream {
    let rt = runtime();
    let uri = &graph.uri;
    let target = opt_target(graph.target.as_ref());
    let id = opt_str(graph.id.as_ref());
    let get = opt_str(graph.get.as_ref());
    let linq_get = opt_str(graph.linq_get.as_ref());
    let update = opt_str(graph.update.as_ref());
    let delete = opt_str(graph.delete.as_ref());
    let overflow_property = opt_str(graph.overflow_property.as_ref());
    let beta = graph.beta;

    quote! {
        #rt::GraphTypeDecl {
            target: #target,
            id: #id,
            uri: #uri,
            get: #get,
            linq_get: #linq_get,
            update: #update,
            delete: #delete,
            overflow_property: #overflow_property,
            beta: #beta
        }
    }
}

fn mapping(mapping: &FieldMapping) -> TokenStream {
    let rt = runtime();
    match mapping {
        FieldMapping::Rest(rest) => {
            let name = opt_str(rest.name.as_ref());
            let json_path = opt_str(rest.json_path.as_ref());
            let expandable = rest.expandable;
            let expand_by_default = rest.expand_by_default;
            let custom_mapping = rest.custom_mapping;
            quote! {
                #rt::PropertyAttr::Rest(#rt::RestFieldDecl {
                    name: #name,
                    expandable: #expandable,
                    expand_by_default: #expand_by_default,
                    custom_mapping: #custom_mapping,
                    json_path: #json_path
                })
            }
        }
        FieldMapping::Graph(graph) => {
            let name = opt_str(graph.name.as_ref());
            let json_path = opt_str(graph.json_path.as_ref());
            let get = opt_str(graph.get.as_ref());
            let expandable = graph.expandable;
            let expand_by_default = graph.expand_by_default;
            let custom_mapping = graph.custom_mapping;
            let beta = graph.beta;
            quote! {
                #rt::PropertyAttr::Graph(#rt::GraphFieldDecl {
                    name: #name,
                    expandable: #expandable,
                    expand_by_default: #expand_by_default,
                    custom_mapping: #custom_mapping,
                    json_path: #json_path,
                    get: #get,
                    beta: #beta
                })
            }
        }
    }
}

fn property(field: &FieldDef) -> TokenStream {
    let rt = runtime();
    let name = field.property_name();
    let declared_type = field.type_name();
    let accessor = accessor(field);
    let mappings = field.mappings.iter().map(mapping);

    quote! {
        #rt::PropertyDecl::new(#name, #declared_type, #accessor)
            #(.with(#mappings))*
    }
}

/// Synthetic `Key` property redirecting to the `#[key]` field.
fn key_property(field: &FieldDef) -> TokenStream {
    let rt = runtime();
    let key_property = field.property_name();
    let declared_type = field.type_name();
    let accessor = accessor(field);

    quote! {
        #rt::PropertyDecl::new("Key", #declared_type, #accessor)
            .with(#rt::PropertyAttr::Key { key_property: #key_property })
    }
}
