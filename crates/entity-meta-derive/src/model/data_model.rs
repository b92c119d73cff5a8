// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `DataModel` implementation.

use proc_macro2::TokenStream;
use quote::quote;

use super::{parse::ModelDef, runtime};

/// Generate `impl DataModel`.
///
/// The parent slot methods are only overridden when a `#[parent]` field
/// exists; the field must be an `Option<ParentRef>`.
pub fn generate(model: &ModelDef) -> TokenStream {
    let rt = runtime();
    let ident = &model.ident;

    let collection = model.collection.then(|| {
        quote! {
            fn is_collection(&self) -> bool {
                true
            }
        }
    });

    let parent = model.parent_field().map(|field| {
        let name = &field.ident;
        quote! {
            fn parent(&self) -> ::core::option::Option<&#rt::ParentRef> {
                self.#name.as_ref()
            }

            fn set_parent(&mut self, parent: ::core::option::Option<#rt::ParentRef>) -> bool {
                self.#name = parent;
                true
            }
        }
    });

    quote! {
        impl #rt::DataModel for #ident {
            fn model_type(&self) -> #rt::ModelType {
                #rt::ModelType::of::<Self>()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn into_any(
                self: ::std::boxed::Box<Self>
            ) -> ::std::boxed::Box<dyn ::core::any::Any + ::core::marker::Send + ::core::marker::Sync> {
                self
            }

            #collection
            #parent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(input: syn::DeriveInput) -> ModelDef {
        ModelDef::from_derive_input(&input).unwrap()
    }

    #[test]
    fn plain_model_keeps_defaults() {
        let output = generate(&model(syn::parse_quote! {
            #[rest(uri = "_api/web")]
            pub struct Web {
                pub title: String,
            }
        }))
        .to_string();

        assert!(output.contains("DataModel for Web"));
        assert!(!output.contains("fn parent"));
        assert!(!output.contains("fn is_collection"));
    }

    #[test]
    fn parent_field_backs_parent_slot() {
        let output = generate(&model(syn::parse_quote! {
            #[rest(uri = "_api/web/lists")]
            pub struct List {
                #[parent]
                pub owner: Option<ParentRef>,
            }
        }))
        .to_string();

        assert!(output.contains("fn parent"));
        assert!(output.contains("fn set_parent"));
        assert!(output.contains("self . owner"));
    }

    #[test]
    fn collection_flag_overrides_is_collection() {
        let output = generate(&model(syn::parse_quote! {
            #[model(collection)]
            #[rest(uri = "_api/web/lists")]
            pub struct ListCollection {
                pub count: u32,
            }
        }))
        .to_string();

        assert!(output.contains("fn is_collection"));
    }
}
