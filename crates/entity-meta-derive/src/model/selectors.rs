// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed field selector constants.
//!
//! ```rust,ignore
//! impl List {
//!     /// Selects `Title`.
//!     pub const TITLE: FieldSelector<List> = FieldSelector::new("Title");
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{parse::ModelDef, runtime};

/// Generate one associated constant per property.
pub fn generate(model: &ModelDef) -> TokenStream {
    let rt = runtime();
    let ident = &model.ident;
    let vis = &model.vis;

    let consts: Vec<TokenStream> = model
        .properties()
        .map(|field| {
            let name = field.selector_ident();
            let property = field.property_name();
            let doc = match &field.doc {
                Some(summary) => format!("Selects `{}`: {}", property, summary),
                None => format!("Selects `{}`.", property)
            };
            quote! {
                #[doc = #doc]
                #vis const #name: #rt::FieldSelector<#ident> = #rt::FieldSelector::new(#property);
            }
        })
        .collect();

    if consts.is_empty() {
        return TokenStream::new();
    }

    quote! {
        impl #ident {
            #(#consts)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(input: syn::DeriveInput) -> String {
        let model = ModelDef::from_derive_input(&input).unwrap();
        generate(&model).to_string()
    }

    #[test]
    fn one_constant_per_property() {
        let output = output(syn::parse_quote! {
            #[rest(uri = "_api/web")]
            pub struct Web {
                #[key]
                pub id: String,
                /// Site title.
                pub title: String,
                pub server_relative_url: String,
                #[system]
                pub requested: bool,
            }
        });

        assert!(output.contains("pub const ID"));
        assert!(output.contains("pub const TITLE"));
        assert!(output.contains("pub const SERVER_RELATIVE_URL"));
        assert!(output.contains("\"ServerRelativeUrl\""));
        assert!(output.contains("Selects `Title`: Site title."));
        assert!(!output.contains("REQUESTED"));
    }

    #[test]
    fn visibility_follows_struct() {
        let output = output(syn::parse_quote! {
            #[rest(uri = "_api/web")]
            pub(crate) struct Web {
                pub title: String,
            }
        });
        assert!(output.contains("pub (crate) const TITLE"));
    }

    #[test]
    fn no_properties_no_impl() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[rest(uri = "_api/web")]
            pub struct Web {
                #[system]
                pub requested: bool,
            }
        };
        let model = ModelDef::from_derive_input(&input).unwrap();
        assert!(generate(&model).is_empty());
    }
}
