// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/          → Attribute parsing (ModelDef, FieldDef, targets)
//! │
//! ├── data_model.rs   → impl DataModel (type token, Any casts, parent slot)
//! ├── declaration.rs  → impl Model (declaration table, accessors, factory)
//! ├── interfaces.rs   → Model::register_interfaces
//! └── selectors.rs    → FieldSelector constants
//! ```
//!
//! # Generated Code
//!
//! For a model like:
//!
//! ```rust,ignore
//! #[derive(Model, Default, Serialize, Deserialize)]
//! #[rest(uri = "_api/web")]
//! pub struct Web {
//!     #[key]
//!     pub id: String,
//!     pub title: String,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl DataModel for Web` | Untyped access, downcasting |
//! | `impl Model for Web` | Declaration table and factory |
//! | `Web::ID`, `Web::TITLE` | Typed field selectors |

mod data_model;
mod declaration;
mod interfaces;
pub mod parse;
mod selectors;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Path of the runtime crate in generated code.
fn runtime() -> TokenStream2 {
    quote!(::entity_meta)
}

/// Main entry point for the Model derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => generate(&model).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(model: &ModelDef) -> TokenStream2 {
    let data_model = data_model::generate(model);
    let declaration = declaration::generate(model);
    let selectors = selectors::generate(model);

    quote! {
        #data_model
        #declaration
        #selectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_code_is_valid_rust() {
        let input: DeriveInput = syn::parse_quote! {
            #[model(expando, implements(IList))]
            #[rest(uri = "_api/web/lists/getbyid(guid'{Id}')", target = "Web")]
            #[graph(uri = "sites/{Parent.GraphId}/lists/{GraphId}")]
            pub struct List {
                #[key]
                #[graph(name = "id")]
                pub id: String,
                pub title: String,
                #[parent]
                pub parent: Option<ParentRef>,
                #[overflow]
                pub values: Map,
            }
        };
        let model = ModelDef::from_derive_input(&input).unwrap();
        let file: syn::File = syn::parse2(generate(&model)).unwrap();

        // DataModel, Model, selector constants
        assert_eq!(file.items.len(), 3);
    }
}
