// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Interface registration for `#[model(implements(...))]`.

use proc_macro2::TokenStream;
use quote::quote;

use super::{parse::ModelDef, runtime};

/// Generate `Model::register_interfaces`, or nothing without interfaces.
///
/// Each listed path is a trait the model implements; it is registered as
/// `dyn Trait` so `concrete_instance::<dyn Trait>()` resolves to this model.
pub fn generate(model: &ModelDef) -> TokenStream {
    if model.implements.is_empty() {
        return TokenStream::new();
    }

    let rt = runtime();
    let interfaces = &model.implements;

    quote! {
        fn register_interfaces(registry: &mut #rt::RegistryBuilder) {
            #(
                registry.interface::<dyn #interfaces, Self>(|model| model);
            )*
        }
    }
}
