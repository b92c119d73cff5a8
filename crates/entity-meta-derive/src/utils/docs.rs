// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment extraction.
//!
//! Field documentation is carried over to the generated selector constants.

use syn::Attribute;

/// First non-empty line of the `///` comments in `attrs`.
pub fn extract_doc_summary(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .map(|line| line.trim().to_string())
        .find(|line| !line.is_empty())
}
