// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata scanner.
//!
//! Turns a [`ModelDecl`] into [`EntityStaticInfo`]. Runs only on a cache
//! miss and is a pure function of the declaration, so running it twice for
//! the same type yields equivalent results.
//!
//! # Algorithm
//!
//! 1. Reject declarations without any `rest` or `graph` mapping.
//! 2. Resolve type-level mappings, defaulting the target to the declaring
//!    type and every operation template to the URI template.
//! 3. Walk properties in order, applying their annotations:
//!    - `Rest` / `Graph` create or reuse the field row (case-insensitive)
//!    - `Key` records the key property and skips the decorated property
//!    - `System` skips the property
//! 4. Unannotated properties become graph fields on graph-only types and
//!    rest fields otherwise.
//! 5. Mark the key field and make sure it has a graph name.
//! 6. Fill the overflow field names from the first mapping of each backend,
//!    leaving a name unset when that mapping declares no overflow property.
//!
//! Problems found in steps 3–6 are collected and reported together as one
//! [`ModelError::Configuration`].

use tracing::{debug, warn};

use crate::{
    EntityFieldInfo, EntityStaticInfo, GraphTypeInfo, ModelError, ModelType, RestTypeInfo,
    decl::{GraphTypeDecl, ModelDecl, OVERFLOW_FIELD_NAME, PropertyAttr, PropertyDecl, RestTypeDecl}
};

/// Build static metadata from a declaration table.
///
/// # Errors
///
/// [`ModelError::Configuration`] when the type declares no backend mapping,
/// or with the full list of declaration problems otherwise.
pub fn scan(decl: &ModelDecl) -> Result<EntityStaticInfo, ModelError> {
    let model = decl.model_type;

    if !decl.has_mapping() {
        return Err(ModelError::configuration(
            model.name(),
            "each model must declare at least one rest or graph mapping"
        ));
    }

    let mut info = EntityStaticInfo::new(model);
    info.uses_overflow_field = decl.expando;
    info.rest_targets = decl.rest.iter().map(|rest| rest_target(model, rest)).collect();
    info.graph_targets = decl
        .graph
        .iter()
        .map(|graph| graph_target(model, graph))
        .collect();

    let has_rest = info.can_use_rest();
    let mut issues = Vec::new();
    let mut key_property: Option<&'static str> = None;

    for property in &decl.properties {
        let mut mapped = false;
        let mut skip = false;

        for attr in &property.attrs {
            match attr {
                PropertyAttr::Rest(rest) => {
                    let field = ensure_field(&mut info.fields, property, has_rest);
                    field.rest_name = Some(rest.name.unwrap_or(property.name).to_string());
                    field.rest_expandable = rest.expandable;
                    field.expand_by_default = rest.expand_by_default;
                    field.rest_use_custom_mapping = rest.custom_mapping;
                    field.rest_json_path = rest.json_path.map(str::to_string);
                    mapped = true;
                }
                PropertyAttr::Graph(graph) => {
                    let field = ensure_field(&mut info.fields, property, has_rest);
                    field.graph_name = Some(
                        graph
                            .name
                            .map_or_else(|| to_camel_case(property.name), str::to_string)
                    );
                    field.graph_expandable = graph.expandable;
                    field.expand_by_default = graph.expand_by_default;
                    field.graph_use_custom_mapping = graph.custom_mapping;
                    field.graph_json_path = graph.json_path.map(str::to_string);
                    field.graph_get = graph.get.map(str::to_string);
                    field.graph_beta = graph.beta;
                    mapped = true;
                }
                PropertyAttr::Key {
                    key_property: name
                } => {
                    if let Some(previous) = key_property.replace(*name)
                        && previous != *name
                    {
                        issues.push(format!(
                            "key designated twice: {} and {}",
                            previous, name
                        ));
                    }
                    skip = true;
                }
                PropertyAttr::System => skip = true
            }
        }

        if !mapped && !skip {
            let field = ensure_field(&mut info.fields, property, has_rest);
            if has_rest {
                // Mixed types must opt fields into the graph explicitly.
                field.rest_name = Some(property.name.to_string());
            } else {
                field.graph_name = Some(to_camel_case(property.name));
            }
        }
    }

    if let Some(key) = key_property {
        info.actual_key_field_name = Some(key.to_string());
        match info.fields.iter_mut().find(|field| field.name == key) {
            Some(field) => {
                field.is_rest_key = has_rest;
                field.is_graph_key = true;
                if field.graph_name.is_none() {
                    field.graph_name = Some(to_camel_case(&field.name));
                }
            }
            None => warn!(model = %model, key, "key property is not a mapped field")
        }
    }

    if info.uses_overflow_field {
        apply_overflow(&mut info, &mut issues);
    }

    if !issues.is_empty() {
        warn!(model = %model, issues = issues.len(), "model declaration is invalid");
        return Err(ModelError::Configuration {
            model: model.name().to_string(),
            issues
        });
    }

    debug!(
        model = %model,
        fields = info.fields.len(),
        rest_targets = info.rest_targets.len(),
        graph_targets = info.graph_targets.len(),
        "scanned model declaration"
    );

    Ok(info)
}

/// Lower the first character of `name`.
///
/// Strings of at most one character are returned unchanged.
///
/// ```rust
/// use entity_meta_core::scan::to_camel_case;
///
/// assert_eq!(to_camel_case("DisplayName"), "displayName");
/// assert_eq!(to_camel_case("X"), "X");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !chars.as_str().is_empty() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => name.to_string()
    }
}

fn rest_target(model: ModelType, decl: &RestTypeDecl) -> RestTypeInfo {
    let or_uri = |template: Option<&'static str>| template.unwrap_or(decl.uri).to_string();

    RestTypeInfo {
        target:            decl.target.unwrap_or(model),
        entity_type:       decl.entity_type.map(str::to_string),
        uri:               decl.uri.to_string(),
        get:               or_uri(decl.get),
        linq_get:          or_uri(decl.linq_get),
        update:            or_uri(decl.update),
        delete:            or_uri(decl.delete),
        overflow_property: decl.overflow_property.map(str::to_string)
    }
}

fn graph_target(model: ModelType, decl: &GraphTypeDecl) -> GraphTypeInfo {
    let or_uri = |template: Option<&'static str>| template.unwrap_or(decl.uri).to_string();

    GraphTypeInfo {
        target:            decl.target.unwrap_or(model),
        id:                decl.id.unwrap_or("id").to_string(),
        uri:               decl.uri.to_string(),
        get:               or_uri(decl.get),
        linq_get:          or_uri(decl.linq_get),
        update:            or_uri(decl.update),
        delete:            or_uri(decl.delete),
        overflow_property: decl.overflow_property.map(str::to_string),
        beta:              decl.beta
    }
}

/// Find the row for `property`, ignoring case, or append a new one.
///
/// New rows of types with a rest mapping start with the property name as
/// rest name.
fn ensure_field<'a>(
    fields: &'a mut Vec<EntityFieldInfo>,
    property: &PropertyDecl,
    has_rest: bool
) -> &'a mut EntityFieldInfo {
    let index = match fields
        .iter()
        .position(|field| field.name.eq_ignore_ascii_case(property.name))
    {
        Some(index) => index,
        None => {
            let mut field =
                EntityFieldInfo::new(property.name, property.declared_type, property.accessor);
            if has_rest {
                field.rest_name = Some(property.name.to_string());
            }
            fields.push(field);
            fields.len() - 1
        }
    };

    &mut fields[index]
}

fn apply_overflow(info: &mut EntityStaticInfo, issues: &mut Vec<String>) {
    let rest_property = info
        .rest_targets
        .first()
        .map(|target| target.overflow_property.clone());
    let graph_property = info
        .graph_targets
        .first()
        .map(|target| target.overflow_property.clone());

    let Some(field) = info
        .fields
        .iter_mut()
        .find(|field| field.name == OVERFLOW_FIELD_NAME)
    else {
        issues.push(format!(
            "expando model has no {} overflow field",
            OVERFLOW_FIELD_NAME
        ));
        return;
    };

    if let Some(name) = rest_property {
        if name.is_none() {
            warn!(model = %info.model_type, "first rest mapping declares no overflow property");
        }
        field.rest_name = name;
    }

    if let Some(name) = graph_property {
        if name.is_none() {
            warn!(model = %info.model_type, "first graph mapping declares no overflow property");
        }
        field.graph_name = name;
    }
}
