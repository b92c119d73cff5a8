// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written models shared by the unit tests.

use serde_json::Value;

use crate::{DataModel, FieldAccessor, ModelError, PropertyDecl};

/// Implement [`DataModel`] for a plain struct.
macro_rules! data_model {
    ($ty:ty) => {
        impl $crate::DataModel for $ty {
            fn model_type(&self) -> $crate::ModelType {
                $crate::ModelType::of::<Self>()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any + Send + Sync> {
                self
            }
        }
    };
}

pub(crate) use data_model;

fn get_null(_: &dyn DataModel) -> Result<Value, ModelError> {
    Ok(Value::Null)
}

fn set_ignore(_: &mut dyn DataModel, _: Value) -> Result<(), ModelError> {
    Ok(())
}

/// Property whose accessor ignores the model.
pub fn property(name: &'static str) -> PropertyDecl {
    PropertyDecl::new(name, "String", FieldAccessor::new(get_null, set_ignore))
}
