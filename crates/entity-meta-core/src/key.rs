// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Untyped access to the key of a model.

use serde_json::Value;

use crate::{DataModel, EntityFieldInfo, FieldAccessor, ModelError};

/// Reads the key field of any instance of one model type.
///
/// Obtained from
/// [`EntityManager::entity_key_accessors`](crate::EntityManager::entity_key_accessors);
/// lets callers compare or serialize keys without knowing the concrete type.
#[derive(Debug, Clone)]
pub struct KeyAccessor {
    field_name: String,
    accessor:   FieldAccessor
}

impl KeyAccessor {
    /// Accessor for the key field `field`.
    pub fn new(field: &EntityFieldInfo) -> Self {
        Self {
            field_name: field.name.clone(),
            accessor:   field.accessor
        }
    }

    /// Property name of the key field.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Key value of `model`.
    ///
    /// # Errors
    ///
    /// [`ModelError::TypeMismatch`] when `model` is of another type.
    pub fn value(&self, model: &dyn DataModel) -> Result<Value, ModelError> {
        self.accessor.get(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ModelType,
        decl::{downcast_model, downcast_model_mut, from_field_value, to_field_value},
        testing::data_model
    };

    struct Web {
        id: String
    }

    struct Site;

    data_model!(Web);
    data_model!(Site);

    fn get_id(model: &dyn DataModel) -> Result<Value, ModelError> {
        to_field_value("Id", &downcast_model::<Web>(model)?.id)
    }

    fn set_id(model: &mut dyn DataModel, value: Value) -> Result<(), ModelError> {
        downcast_model_mut::<Web>(model)?.id = from_field_value("Id", value)?;
        Ok(())
    }

    fn accessor() -> KeyAccessor {
        let field = EntityFieldInfo::new("Id", "String", FieldAccessor::new(get_id, set_id));
        KeyAccessor::new(&field)
    }

    #[test]
    fn reads_key_value() {
        let web = Web {
            id: "b1c2".to_string()
        };
        let key = accessor();
        assert_eq!(key.field_name(), "Id");
        assert_eq!(key.value(&web).unwrap(), Value::String("b1c2".to_string()));
    }

    #[test]
    fn rejects_other_model_type() {
        let err = accessor().value(&Site).unwrap_err();
        match err {
            ModelError::TypeMismatch {
                expected,
                found
            } => {
                assert!(expected.ends_with("Web"));
                assert_eq!(found, ModelType::of::<Site>().name());
            }
            other => panic!("unexpected error: {other:?}")
        }
    }
}
