// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for metadata resolution and model construction.
//!
//! Every failure in this crate is a defect in the model declarations or a
//! misuse of the API; nothing here is transient, so nothing is retried.
//!
//! | Variant | Category | Raised by |
//! |---------|----------|-----------|
//! | [`ModelError::Configuration`] | configuration | scanner, cache |
//! | [`ModelError::MissingKey`] | configuration | key resolver |
//! | [`ModelError::UnknownField`] | configuration | field selector |
//! | [`ModelError::UnknownType`] | configuration | instance factory |
//! | [`ModelError::Argument`] | argument | instance factory |
//! | [`ModelError::TypeMismatch`] | argument | field accessors |
//! | [`ModelError::Value`] | value | field accessors |

use std::fmt;

/// Errors produced while resolving entity metadata or building models.
#[derive(Debug)]
pub enum ModelError {
    /// The model declarations of a type are invalid.
    ///
    /// Carries every issue found while scanning, not only the first one.
    Configuration {
        /// Name of the offending model type.
        model:  String,
        /// Human readable description of each problem.
        issues: Vec<String>
    },

    /// A key accessor was requested for a model without a key field.
    MissingKey {
        /// Name of the model type.
        model: String
    },

    /// A field selector names a field the model does not have.
    UnknownField {
        /// Name of the model type.
        model: String,
        /// Selector name as supplied by the caller.
        field: String
    },

    /// No factory is registered for the requested type.
    UnknownType {
        /// Requested type name.
        name: String
    },

    /// An argument was empty or otherwise unusable.
    Argument {
        /// What was wrong with the argument.
        message: String
    },

    /// An accessor was applied to an instance of another model type.
    TypeMismatch {
        /// Type the accessor was generated for.
        expected: &'static str,
        /// Type of the instance it received.
        found:    &'static str
    },

    /// A field value could not be converted to or from the generic value slot.
    Value {
        /// Property name of the field.
        field:  String,
        /// Underlying conversion error.
        source: serde_json::Error
    }
}

impl ModelError {
    /// Build a configuration error with a single issue.
    pub fn configuration(model: impl Into<String>, issue: impl Into<String>) -> Self {
        Self::Configuration {
            model:  model.into(),
            issues: vec![issue.into()]
        }
    }

    /// Build an argument error.
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into()
        }
    }

    /// Build a value conversion error for `field`.
    pub fn value(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Value {
            field: field.into(),
            source
        }
    }

    /// Check if this error points at invalid model declarations.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::MissingKey { .. }
                | Self::UnknownField { .. }
                | Self::UnknownType { .. }
        )
    }

    /// Check if this error was caused by an invalid argument.
    pub const fn is_argument(&self) -> bool {
        matches!(self, Self::Argument { .. } | Self::TypeMismatch { .. })
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                model,
                issues
            } => {
                write!(f, "invalid model configuration for {}: {}", model, issues.join("; "))
            }
            Self::MissingKey {
                model
            } => write!(f, "invalid model configuration for {}: no key field", model),
            Self::UnknownField {
                model,
                field
            } => write!(f, "model {} has no field named {}", model, field),
            Self::UnknownType {
                name
            } => write!(f, "no model registered as {}", name),
            Self::Argument {
                message
            } => write!(f, "invalid argument: {}", message),
            Self::TypeMismatch {
                expected,
                found
            } => write!(f, "expected model {}, found {}", expected, found),
            Self::Value {
                field,
                source
            } => write!(f, "value of field {} could not be converted: {}", field, source)
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Value {
                source, ..
            } => Some(source),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn configuration_lists_all_issues() {
        let err = ModelError::Configuration {
            model:  "List".to_string(),
            issues: vec!["first".to_string(), "second".to_string()]
        };
        assert_eq!(
            err.to_string(),
            "invalid model configuration for List: first; second"
        );
        assert!(err.is_configuration());
        assert!(!err.is_argument());
    }

    #[test]
    fn missing_key_is_configuration() {
        let err = ModelError::MissingKey {
            model: "Web".to_string()
        };
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "invalid model configuration for Web: no key field");
    }

    #[test]
    fn argument_display() {
        let err = ModelError::argument("type name is empty");
        assert!(err.is_argument());
        assert_eq!(err.to_string(), "invalid argument: type name is empty");
    }

    #[test]
    fn value_error_has_source() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ModelError::value("Title", source);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("value of field Title"));
    }

    #[test]
    fn unknown_field_has_no_source() {
        let err = ModelError::UnknownField {
            model: "List".to_string(),
            field: "Nope".to_string()
        };
        assert!(err.source().is_none());
        assert!(err.is_configuration());
    }
}
