use std::fmt;

use crate::schema::FieldType;

use super::date::DateError;

/// Errors that can occur during metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// One or more fields violate the schema
    #[error("Metadata validation failed:\n{0}")]
    Validation(ValidationErrors),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViolationReason {
    /// Value has the wrong scalar type
    #[error("must be of {expected} type, got {found}")]
    WrongType {
        /// Type declared by the schema
        expected: FieldType,
        /// Type of the supplied value
        found: &'static str,
    },

    /// Numeric value below the inclusive minimum
    #[error("min value is {min}, got {value}")]
    BelowMinimum {
        /// Declared minimum
        min: f64,
        /// Supplied value
        value: f64,
    },

    /// Numeric value above the inclusive maximum
    #[error("max value is {max}, got {value}")]
    AboveMaximum {
        /// Declared maximum
        max: f64,
        /// Supplied value
        value: f64,
    },

    /// NaN or infinite float
    #[error("value must be finite, got {0}")]
    NotFinite(f64),

    /// String value outside the allowed set
    #[error("unallowed value {value:?}, allowed: {allowed:?}")]
    NotAllowed {
        /// Supplied value
        value: String,
        /// Permitted values
        allowed: &'static [&'static str],
    },

    /// Value explicitly forbidden by the schema
    #[error("unallowed value {0}")]
    Forbidden(f64),

    /// Required field absent and without a default
    #[error("required field")]
    Required,

    /// Read-only field supplied with a value other than its fixed default
    #[error("field is read-only")]
    ReadOnly,

    /// Field present but the field it depends on is not
    #[error("field '{0}' is required")]
    MissingDependency(&'static str),

    /// Date coercion failed
    #[error(transparent)]
    Coercion(#[from] DateError),
}

/// A rejected field and the reason
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Canonical (or prefixed) field name
    pub field: String,
    /// Reason for rejection
    pub reason: ViolationReason,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// All violations found in one normalization pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, field: impl Into<String>, reason: ViolationReason) {
        self.violations.push(FieldViolation {
            field: field.into(),
            reason,
        });
    }

    /// Number of rejected fields
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True if no field was rejected
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterate over violations in the order they were found
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }

    /// Reason recorded for `field`, if it was rejected
    pub fn reason(&self, field: &str) -> Option<&ViolationReason> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| &v.reason)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}
