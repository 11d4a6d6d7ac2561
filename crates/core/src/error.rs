//! Error model for value objects.

use thiserror::Error;

/// Result type used by callers that want a single error type.
pub type Result<T> = core::result::Result<T, Error>;

/// A write (or removal) was attempted on an instance that does not permit it.
///
/// The target instance is left untouched, so the caller may keep using it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImmutableError {
    /// A declared field of a sealed instance was targeted.
    #[error("cannot modify field `{field}`: `{type_name}` is immutable")]
    SealedField {
        type_name: &'static str,
        field: String,
    },

    /// A field that is not part of the declared field set was targeted.
    #[error("cannot add or remove field `{field}`: `{type_name}` is immutable")]
    UndeclaredField {
        type_name: &'static str,
        field: String,
    },
}

impl ImmutableError {
    pub fn sealed_field(type_name: &'static str, field: impl Into<String>) -> Self {
        Self::SealedField {
            type_name,
            field: field.into(),
        }
    }

    pub fn undeclared_field(type_name: &'static str, field: impl Into<String>) -> Self {
        Self::UndeclaredField {
            type_name,
            field: field.into(),
        }
    }

    /// Name of the field the rejected operation targeted.
    pub fn field(&self) -> &str {
        match self {
            Self::SealedField { field, .. } | Self::UndeclaredField { field, .. } => field,
        }
    }
}

/// A supplied field value was rejected before an instance could be sealed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The value lies outside the field's declared domain.
    #[error("invalid value for `{field}`: {value} is not an integer between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A draft was sealed without a value for a declared field.
    #[error("missing value for field `{field}` of `{type_name}`")]
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },

    /// A draft slot holds a value of a different type than the field expects.
    #[error("field `{field}` of `{type_name}` expects a value of type `{expected}`")]
    WrongType {
        type_name: &'static str,
        field: &'static str,
        expected: &'static str,
    },
}

impl InvalidArgumentError {
    pub fn out_of_range(field: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

/// Either failure a value object can signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Immutable(#[from] ImmutableError),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}
