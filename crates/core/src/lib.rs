//! `valueobject-core` — immutability and value equality as composable capabilities.
//!
//! This crate contains **pure** building blocks (no IO, no logging).

pub mod equality;
pub mod error;
pub mod fields;
pub mod immutable;
pub mod value_object;

#[cfg(test)]
mod testing;

pub use equality::ValueEquality;
pub use error::{Error, ImmutableError, InvalidArgumentError, Result};
pub use fields::{Field, FieldValue, Fields};
pub use immutable::{Construct, Draft, Immutable, Lifecycle};
pub use value_object::ValueObject;
