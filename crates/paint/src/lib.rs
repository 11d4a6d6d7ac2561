//! Paint: a small RGB value object built on `valueobject-core`.
//!
//! Demonstrates construction validation, value equality and derivation by
//! creating new instances.

pub mod paint;

pub use paint::Paint;
