//! Core building blocks for string-keyed runtime property reflection.
//!
//! This crate provides the type-erasure and conversion machinery the
//! registry layer is built on:
//!
//! - [`ToText`] / [`FromText`] - text conversion for property value types
//! - [`ClassKey`] - deterministic hash-based class identity
//! - [`PropertyAccess`] / [`Property`] - the erased descriptor surface and
//!   the generic descriptor that recovers concrete types at call time
//! - [`PropertyEntry`] / [`EditorHint`] - named metadata records
//! - [`AccessError`] / [`ConversionError`] - the failure taxonomy
//!
//! Per-class registries and the reflection capability trait live in
//! `metaprop-registry`; this crate knows nothing about name resolution or
//! base chaining.

pub mod class_key;
pub mod convert;
pub mod entry;
pub mod error;
pub mod property;

pub use class_key::ClassKey;
pub use convert::{FromText, ToText};
pub use entry::{EditorHint, PropertyEntry};
pub use error::{AccessError, ConversionError};
pub use property::{Property, PropertyAccess};
