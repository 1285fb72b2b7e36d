//! Per-class property registries and the reflection capability.
//!
//! This crate holds the name-resolution half of the reflection layer:
//!
//! - [`PropertyRegistry`] - the per-class table of metadata entries plus
//!   its ordered chain of non-owning base registry references
//! - [`Reflect`] - the per-instance contract (`get_property` /
//!   `set_property` / `registry`) a class implements by delegating to its
//!   registry
//!
//! The type-erasure and conversion machinery lives in `metaprop-core`.

pub mod reflect;
pub mod registry;

pub use reflect::Reflect;
pub use registry::PropertyRegistry;
