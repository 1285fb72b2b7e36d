//! Error types for property conversion and access.
//!
//! Two layers, the lower one chained into the upper via `#[from]`:
//!
//! - [`ConversionError`] - text could not be parsed into a typed value
//! - [`AccessError`] - string-keyed property access failed
//!
//! Programmer-error preconditions (a descriptor invoked on an object of a
//! foreign class, a base registry attached without a wired projection) are
//! not modeled here; they are contract violations answered by fail-fast
//! assertions at the call site.

use thiserror::Error;

/// Errors produced when parsing text into a typed property value.
///
/// Boolean and string conversions never produce one of these by
/// construction; see the [`FromText`](crate::FromText) impls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The text does not parse as the target value type.
    #[error("cannot parse '{text}' as {target}")]
    Unparsable {
        /// The rejected input text.
        text: String,
        /// Name of the target value type.
        target: &'static str,
    },
}

/// Errors produced by string-keyed property access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The name is absent from the full registry resolution chain.
    #[error("unknown property '{name}'")]
    UnknownProperty {
        /// The name that failed to resolve.
        name: String,
    },

    /// A write was attempted on a property with no bound setter.
    #[error("property is read-only")]
    ReadOnly,

    /// The supplied text could not be converted to the property's type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
