//! Text conversion for property values.
//!
//! This module provides the trait pair every property value type implements:
//!
//! - [`ToText`]: render a typed value as its canonical text form
//! - [`FromText`]: parse text back into a typed value
//!
//! ## Supported Leaf Types
//!
//! - Integers: `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`
//! - Floats: `f32`, `f64`
//! - Boolean: `bool`
//! - Text: `String`
//!
//! A new leaf type participates by implementing both traits; no other
//! component changes.
//!
//! ## Failure Contract
//!
//! `to_text` is total for every supported type. `from_text` for numeric
//! types rejects malformed input with [`ConversionError::Unparsable`].
//! The boolean conversion never fails: exactly `"true"` and `"1"` map to
//! `true`, every other input maps to `false`.

use crate::error::ConversionError;

/// Render a value as its canonical text form.
///
/// Total: rendering a supported value always succeeds.
pub trait ToText {
    /// Convert this value to text.
    fn to_text(&self) -> String;
}

/// Parse a value from text.
pub trait FromText: Sized {
    /// Parse `text` into a value.
    ///
    /// Returns a `ConversionError` if the text does not parse as this type.
    fn from_text(text: &str) -> Result<Self, ConversionError>;
}

// ============================================================================
// Numeric implementations
// ============================================================================

macro_rules! impl_text_numeric {
    ($($ty:ty),*) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }

            impl FromText for $ty {
                fn from_text(text: &str) -> Result<Self, ConversionError> {
                    text.trim()
                        .parse()
                        .map_err(|_| ConversionError::Unparsable {
                            text: text.to_string(),
                            target: stringify!($ty),
                        })
                }
            }
        )*
    };
}

impl_text_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// ============================================================================
// Bool implementation
// ============================================================================

impl ToText for bool {
    /// Renders the literal `"true"` or `"false"`.
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl FromText for bool {
    /// Exactly `"true"` and `"1"` map to `true`; every other input,
    /// malformed included, maps to `false`. Never fails.
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        Ok(text == "true" || text == "1")
    }
}

// ============================================================================
// String implementation
// ============================================================================

impl ToText for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl FromText for String {
    fn from_text(text: &str) -> Result<Self, ConversionError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // ToText tests
    // ========================================================================

    #[test]
    fn to_text_integers() {
        assert_eq!(42i32.to_text(), "42");
        assert_eq!((-7i8).to_text(), "-7");
        assert_eq!(u64::MAX.to_text(), "18446744073709551615");
        assert_eq!(0u16.to_text(), "0");
    }

    #[test]
    fn to_text_floats() {
        assert_eq!(1.5f64.to_text(), "1.5");
        assert_eq!((-0.25f32).to_text(), "-0.25");
    }

    #[test]
    fn to_text_bool() {
        assert_eq!(true.to_text(), "true");
        assert_eq!(false.to_text(), "false");
    }

    #[test]
    fn to_text_string() {
        assert_eq!("hello".to_string().to_text(), "hello");
        assert_eq!(String::new().to_text(), "");
    }

    // ========================================================================
    // FromText tests
    // ========================================================================

    #[test]
    fn from_text_integers() {
        assert_eq!(i32::from_text("42").unwrap(), 42);
        assert_eq!(i64::from_text("-100").unwrap(), -100);
        assert_eq!(u8::from_text("255").unwrap(), 255);
        // Surrounding whitespace is tolerated
        assert_eq!(i32::from_text(" 7 ").unwrap(), 7);
    }

    #[test]
    fn from_text_integer_failures() {
        assert!(i32::from_text("banana").is_err());
        assert!(i32::from_text("").is_err());
        assert!(i32::from_text("42abc").is_err());
        assert!(u8::from_text("-1").is_err());
        assert!(u8::from_text("256").is_err());
    }

    #[test]
    fn from_text_floats() {
        assert_eq!(f64::from_text("1.5").unwrap(), 1.5);
        assert_eq!(f32::from_text("-0.25").unwrap(), -0.25);
        assert_eq!(f64::from_text("3").unwrap(), 3.0);
    }

    #[test]
    fn from_text_float_failures() {
        assert!(f64::from_text("not a number").is_err());
        assert!(f64::from_text("").is_err());
    }

    #[test]
    fn from_text_bool_literals() {
        assert_eq!(bool::from_text("true").unwrap(), true);
        assert_eq!(bool::from_text("1").unwrap(), true);
        assert_eq!(bool::from_text("false").unwrap(), false);
    }

    #[test]
    fn from_text_bool_never_fails() {
        // Any non-matching input maps to false instead of an error
        assert_eq!(bool::from_text("").unwrap(), false);
        assert_eq!(bool::from_text("garbage").unwrap(), false);
        assert_eq!(bool::from_text("TRUE").unwrap(), false);
        assert_eq!(bool::from_text("0").unwrap(), false);
    }

    #[test]
    fn from_text_string() {
        assert_eq!(String::from_text("hello").unwrap(), "hello");
        assert_eq!(String::from_text("").unwrap(), "");
    }

    #[test]
    fn unparsable_error_reports_input_and_target() {
        let err = i32::from_text("banana").unwrap_err();
        assert_eq!(
            err,
            ConversionError::Unparsable {
                text: "banana".to_string(),
                target: "i32",
            }
        );
    }

    // ========================================================================
    // Round-trip tests
    // ========================================================================

    #[test]
    fn roundtrip_canonical_forms() {
        assert_eq!(i32::from_text(&42i32.to_text()).unwrap(), 42);
        assert_eq!(bool::from_text(&true.to_text()).unwrap(), true);
        assert_eq!(f64::from_text(&1.5f64.to_text()).unwrap(), 1.5);
        assert_eq!(
            String::from_text(&"obj1".to_string().to_text()).unwrap(),
            "obj1"
        );
    }
}
