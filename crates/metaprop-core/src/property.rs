//! Type-erased property descriptors.
//!
//! This module is the invocation engine of the reflection layer:
//!
//! - [`PropertyAccess`] is the uniform erased surface a registry stores.
//!   Any two descriptors of different (class, value type) pairs present the
//!   same surface, so heterogeneous descriptors live in one collection.
//! - [`Property`] is the generic descriptor parameterized on the owner
//!   class `C` and value type `T`. It closes over the typed getter/setter
//!   bindings, and its `PropertyAccess` impl is the trampoline that
//!   recovers the concrete types, performs the real call, and routes the
//!   value through the text converter.
//!
//! Erasure is closure-based: the bindings are boxed `Send + Sync`
//! callables, never reinterpreted function pointers.

use std::any::Any;
use std::fmt;

use crate::class_key::ClassKey;
use crate::convert::{FromText, ToText};
use crate::error::AccessError;

/// Type-erased access surface for one property.
pub trait PropertyAccess: Send + Sync {
    /// Key of the class this descriptor's bindings are typed on.
    fn owner(&self) -> ClassKey;

    /// Invoke the bound getter on `obj` and render the result as text.
    ///
    /// `obj` must be an instance of the owner class. The registry layer
    /// that resolved this descriptor guarantees it; a foreign object is a
    /// contract violation, not a runtime case.
    fn get(&self, obj: &dyn Any) -> String;

    /// Parse `text` and apply it through the bound setter.
    ///
    /// Returns [`AccessError::ReadOnly`] when no setter is bound and
    /// [`AccessError::Conversion`] when the text does not parse. `obj` is
    /// untouched on every failure path.
    fn set(&self, obj: &mut dyn Any, text: &str) -> Result<(), AccessError>;

    /// Whether no setter is bound.
    fn is_read_only(&self) -> bool;
}

/// Boxed getter binding for a `(C, T)` pair.
type Getter<C, T> = Box<dyn Fn(&C) -> T + Send + Sync>;

/// Boxed setter binding for a `(C, T)` pair.
type Setter<C, T> = Box<dyn Fn(&mut C, T) + Send + Sync>;

/// Descriptor binding one getter and at most one setter for a specific
/// (class, value type) pair.
///
/// A descriptor with no getter is unconstructible: both constructors
/// require one. An absent setter makes the property read-only.
pub struct Property<C, T> {
    owner: ClassKey,
    getter: Getter<C, T>,
    setter: Option<Setter<C, T>>,
}

impl<C: 'static, T> Property<C, T> {
    /// Create a getter-only descriptor.
    pub fn read_only<G>(getter: G) -> Self
    where
        G: Fn(&C) -> T + Send + Sync + 'static,
    {
        Self {
            owner: ClassKey::of::<C>(),
            getter: Box::new(getter),
            setter: None,
        }
    }

    /// Create a descriptor with both bindings.
    pub fn read_write<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn(&C) -> T + Send + Sync + 'static,
        S: Fn(&mut C, T) + Send + Sync + 'static,
    {
        Self {
            owner: ClassKey::of::<C>(),
            getter: Box::new(getter),
            setter: Some(Box::new(setter)),
        }
    }
}

impl<C, T> PropertyAccess for Property<C, T>
where
    C: 'static,
    T: ToText + FromText + 'static,
{
    fn owner(&self) -> ClassKey {
        self.owner
    }

    fn get(&self, obj: &dyn Any) -> String {
        let obj = obj
            .downcast_ref::<C>()
            .expect("property getter invoked on an object of a foreign class");
        (self.getter)(obj).to_text()
    }

    fn set(&self, obj: &mut dyn Any, text: &str) -> Result<(), AccessError> {
        let setter = self.setter.as_ref().ok_or(AccessError::ReadOnly)?;
        let value = T::from_text(text)?;
        let obj = obj
            .downcast_mut::<C>()
            .expect("property setter invoked on an object of a foreign class");
        setter(obj, value);
        Ok(())
    }

    fn is_read_only(&self) -> bool {
        self.setter.is_none()
    }
}

impl<C, T> fmt::Debug for Property<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("owner", &self.owner)
            .field("read_only", &self.setter.is_none())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;

    struct Counter {
        value: i32,
        label: String,
    }

    fn value_property() -> Property<Counter, i32> {
        Property::read_write(|c: &Counter| c.value, |c: &mut Counter, v| c.value = v)
    }

    fn label_property() -> Property<Counter, String> {
        Property::read_only(|c: &Counter| c.label.clone())
    }

    #[test]
    fn get_renders_through_converter() {
        let mut counter = Counter {
            value: 7,
            label: "seven".to_string(),
        };
        assert_eq!(value_property().get(&counter), "7");
        assert_eq!(label_property().get(&counter), "seven");

        counter.value = -3;
        assert_eq!(value_property().get(&counter), "-3");
    }

    #[test]
    fn set_parses_and_applies() {
        let mut counter = Counter {
            value: 0,
            label: String::new(),
        };
        value_property().set(&mut counter, "50").unwrap();
        assert_eq!(counter.value, 50);
    }

    #[test]
    fn set_on_read_only_fails_without_touching_object() {
        let mut counter = Counter {
            value: 1,
            label: "one".to_string(),
        };
        let result = label_property().set(&mut counter, "two");
        assert_eq!(result, Err(AccessError::ReadOnly));
        assert_eq!(counter.label, "one");
    }

    #[test]
    fn set_surfaces_conversion_failure_without_touching_object() {
        let mut counter = Counter {
            value: 9,
            label: String::new(),
        };
        let result = value_property().set(&mut counter, "banana");
        assert_eq!(
            result,
            Err(AccessError::Conversion(ConversionError::Unparsable {
                text: "banana".to_string(),
                target: "i32",
            }))
        );
        assert_eq!(counter.value, 9);
    }

    #[test]
    fn read_only_flag_tracks_setter_presence() {
        assert!(label_property().is_read_only());
        assert!(!value_property().is_read_only());
    }

    #[test]
    fn owner_is_the_bound_class() {
        assert_eq!(value_property().owner(), ClassKey::of::<Counter>());
        assert_eq!(label_property().owner(), ClassKey::of::<Counter>());
    }

    #[test]
    fn heterogeneous_descriptors_share_one_collection() {
        // The type-erasure guarantee: different (class, type) pairs behind
        // one uniform surface.
        let descriptors: Vec<Box<dyn PropertyAccess>> = vec![
            Box::new(value_property()),
            Box::new(label_property()),
            Box::new(Property::<Counter, bool>::read_only(|c| c.value != 0)),
        ];

        let counter = Counter {
            value: 5,
            label: "five".to_string(),
        };
        let rendered: Vec<String> = descriptors.iter().map(|d| d.get(&counter)).collect();
        assert_eq!(rendered, vec!["5", "five", "true"]);
    }

    #[test]
    fn debug_output() {
        let debug = format!("{:?}", label_property());
        assert!(debug.contains("Property"));
        assert!(debug.contains("read_only: true"));
    }
}
