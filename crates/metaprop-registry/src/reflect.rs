//! The per-instance reflection capability.
//!
//! [`Reflect`] is the contract a class implements to expose its properties
//! through the string-based interface. The class provides three accessors
//! (its registry handle and the two erasure hooks); the property access
//! methods are provided and delegate to the registry chain.
//!
//! # Ancestor projection
//!
//! A descriptor resolved through a base registry is typed on the ancestor
//! class, and Rust has no subtype coercion to reach it. The capability
//! therefore carries [`Reflect::as_class`]: the default implementation
//! answers only for the object's own class, and a class that attaches base
//! registries overrides it to delegate into its embedded base value,
//! mirroring the registry chain. The provided access methods project the
//! object onto the resolved entry's owner class before invoking the
//! descriptor, which is what guarantees the descriptor's downcast
//! precondition.

use std::any::Any;

use metaprop_core::{AccessError, ClassKey};

use crate::registry::PropertyRegistry;

/// Per-instance contract for string-keyed property access.
///
/// Implementors supply [`registry`](Reflect::registry) and the two erasure
/// hooks; classes with attached base registries also override
/// [`as_class`](Reflect::as_class) / [`as_class_mut`](Reflect::as_class_mut)
/// to wire the projection into their embedded base value.
pub trait Reflect: Any {
    /// The registry describing this class's properties.
    ///
    /// Registries have process-wide lifetime: built once, never destroyed,
    /// shared by reference between every instance of the class.
    fn registry(&self) -> &'static PropertyRegistry;

    /// This object, erased.
    fn as_any(&self) -> &dyn Any;

    /// This object, erased and mutable.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Project this object as an instance of `class`.
    ///
    /// The default answers only for the object's own class. Override to
    /// delegate into the embedded base value when base registries are
    /// attached.
    fn as_class(&self, class: ClassKey) -> Option<&dyn Any> {
        if ClassKey::of_type_id(self.as_any().type_id()) == class {
            Some(self.as_any())
        } else {
            None
        }
    }

    /// Mutable variant of [`Reflect::as_class`].
    fn as_class_mut(&mut self, class: ClassKey) -> Option<&mut dyn Any> {
        if ClassKey::of_type_id(self.as_any().type_id()) == class {
            Some(self.as_any_mut())
        } else {
            None
        }
    }

    /// Read the property `name` as text.
    ///
    /// Resolves through the registry chain; a miss is
    /// [`AccessError::UnknownProperty`].
    fn get_property(&self, name: &str) -> Result<String, AccessError> {
        let entry = self
            .registry()
            .resolve(name)
            .ok_or_else(|| AccessError::UnknownProperty {
                name: name.to_string(),
            })?;
        let target = self
            .as_class(entry.owner())
            .expect("resolved property owner is not reachable from this object");
        Ok(entry.access.get(target))
    }

    /// Write the property `name` from text.
    ///
    /// Resolves through the registry chain; the descriptor enforces the
    /// read-only and conversion-failure policy. The object is untouched on
    /// every failure path.
    fn set_property(&mut self, name: &str, text: &str) -> Result<(), AccessError> {
        let entry = self
            .registry()
            .resolve(name)
            .ok_or_else(|| AccessError::UnknownProperty {
                name: name.to_string(),
            })?;
        let target = self
            .as_class_mut(entry.owner())
            .expect("resolved property owner is not reachable from this object");
        entry.access.set(target, text)
    }
}
