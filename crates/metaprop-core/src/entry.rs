//! Named metadata entries and presentation hints.
//!
//! A [`PropertyEntry`] pairs a type-erased descriptor with the
//! human-facing metadata a tooling layer wants: the property name, a
//! description, and an [`EditorHint`]. Entries are created once during
//! registration and immutable thereafter; each entry exclusively owns its
//! descriptor.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::class_key::ClassKey;
use crate::convert::{FromText, ToText};
use crate::property::{Property, PropertyAccess};

/// How an external editor might render a property.
///
/// Opaque to the core: nothing here interprets it. The numeric
/// representation exists so presentation layers can move hints across tool
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum EditorHint {
    /// Free-form text field.
    Text = 0,
    /// Integer spinner.
    Integer = 1,
    /// Checkbox.
    Boolean = 2,
}

/// A named property record: one descriptor plus its presentation metadata.
pub struct PropertyEntry {
    /// Property name, unique within one registry.
    pub name: String,
    /// Human-readable description for tooling.
    pub description: String,
    /// Rendering hint for external editors.
    pub hint: EditorHint,
    /// The exclusively-owned, type-erased descriptor.
    pub access: Box<dyn PropertyAccess>,
}

impl PropertyEntry {
    /// Create an entry wrapping an existing descriptor.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        hint: EditorHint,
        access: Box<dyn PropertyAccess>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hint,
            access,
        }
    }

    /// Create an entry with a getter-only descriptor for `(C, T)`.
    pub fn read_only<C, T, G>(
        name: impl Into<String>,
        description: impl Into<String>,
        hint: EditorHint,
        getter: G,
    ) -> Self
    where
        C: 'static,
        T: ToText + FromText + 'static,
        G: Fn(&C) -> T + Send + Sync + 'static,
    {
        Self::new(
            name,
            description,
            hint,
            Box::new(Property::<C, T>::read_only(getter)),
        )
    }

    /// Create an entry with both bindings for `(C, T)`.
    pub fn read_write<C, T, G, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        hint: EditorHint,
        getter: G,
        setter: S,
    ) -> Self
    where
        C: 'static,
        T: ToText + FromText + 'static,
        G: Fn(&C) -> T + Send + Sync + 'static,
        S: Fn(&mut C, T) + Send + Sync + 'static,
    {
        Self::new(
            name,
            description,
            hint,
            Box::new(Property::<C, T>::read_write(getter, setter)),
        )
    }

    /// Whether the descriptor has no setter bound.
    pub fn is_read_only(&self) -> bool {
        self.access.is_read_only()
    }

    /// Key of the class the descriptor's bindings are typed on.
    pub fn owner(&self) -> ClassKey {
        self.access.owner()
    }
}

impl fmt::Debug for PropertyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("hint", &self.hint)
            .field("read_only", &self.is_read_only())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lamp {
        lit: bool,
        watts: u32,
    }

    #[test]
    fn read_only_entry() {
        let entry = PropertyEntry::read_only(
            "lit",
            "whether the lamp is on",
            EditorHint::Boolean,
            |l: &Lamp| l.lit,
        );

        assert_eq!(entry.name, "lit");
        assert_eq!(entry.description, "whether the lamp is on");
        assert_eq!(entry.hint, EditorHint::Boolean);
        assert!(entry.is_read_only());
        assert_eq!(entry.owner(), ClassKey::of::<Lamp>());
    }

    #[test]
    fn read_write_entry() {
        let entry = PropertyEntry::read_write(
            "watts",
            "power draw",
            EditorHint::Integer,
            |l: &Lamp| l.watts,
            |l: &mut Lamp, w| l.watts = w,
        );

        assert!(!entry.is_read_only());

        let mut lamp = Lamp {
            lit: false,
            watts: 40,
        };
        assert_eq!(entry.access.get(&lamp), "40");
        entry.access.set(&mut lamp, "60").unwrap();
        assert_eq!(lamp.watts, 60);
    }

    #[test]
    fn editor_hint_primitive_roundtrip() {
        assert_eq!(u8::from(EditorHint::Text), 0);
        assert_eq!(u8::from(EditorHint::Integer), 1);
        assert_eq!(u8::from(EditorHint::Boolean), 2);

        assert_eq!(EditorHint::try_from(2u8).unwrap(), EditorHint::Boolean);
        assert!(EditorHint::try_from(3u8).is_err());
    }

    #[test]
    fn debug_output() {
        let entry = PropertyEntry::read_only("lit", "lamp state", EditorHint::Boolean, |l: &Lamp| {
            l.lit
        });
        let debug = format!("{:?}", entry);
        assert!(debug.contains("PropertyEntry"));
        assert!(debug.contains("lit"));
    }
}
