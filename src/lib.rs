//! String-keyed runtime property reflection.
//!
//! `metaprop` lets a class expose a named set of properties - state
//! reachable through a getter and an optional setter - behind one uniform,
//! text-based access interface, independent of each property's native
//! type. Consumers are tools that want generic introspection without a
//! full reflection runtime: property-grid editors, serializers, scripting
//! bridges, debug inspectors.
//!
//! The crate is a thin facade over two workspace members:
//!
//! - `metaprop-core`: text conversion, class identity, the type-erased
//!   descriptor engine, and metadata entries
//! - `metaprop-registry`: per-class registries with base chaining, and the
//!   [`Reflect`] capability trait
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//!
//! use lazy_static::lazy_static;
//! use metaprop::{EditorHint, PropertyRegistry, Reflect};
//!
//! struct Lamp {
//!     label: String,
//!     watts: u32,
//! }
//!
//! lazy_static! {
//!     static ref LAMP_META: PropertyRegistry = PropertyRegistry::for_class::<Lamp>("Lamp")
//!         .register_read_only("label", "fixture label", EditorHint::Text, |l: &Lamp| {
//!             l.label.clone()
//!         })
//!         .register_read_write(
//!             "watts",
//!             "power draw",
//!             EditorHint::Integer,
//!             |l: &Lamp| l.watts,
//!             |l: &mut Lamp, w| l.watts = w,
//!         );
//! }
//!
//! impl Reflect for Lamp {
//!     fn registry(&self) -> &'static PropertyRegistry {
//!         &LAMP_META
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//!
//! let mut lamp = Lamp {
//!     label: "desk".to_string(),
//!     watts: 40,
//! };
//!
//! assert_eq!(lamp.get_property("label").unwrap(), "desk");
//! lamp.set_property("watts", "60").unwrap();
//! assert_eq!(lamp.watts, 60);
//! assert!(lamp.set_property("label", "renamed").is_err());
//! ```

pub use metaprop_core::{
    AccessError, ClassKey, ConversionError, EditorHint, FromText, Property, PropertyAccess,
    PropertyEntry, ToText,
};
pub use metaprop_registry::{PropertyRegistry, Reflect};
