//! Per-class property registry with base chaining.
//!
//! This module provides [`PropertyRegistry`], the per-class table of
//! [`PropertyEntry`] values plus an ordered list of non-owning base
//! registry references consulted on lookup miss.
//!
//! # Phases
//!
//! A registry passes through exactly two phases:
//!
//! - **Build**: a sequential chain of registration/attachment calls,
//!   expected to complete before any instance is constructed or queried.
//! - **Frozen**: read-only. Concurrent reads from multiple threads are
//!   safe because nothing mutates.
//!
//! Registration overlapping with resolution is an initialization-order
//! error on the caller's side; the registry performs no synchronization.
//! The intended home for a registry is a per-class `lazy_static!` block,
//! which gives every instance of the class a shared `&'static` handle and
//! makes the build phase run to completion on first touch.
//!
//! # Base chaining
//!
//! Derived classes do not re-register inherited properties. They attach
//! the ancestor's registry as a base; [`PropertyRegistry::resolve`] checks
//! own entries first, then each base depth-first in attachment order, so
//! own entries always shadow base entries and the first attached base wins
//! ties between bases. The base graph must be acyclic; constructing a
//! cycle is a caller error that is not checked.
//!
//! # Example
//!
//! ```
//! use lazy_static::lazy_static;
//! use metaprop_core::EditorHint;
//! use metaprop_registry::PropertyRegistry;
//!
//! struct Entity {
//!     name: String,
//!     count: i32,
//! }
//!
//! lazy_static! {
//!     static ref ENTITY_META: PropertyRegistry =
//!         PropertyRegistry::for_class::<Entity>("Entity")
//!             .register_read_only("name", "entity name", EditorHint::Text, |e: &Entity| {
//!                 e.name.clone()
//!             })
//!             .register_read_write(
//!                 "count",
//!                 "instance count",
//!                 EditorHint::Integer,
//!                 |e: &Entity| e.count,
//!                 |e: &mut Entity, v| e.count = v,
//!             );
//! }
//!
//! assert!(ENTITY_META.resolve("count").is_some());
//! assert!(ENTITY_META.resolve("missing").is_none());
//! ```

use std::fmt;

use metaprop_core::{ClassKey, EditorHint, FromText, PropertyEntry, ToText};
use rustc_hash::{FxHashMap, FxHashSet};

/// The per-class table of property entries plus its chain of base
/// registries.
///
/// One registry exists per reflectable class, with process-wide lifetime:
/// built once, never destroyed, never mutated after the class's
/// registration sequence completes. Instances hold no ownership of it;
/// they share it by reference.
pub struct PropertyRegistry {
    /// Key of the class this registry describes.
    class: ClassKey,
    /// Display name of the class, for tooling and diagnostics.
    class_name: &'static str,
    /// Own entries by property name.
    entries: FxHashMap<String, PropertyEntry>,
    /// Non-owning base registry references, in attachment order.
    bases: Vec<&'static PropertyRegistry>,
}

impl PropertyRegistry {
    /// Create an empty registry bound to class `C`.
    pub fn for_class<C: 'static>(class_name: &'static str) -> Self {
        Self {
            class: ClassKey::of::<C>(),
            class_name,
            entries: FxHashMap::default(),
            bases: Vec::new(),
        }
    }

    // ==========================================================================
    // Registration (build phase)
    // ==========================================================================

    /// Add a getter-only property. Chainable.
    pub fn register_read_only<C, T, G>(
        self,
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
        self.insert(PropertyEntry::read_only(name, description, hint, getter))
    }

    /// Add a property with both bindings. Chainable.
    pub fn register_read_write<C, T, G, S>(
        self,
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
        self.insert(PropertyEntry::read_write(
            name,
            description,
            hint,
            getter,
            setter,
        ))
    }

    /// Append a non-owning base registry reference. Chainable.
    ///
    /// Bases are consulted in attachment order on lookup miss. Multiple
    /// bases model composed property sets.
    pub fn attach_base(mut self, base: &'static PropertyRegistry) -> Self {
        self.bases.push(base);
        self
    }

    fn insert(mut self, entry: PropertyEntry) -> Self {
        debug_assert_eq!(
            entry.owner(),
            self.class,
            "descriptor for a foreign class registered on '{}'",
            self.class_name
        );
        debug_assert!(
            !self.entries.contains_key(&entry.name),
            "duplicate property '{}' on '{}'",
            entry.name,
            self.class_name
        );
        self.entries.entry(entry.name.clone()).or_insert(entry);
        self
    }

    // ==========================================================================
    // Lookup (frozen phase)
    // ==========================================================================

    /// Resolve `name` to an entry.
    ///
    /// Checks own entries first; on miss, consults each attached base
    /// depth-first in attachment order and returns the first match. `None`
    /// if no registry in the transitive closure defines `name`.
    pub fn resolve(&self, name: &str) -> Option<&PropertyEntry> {
        if let Some(entry) = self.entries.get(name) {
            return Some(entry);
        }
        self.bases.iter().find_map(|base| base.resolve(name))
    }

    /// Deduplicated union of this registry's own names and every
    /// transitively attached base's names.
    pub fn names(&self) -> FxHashSet<&str> {
        let mut out = FxHashSet::default();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut FxHashSet<&'a str>) {
        out.extend(self.entries.keys().map(String::as_str));
        for base in &self.bases {
            base.collect_names(out);
        }
    }

    // ==========================================================================
    // Accessors
    // ==========================================================================

    /// Key of the class this registry describes.
    pub fn class_key(&self) -> ClassKey {
        self.class
    }

    /// Display name of the class this registry describes.
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// Number of own entries (bases excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this registry has no own entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is defined in this registry's own entries (bases
    /// excluded). Use [`PropertyRegistry::resolve`] to search the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate this registry's own entries (bases excluded), in no
    /// particular order.
    pub fn entries(&self) -> impl Iterator<Item = &PropertyEntry> {
        self.entries.values()
    }

    /// The attached base registries, in attachment order.
    pub fn bases(&self) -> &[&'static PropertyRegistry] {
        &self.bases
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("class", &self.class_name)
            .field("entries", &self.entries.len())
            .field(
                "bases",
                &self.bases.iter().map(|b| b.class_name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
