//! Hash-based class identity.
//!
//! This module provides [`ClassKey`], a deterministic 64-bit key identifying
//! a reflectable class. Keys are computed from the type's `TypeId` through
//! xxh64 with a domain-mixing constant, so the same type always produces the
//! same key within one process, with no registration-order dependencies.
//!
//! Descriptors record the key of the class their bindings are typed on, and
//! the capability layer uses it to project an object onto one of its
//! ancestor classes before invoking a descriptor.
//!
//! # Examples
//!
//! ```
//! use metaprop_core::ClassKey;
//!
//! struct Player;
//! struct Enemy;
//!
//! assert_eq!(ClassKey::of::<Player>(), ClassKey::of::<Player>());
//! assert_ne!(ClassKey::of::<Player>(), ClassKey::of::<Enemy>());
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

/// Domain-mixing seed folded into every class key.
///
/// Keeps class keys disjoint from other 64-bit identities a consumer might
/// store alongside them.
const CLASS_DOMAIN: u64 = 0x6f1d2c5a94b8e037;

/// A deterministic 64-bit key identifying a reflectable class.
///
/// The same type always produces the same key, enabling owner checks and
/// ancestor projection without carrying type parameters through erased code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ClassKey(pub u64);

impl ClassKey {
    /// Empty/invalid key constant.
    pub const EMPTY: ClassKey = ClassKey(0);

    /// Key for the class `T`.
    #[inline]
    pub fn of<T: 'static>() -> Self {
        Self::of_type_id(TypeId::of::<T>())
    }

    /// Key for an already-erased `TypeId`.
    ///
    /// Produces the same key as [`ClassKey::of`] for the corresponding type.
    #[inline]
    pub fn of_type_id(type_id: TypeId) -> Self {
        let mut hasher = Xxh64::new(CLASS_DOMAIN);
        type_id.hash(&mut hasher);
        ClassKey(hasher.finish())
    }

    /// Check if this is the empty/invalid key.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassKey({:#018x})", self.0)
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
