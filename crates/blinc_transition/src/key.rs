//! Child identity for transition groups.
//!
//! Every child tracked by a [`TransitionGroup`](crate::TransitionGroup) is
//! addressed by a [`ChildKey`]. Hosts should give children an explicit key;
//! children without one fall back to their position in the input list,
//! which only stays stable while the list is never reordered.
//!
//! ```
//! use blinc_transition::ChildKey;
//!
//! let a = ChildKey::<&str>::explicit("row-1");
//! let b = ChildKey::<&str>::positional(0);
//!
//! // An explicit key never matches a positional one
//! assert_ne!(a, ChildKey::Positional(0));
//! assert!(b.is_positional());
//! ```

use std::fmt;
use std::hash::Hash;

/// Identity of one child across updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChildKey<K> {
    /// Key supplied by the host
    Explicit(K),
    /// Fallback identity derived from the child's index in its input list
    Positional(usize),
}

impl<K> ChildKey<K> {
    /// Create an explicit key.
    pub fn explicit(key: impl Into<K>) -> Self {
        ChildKey::Explicit(key.into())
    }

    /// Create a positional (index-derived) key.
    pub fn positional(index: usize) -> Self {
        ChildKey::Positional(index)
    }

    /// Resolve a child's identity: the explicit key if present, else its index.
    pub fn resolve(explicit: Option<&K>, index: usize) -> Self
    where
        K: Clone,
    {
        match explicit {
            Some(key) => ChildKey::Explicit(key.clone()),
            None => ChildKey::Positional(index),
        }
    }

    /// Returns true if this key was derived from a list position.
    pub fn is_positional(&self) -> bool {
        matches!(self, ChildKey::Positional(_))
    }

    /// The explicit key, if any.
    pub fn as_explicit(&self) -> Option<&K> {
        match self {
            ChildKey::Explicit(key) => Some(key),
            ChildKey::Positional(_) => None,
        }
    }
}

impl<K: fmt::Display> fmt::Display for ChildKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKey::Explicit(key) => write!(f, "${}", key),
            ChildKey::Positional(index) => write!(f, "#{}", index),
        }
    }
}

/// Bounds every explicit key type must satisfy.
///
/// Keys travel inside exit notifiers, which may be fired from another thread.
pub trait KeyBounds: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static> KeyBounds for T {}
