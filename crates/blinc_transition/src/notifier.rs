//! Exit completion handles.
//!
//! An [`ExitNotifier`] is handed to every animatable child through its
//! directives. The child's transition driver fires it once the exit
//! transition has finished, which lets the owning group drop the child.
//!
//! The handle is a (group, key) pair rather than a closure: two notifiers
//! are equal exactly when they point at the same group and the same key.
//! It holds the group weakly, so a notifier kept alive by a finished
//! animation never keeps the group itself alive. Notifiers are `Send` and
//! `Sync` and may be fired from any thread.

use std::fmt;
use std::sync::{Arc, Weak};

use crate::key::ChildKey;

/// Receiver of exit completions, implemented by the group's shared state.
///
/// Transition drivers may run on an animation thread, so sinks must be
/// shareable across threads.
pub(crate) trait ExitSink<K>: Send + Sync {
    /// Handle a finished exit. Returns true if the child was removed.
    fn child_exited(&self, key: &ChildKey<K>) -> bool;
}

/// Completion handle bound to one child of one transition group.
pub struct ExitNotifier<K> {
    group: Weak<dyn ExitSink<K>>,
    key: ChildKey<K>,
}

impl<K> ExitNotifier<K> {
    pub(crate) fn new(group: Weak<dyn ExitSink<K>>, key: ChildKey<K>) -> Self {
        Self { group, key }
    }

    /// Create a notifier that is bound to no group.
    ///
    /// Firing it does nothing. Useful for hosts and tests that build
    /// directives by hand.
    pub fn detached(key: ChildKey<K>) -> Self
    where
        K: 'static,
    {
        let group: Weak<dyn ExitSink<K>> = Weak::<DetachedSink>::new();
        Self { group, key }
    }

    /// The key this notifier reports for.
    pub fn key(&self) -> &ChildKey<K> {
        &self.key
    }

    /// Returns true while the owning group is still alive.
    pub fn is_attached(&self) -> bool {
        self.group.strong_count() > 0
    }

    /// Report that this child's exit transition has finished.
    ///
    /// Returns true if the group removed the child. Firing after the group
    /// was dropped, after the child was already removed, or after the child
    /// re-entered is a no-op that returns false.
    pub fn notify(&self) -> bool {
        match self.group.upgrade() {
            Some(group) => group.child_exited(&self.key),
            None => false,
        }
    }

    /// Returns true if both notifiers belong to the same group.
    pub fn same_group(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.group, &other.group)
    }
}

/// Placeholder sink type for detached notifiers; never instantiated.
struct DetachedSink;

impl<K> ExitSink<K> for DetachedSink {
    fn child_exited(&self, _key: &ChildKey<K>) -> bool {
        false
    }
}

/// Downgrade a shared sink into the form notifiers hold.
pub(crate) fn downgrade_sink<K, S>(sink: &Arc<S>) -> Weak<dyn ExitSink<K>>
where
    S: ExitSink<K> + 'static,
{
    let sink: Arc<dyn ExitSink<K>> = sink.clone();
    Arc::downgrade(&sink)
}

impl<K: Clone> Clone for ExitNotifier<K> {
    fn clone(&self) -> Self {
        Self {
            group: self.group.clone(),
            key: self.key.clone(),
        }
    }
}

impl<K: PartialEq> PartialEq for ExitNotifier<K> {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.group, &other.group) && self.key == other.key
    }
}

impl<K: Eq> Eq for ExitNotifier<K> {}

impl<K: fmt::Debug> fmt::Debug for ExitNotifier<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitNotifier")
            .field("key", &self.key)
            .field("attached", &self.is_attached())
            .finish()
    }
}
