//! Capability traits for children managed by a transition group.
//!
//! The group never inspects a child's content. It needs exactly two things
//! from it: an optional identity ([`Keyed`]) and access to the transition
//! directives the child's own enter/exit driver reads
//! ([`TransitionChild`]). A child that returns `None` from
//! [`TransitionChild::directives`] is not animatable; it is ordered and kept
//! like any other child but never rewritten.

use crate::key::KeyBounds;
use crate::notifier::ExitNotifier;

/// A value that may carry a host-supplied identity.
pub trait Keyed {
    /// Explicit key type
    type Key: KeyBounds;

    /// The explicit key, or `None` to fall back to positional identity.
    fn key(&self) -> Option<&Self::Key>;
}

/// A child whose enter/exit directives can be rewritten by a transition group.
///
/// Children are `Send` so the group owning them can be shared with the
/// thread that drives their transitions.
pub trait TransitionChild: Keyed + Clone + Send {
    /// Current directives, or `None` if this child does not animate.
    fn directives(&self) -> Option<&TransitionDirectives<Self::Key>>;

    /// Mutable access to the directives, or `None` if this child does not animate.
    fn directives_mut(&mut self) -> Option<&mut TransitionDirectives<Self::Key>>;

    /// Returns true if this child takes part in transitions.
    fn is_transitional(&self) -> bool {
        self.directives().is_some()
    }

    /// Clone this child with the given directive overrides applied.
    ///
    /// Fields left unset in the patch keep their current value. Children
    /// without directives are returned unchanged.
    fn with_patch(&self, patch: DirectivePatch<Self::Key>) -> Self {
        let mut child = self.clone();
        if let Some(directives) = child.directives_mut() {
            directives.apply(patch);
        }
        child
    }
}

/// Directives a child's transition driver reads.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionDirectives<K> {
    /// Whether the child is logically present (`in`). Flipping this to
    /// `false` starts the exit transition.
    pub active: bool,

    /// Whether the enter transition should run when the child first mounts.
    pub should_appear: bool,

    /// Whether enter transitions run at all.
    pub enter_enabled: bool,

    /// Whether exit transitions run at all.
    pub exit_enabled: bool,

    /// Completion handle the driver fires once the exit transition ends.
    pub on_exited: Option<ExitNotifier<K>>,
}

impl<K> Default for TransitionDirectives<K> {
    fn default() -> Self {
        Self {
            active: false,
            should_appear: false,
            enter_enabled: true,
            exit_enabled: true,
            on_exited: None,
        }
    }
}

impl<K> TransitionDirectives<K> {
    /// Create directives with the driver defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the fields set in `patch`.
    pub fn apply(&mut self, patch: DirectivePatch<K>) {
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(should_appear) = patch.should_appear {
            self.should_appear = should_appear;
        }
        if let Some(enter_enabled) = patch.enter_enabled {
            self.enter_enabled = enter_enabled;
        }
        if let Some(exit_enabled) = patch.exit_enabled {
            self.exit_enabled = exit_enabled;
        }
        if let Some(on_exited) = patch.on_exited {
            self.on_exited = Some(on_exited);
        }
    }
}

/// A partial set of directive overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectivePatch<K> {
    pub active: Option<bool>,
    pub should_appear: Option<bool>,
    pub enter_enabled: Option<bool>,
    pub exit_enabled: Option<bool>,
    pub on_exited: Option<ExitNotifier<K>>,
}

impl<K> Default for DirectivePatch<K> {
    fn default() -> Self {
        Self {
            active: None,
            should_appear: None,
            enter_enabled: None,
            exit_enabled: None,
            on_exited: None,
        }
    }
}

impl<K> DirectivePatch<K> {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn should_appear(mut self, should_appear: bool) -> Self {
        self.should_appear = Some(should_appear);
        self
    }

    pub fn enter_enabled(mut self, enabled: bool) -> Self {
        self.enter_enabled = Some(enabled);
        self
    }

    pub fn exit_enabled(mut self, enabled: bool) -> Self {
        self.exit_enabled = Some(enabled);
        self
    }

    pub fn on_exited(mut self, notifier: ExitNotifier<K>) -> Self {
        self.on_exited = Some(notifier);
        self
    }

    /// Returns true if the patch overrides nothing.
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
            && self.should_appear.is_none()
            && self.enter_enabled.is_none()
            && self.exit_enabled.is_none()
            && self.on_exited.is_none()
    }
}
