//! Transition group coordinator
//!
//! [`TransitionGroup`] keeps a keyed list of children alive long enough for
//! removed children to finish their exit transition. Every time the host
//! re-renders with a new child list, the group:
//!
//! 1. Maps the new list by key
//! 2. Merges it with the children it currently holds, keeping removed
//!    children in place ([`merge_child_mappings`])
//! 3. Classifies each key as entering, exiting or unchanged and rewrites
//!    the child's directives accordingly
//! 4. Commits the merged list as its new state
//!
//! A removed child stays in the group until its driver fires the
//! [`ExitNotifier`] carried in its directives. If the child came back in
//! the meantime, the notification is ignored.
//!
//! # Example
//!
//! ```ignore
//! use blinc_transition::{TransitionGroup, TransitionGroupConfig};
//!
//! let group = TransitionGroup::new(vec![row("a"), row("b")], TransitionGroupConfig::new())?;
//!
//! // "b" is removed but kept alive while it animates out
//! group.update(vec![row("a")], TransitionGroupConfig::new())?;
//! assert_eq!(group.len(), 2);
//!
//! // The exit animation of "b" finishes
//! group.notify_exited(&ChildKey::Explicit("b"));
//! assert_eq!(group.len(), 1);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashSet;

use crate::child::{DirectivePatch, TransitionChild};
use crate::config::TransitionGroupConfig;
use crate::error::Result;
use crate::key::ChildKey;
use crate::mapping::{child_mapping, child_mapping_with, ChildMapping};
use crate::merge::merge_child_mappings;
use crate::notifier::{downgrade_sink, ExitNotifier, ExitSink};

// =============================================================================
// TransitionKind / UpdateSummary
// =============================================================================

/// How a child's presence changed in one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// New in the input, or re-added while it was still exiting
    Entering,
    /// Gone from the input; kept until its exit completes
    Exiting,
    /// In the input before and after
    Unchanged,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransitionKind::Entering => "entering",
            TransitionKind::Exiting => "exiting",
            TransitionKind::Unchanged => "unchanged",
        };
        f.write_str(name)
    }
}

/// Classification of every child after an update, in render order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary<K> {
    entries: Vec<(ChildKey<K>, TransitionKind)>,
}

impl<K: PartialEq> UpdateSummary<K> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, key: ChildKey<K>, kind: TransitionKind) {
        self.entries.push((key, kind));
    }

    /// The classification of `key`, if it is part of the group.
    pub fn kind_of(&self, key: &ChildKey<K>) -> Option<TransitionKind> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, kind)| *kind)
    }

    /// (key, kind) pairs in render order
    pub fn iter(&self) -> impl Iterator<Item = (&ChildKey<K>, TransitionKind)> + '_ {
        self.entries.iter().map(|(k, kind)| (k, *kind))
    }

    /// Keys with the given classification, in render order
    pub fn keys_with(&self, kind: TransitionKind) -> impl Iterator<Item = &ChildKey<K>> + '_ {
        self.entries
            .iter()
            .filter(move |(_, k)| *k == kind)
            .map(|(key, _)| key)
    }

    pub fn count(&self, kind: TransitionKind) -> usize {
        self.entries.iter().filter(|(_, k)| *k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Group state
// =============================================================================

/// State shared between the group and the notifiers it hands out.
struct GroupState<P: TransitionChild> {
    /// Committed children in render order
    children: ChildMapping<P::Key, P>,
    /// Keys requested by the latest accepted input
    requested: FxHashSet<ChildKey<P::Key>>,
    /// Set once the first render has been committed
    appeared: bool,
    /// Configuration of the latest accepted initialize/update
    config: TransitionGroupConfig,
}

impl<P: TransitionChild> GroupState<P> {
    fn new(config: TransitionGroupConfig) -> Self {
        Self {
            children: ChildMapping::new(),
            requested: FxHashSet::default(),
            appeared: false,
            config,
        }
    }

    /// Drop a child whose exit finished, unless the latest input still asks for it.
    fn prune(&mut self, key: &ChildKey<P::Key>) -> Option<P> {
        if self.requested.contains(key) {
            tracing::trace!(?key, "exit completed for a child that was re-added; keeping it");
            return None;
        }
        let removed = self.children.remove(key);
        match removed {
            Some(_) => tracing::debug!(?key, "removed exited transition child"),
            None => tracing::trace!(?key, "ignoring exit completion for unknown child"),
        }
        removed
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<P: TransitionChild> ExitSink<P::Key> for Mutex<GroupState<P>> {
    fn child_exited(&self, key: &ChildKey<P::Key>) -> bool {
        // Release the lock before the removed child is dropped
        let removed = lock(self).prune(key);
        removed.is_some()
    }
}

fn requested_keys<K: Clone + Eq + std::hash::Hash>(keys: &[ChildKey<K>]) -> FxHashSet<ChildKey<K>> {
    keys.iter().cloned().collect()
}

// =============================================================================
// TransitionGroup
// =============================================================================

/// Coordinator that keeps removed children alive until their exit completes.
///
/// The group exclusively owns its children. Readers get cloned snapshots
/// ([`children`](Self::children), [`snapshot`](Self::snapshot)); the only
/// way state changes is through [`initialize`](Self::initialize),
/// [`update`](Self::update) and exit notifications.
pub struct TransitionGroup<P: TransitionChild + 'static> {
    inner: Arc<Mutex<GroupState<P>>>,
}

impl<P: TransitionChild + 'static> TransitionGroup<P> {
    /// Create a group from its initial children.
    ///
    /// Every child starts active. Whether it plays its enter transition on
    /// first mount is controlled by `config.appear`.
    pub fn new<I>(children: I, config: TransitionGroupConfig) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let group = Self {
            inner: Arc::new(Mutex::new(GroupState::new(config))),
        };
        group.initialize(children, config)?;
        Ok(group)
    }

    /// Replace all state with a fresh initial child list.
    ///
    /// Children held from earlier updates are discarded without waiting for
    /// their exits. On error the previous state is kept.
    pub fn initialize<I>(&self, children: I, config: TransitionGroupConfig) -> Result<()>
    where
        I: IntoIterator<Item = P>,
    {
        let sink = downgrade_sink(&self.inner);
        let initial = child_mapping_with(children, |child, key| {
            child.with_patch(
                DirectivePatch::new()
                    .active(true)
                    .should_appear(config.appear)
                    .enter_enabled(config.enter)
                    .exit_enabled(config.exit)
                    .on_exited(ExitNotifier::new(sink.clone(), key.clone())),
            )
        })?;

        let replaced = {
            let mut state = lock(&self.inner);
            state.requested = requested_keys(initial.keys());
            state.appeared = false;
            state.config = config;
            std::mem::replace(&mut state.children, initial)
        };
        tracing::debug!(
            discarded = replaced.len(),
            appear = config.appear,
            "transition group initialized"
        );
        Ok(())
    }

    /// Reconcile the group with a new child list.
    ///
    /// Only `config.enter` and `config.exit` are read; `appear` applies to
    /// the initial children alone. Returns how each child was classified.
    /// On error (duplicate keys) nothing is committed.
    pub fn update<I>(
        &self,
        children: I,
        config: TransitionGroupConfig,
    ) -> Result<UpdateSummary<P::Key>>
    where
        I: IntoIterator<Item = P>,
    {
        let next = child_mapping(children)?;
        let sink = downgrade_sink(&self.inner);

        let mut state = lock(&self.inner);
        let prev = &state.children;
        let mut merged = merge_child_mappings(prev, &next);
        let order = merged.keys().to_vec();
        let mut summary = UpdateSummary::with_capacity(order.len());

        for key in order {
            let prev_child = prev.get(&key);
            let prev_directives = prev_child.and_then(|child| child.directives());
            let was_exiting = prev_directives.is_some_and(|d| !d.active);
            let in_next = next.contains_key(&key);

            let (kind, patch) = if in_next && (prev_child.is_none() || was_exiting) {
                let patch = DirectivePatch::new()
                    .active(true)
                    .should_appear(config.enter)
                    .exit_enabled(config.exit)
                    .on_exited(ExitNotifier::new(sink.clone(), key.clone()));
                (TransitionKind::Entering, Some(patch))
            } else if !in_next {
                // Already-exiting children keep their directives untouched
                let patch = (!was_exiting).then(|| DirectivePatch::new().active(false));
                (TransitionKind::Exiting, patch)
            } else {
                // Carry over the previous transition state so a running
                // transition is not restarted
                let patch = prev_directives.map(|d| {
                    DirectivePatch::new()
                        .active(d.active)
                        .should_appear(d.should_appear)
                        .on_exited(ExitNotifier::new(sink.clone(), key.clone()))
                });
                (TransitionKind::Unchanged, patch)
            };

            tracing::trace!(?key, %kind, "classified transition child");

            if let Some(patch) = patch {
                if let Some(directives) = merged.get_mut(&key).and_then(|c| c.directives_mut()) {
                    directives.apply(patch);
                }
            }
            summary.push(key, kind);
        }

        let replaced = std::mem::replace(&mut state.children, merged);
        state.requested = requested_keys(next.keys());
        state.appeared = true;
        state.config = config;
        // Children may fire their notifier when torn down; release the lock first
        drop(state);
        drop(replaced);

        tracing::debug!(
            entering = summary.count(TransitionKind::Entering),
            exiting = summary.count(TransitionKind::Exiting),
            unchanged = summary.count(TransitionKind::Unchanged),
            "transition group updated"
        );
        Ok(summary)
    }

    /// Report that the exit transition of `key` has finished.
    ///
    /// Removes the child unless the latest input contains it again. Unknown
    /// or already removed keys are ignored. Returns true if a child was
    /// removed.
    pub fn notify_exited(&self, key: &ChildKey<P::Key>) -> bool {
        self.inner.child_exited(key)
    }

    /// A completion handle for `key`, equal to the one the group embeds in
    /// that child's directives.
    pub fn notifier(&self, key: ChildKey<P::Key>) -> ExitNotifier<P::Key> {
        ExitNotifier::new(downgrade_sink(&self.inner), key)
    }

    /// Mark the first render as finished.
    ///
    /// Until this is called (or the first update is committed) the group
    /// reports [`is_mounting`](Self::is_mounting).
    pub fn mark_mounted(&self) {
        lock(&self.inner).appeared = true;
    }

    /// True while the initial children are being mounted.
    pub fn is_mounting(&self) -> bool {
        !lock(&self.inner).appeared
    }

    /// Children in render order
    pub fn children(&self) -> Vec<P> {
        lock(&self.inner).children.values().cloned().collect()
    }

    /// Keys in render order
    pub fn keys(&self) -> Vec<ChildKey<P::Key>> {
        lock(&self.inner).children.keys().to_vec()
    }

    pub fn get(&self, key: &ChildKey<P::Key>) -> Option<P> {
        lock(&self.inner).children.get(key).cloned()
    }

    pub fn contains_key(&self, key: &ChildKey<P::Key>) -> bool {
        lock(&self.inner).children.contains_key(key)
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).children.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).children.is_empty()
    }

    /// Copy of the committed mapping
    pub fn snapshot(&self) -> ChildMapping<P::Key, P> {
        lock(&self.inner).children.clone()
    }

    /// Configuration of the latest accepted initialize/update
    pub fn config(&self) -> TransitionGroupConfig {
        lock(&self.inner).config
    }
}

impl<P: TransitionChild + 'static> fmt::Debug for TransitionGroup<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.inner);
        f.debug_struct("TransitionGroup")
            .field("keys", &state.children.keys())
            .field("appeared", &state.appeared)
            .field("config", &state.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::child::test_support::{items, Item};
    use crate::error::TransitionError;

    fn key(k: &'static str) -> ChildKey<&'static str> {
        ChildKey::Explicit(k)
    }

    fn keys_of(group: &TransitionGroup<Item>) -> Vec<&'static str> {
        group
            .keys()
            .iter()
            .map(|k| *k.as_explicit().unwrap())
            .collect()
    }

    #[test]
    fn test_initial_children_are_active() {
        let group = TransitionGroup::new(items(&["a", "b", "c"]), TransitionGroupConfig::new()).unwrap();

        assert_eq!(keys_of(&group), vec!["a", "b", "c"]);
        for child in group.children() {
            let d = child.d();
            assert!(d.active);
            assert!(!d.should_appear);
            assert!(d.enter_enabled);
            assert!(d.exit_enabled);
            assert_eq!(
                d.on_exited.as_ref().unwrap(),
                &group.notifier(ChildKey::Explicit(child.key.unwrap()))
            );
        }
        assert!(group.is_mounting());
    }

    #[test]
    fn test_appear_flag_applies_to_initial_children() {
        let config = TransitionGroupConfig::new().appear(true).exit(false);
        let group = TransitionGroup::new(items(&["a"]), config).unwrap();

        let a = group.get(&key("a")).unwrap();
        assert!(a.d().should_appear);
        assert!(!a.d().exit_enabled);
    }

    #[test]
    fn test_removed_child_exits_in_place() {
        let group = TransitionGroup::new(items(&["a", "b", "c"]), TransitionGroupConfig::new()).unwrap();
        let summary = group.update(items(&["a", "c"]), TransitionGroupConfig::new()).unwrap();

        assert_eq!(keys_of(&group), vec!["a", "b", "c"]);
        assert_eq!(summary.kind_of(&key("a")), Some(TransitionKind::Unchanged));
        assert_eq!(summary.kind_of(&key("b")), Some(TransitionKind::Exiting));
        assert_eq!(summary.kind_of(&key("c")), Some(TransitionKind::Unchanged));
        assert!(!group.get(&key("b")).unwrap().d().active);
        assert!(!group.is_mounting());
    }

    #[test]
    fn test_exiting_child_keeps_its_directives() {
        let config = TransitionGroupConfig::new().appear(true);
        let group = TransitionGroup::new(items(&["a", "b"]), config).unwrap();
        let before = group.get(&key("b")).unwrap();

        group.update(items(&["a"]), TransitionGroupConfig::disabled()).unwrap();

        let after = group.get(&key("b")).unwrap();
        assert!(!after.d().active);
        assert_eq!(after.d().should_appear, before.d().should_appear);
        assert_eq!(after.d().exit_enabled, before.d().exit_enabled);
        assert_eq!(after.d().on_exited, before.d().on_exited);
    }

    #[test]
    fn test_new_child_enters_with_enter_flag() {
        let group = TransitionGroup::new(items(&["a"]), TransitionGroupConfig::new().appear(false)).unwrap();
        let summary = group
            .update(items(&["a", "b"]), TransitionGroupConfig::new().exit(false))
            .unwrap();

        assert_eq!(summary.kind_of(&key("b")), Some(TransitionKind::Entering));
        let b = group.get(&key("b")).unwrap();
        assert!(b.d().active);
        assert!(b.d().should_appear);
        assert!(!b.d().exit_enabled);
        assert!(b.d().on_exited.is_some());
    }

    #[test]
    fn test_unchanged_child_takes_new_content_but_keeps_state() {
        let group = TransitionGroup::new(items(&["a"]), TransitionGroupConfig::new().appear(true)).unwrap();
        group
            .update(vec![Item::new("a").labelled("updated")], TransitionGroupConfig::new().enter(false))
            .unwrap();

        let a = group.get(&key("a")).unwrap();
        assert_eq!(a.label, "updated");
        assert!(a.d().active);
        assert!(a.d().should_appear);
        assert_eq!(a.d().on_exited, Some(group.notifier(key("a"))));
    }

    #[test]
    fn test_notify_exited_removes_child() {
        let group = TransitionGroup::new(items(&["a", "b", "c"]), TransitionGroupConfig::new()).unwrap();
        group.update(items(&["a", "c"]), TransitionGroupConfig::new()).unwrap();

        assert!(group.notify_exited(&key("b")));
        assert_eq!(keys_of(&group), vec!["a", "c"]);

        // Second completion is a no-op
        assert!(!group.notify_exited(&key("b")));
        assert_eq!(keys_of(&group), vec!["a", "c"]);
    }

    #[test]
    fn test_notify_exited_through_embedded_notifier() {
        let group = TransitionGroup::new(items(&["a", "b"]), TransitionGroupConfig::new()).unwrap();
        group.update(items(&["a"]), TransitionGroupConfig::new()).unwrap();

        let b = group.get(&key("b")).unwrap();
        assert!(b.d().on_exited.as_ref().unwrap().notify());
        assert!(!group.contains_key(&key("b")));
    }

    #[test]
    fn test_reentry_cancels_removal() {
        let group = TransitionGroup::new(items(&["a", "b", "c"]), TransitionGroupConfig::new()).unwrap();
        group.update(items(&["a", "c"]), TransitionGroupConfig::new()).unwrap();
        let summary = group.update(items(&["a", "b", "c"]), TransitionGroupConfig::new()).unwrap();

        assert_eq!(summary.kind_of(&key("b")), Some(TransitionKind::Entering));
        assert!(group.get(&key("b")).unwrap().d().active);

        assert!(!group.notify_exited(&key("b")));
        assert_eq!(keys_of(&group), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_still_exiting_child_is_left_alone() {
        let group = TransitionGroup::new(items(&["a", "b"]), TransitionGroupConfig::new()).unwrap();
        group.update(items(&["a"]), TransitionGroupConfig::new()).unwrap();
        let first = group.get(&key("b")).unwrap();

        let summary = group.update(items(&["a"]), TransitionGroupConfig::new()).unwrap();
        assert_eq!(summary.kind_of(&key("b")), Some(TransitionKind::Exiting));
        assert_eq!(group.get(&key("b")).unwrap(), first);
    }

    #[test]
    fn test_duplicate_keys_keep_previous_state() {
        let group = TransitionGroup::new(items(&["a", "b"]), TransitionGroupConfig::new()).unwrap();
        let before = group.snapshot();

        let err = group.update(items(&["c", "c"]), TransitionGroupConfig::new()).unwrap_err();
        assert!(matches!(err, TransitionError::DuplicateKey { .. }));
        assert_eq!(group.snapshot(), before);

        // The rejected input does not count as the latest input either
        group.update(items(&["a"]), TransitionGroupConfig::new()).unwrap();
        assert!(group.notify_exited(&key("b")));
    }

    #[test]
    fn test_duplicate_keys_on_new() {
        let err = TransitionGroup::new(items(&["a", "a"]), TransitionGroupConfig::new()).unwrap_err();
        assert!(matches!(err, TransitionError::DuplicateKey { .. }));
    }

    #[test]
    fn test_unknown_key_completion_is_ignored() {
        let group = TransitionGroup::new(items(&["a"]), TransitionGroupConfig::new()).unwrap();
        assert!(!group.notify_exited(&key("zzz")));
        assert!(!group.notify_exited(&ChildKey::Positional(7)));
        assert_eq!(keys_of(&group), vec!["a"]);
    }

    #[test]
    fn test_notify_for_present_child_is_ignored() {
        let group = TransitionGroup::new(items(&["a"]), TransitionGroupConfig::new()).unwrap();
        assert!(!group.notify_exited(&key("a")));
        assert!(group.contains_key(&key("a")));
    }

    #[test]
    fn test_inert_children_are_kept_but_not_rewritten() {
        let group = TransitionGroup::new(
            vec![Item::new("a"), Item::inert("sep"), Item::new("b")],
            TransitionGroupConfig::new(),
        )
        .unwrap();
        assert_eq!(group.get(&key("sep")).unwrap().directives, None);

        let summary = group
            .update(vec![Item::new("a"), Item::new("b")], TransitionGroupConfig::new())
            .unwrap();
        assert_eq!(summary.kind_of(&key("sep")), Some(TransitionKind::Exiting));
        assert_eq!(keys_of(&group), vec!["a", "sep", "b"]);
        assert!(group.notify_exited(&key("sep")));
    }

    #[test]
    fn test_initialize_resets_state() {
        let group = TransitionGroup::new(items(&["a", "b"]), TransitionGroupConfig::new()).unwrap();
        group.update(items(&["a"]), TransitionGroupConfig::new()).unwrap();

        group
            .initialize(items(&["x"]), TransitionGroupConfig::new().appear(true))
            .unwrap();
        assert_eq!(keys_of(&group), vec!["x"]);
        assert!(group.is_mounting());
        assert!(group.config().appear);

        group.mark_mounted();
        assert!(!group.is_mounting());
    }

    #[test]
    fn test_notifier_outliving_group_is_noop() {
        let group = TransitionGroup::new(items(&["a"]), TransitionGroupConfig::new()).unwrap();
        let notifier = group.notifier(key("a"));
        drop(group);
        assert!(!notifier.notify());
    }

    #[test]
    fn test_summary_helpers() {
        let group = TransitionGroup::new(items(&["a", "b"]), TransitionGroupConfig::new()).unwrap();
        let summary = group.update(items(&["b", "c"]), TransitionGroupConfig::new()).unwrap();

        assert_eq!(summary.len(), 3);
        assert_eq!(summary.count(TransitionKind::Entering), 1);
        assert_eq!(summary.count(TransitionKind::Exiting), 1);
        assert_eq!(summary.count(TransitionKind::Unchanged), 1);
        let entering: Vec<_> = summary.keys_with(TransitionKind::Entering).collect();
        assert_eq!(entering, vec![&key("c")]);
        assert_eq!(TransitionKind::Exiting.to_string(), "exiting");
    }

    /// Child whose driver reports its exit as soon as the exiting node is torn down.
    #[derive(Clone)]
    struct TearDownRow {
        id: u32,
        armed: Arc<std::sync::atomic::AtomicBool>,
        transition: crate::child::TransitionDirectives<u32>,
    }

    impl crate::child::Keyed for TearDownRow {
        type Key = u32;

        fn key(&self) -> Option<&u32> {
            Some(&self.id)
        }
    }

    impl TransitionChild for TearDownRow {
        fn directives(&self) -> Option<&crate::child::TransitionDirectives<u32>> {
            Some(&self.transition)
        }

        fn directives_mut(&mut self) -> Option<&mut crate::child::TransitionDirectives<u32>> {
            Some(&mut self.transition)
        }
    }

    impl Drop for TearDownRow {
        fn drop(&mut self) {
            if self.armed.load(std::sync::atomic::Ordering::SeqCst) && !self.transition.active {
                if let Some(notifier) = &self.transition.on_exited {
                    notifier.notify();
                }
            }
        }
    }

    #[test]
    fn test_update_releases_lock_before_dropping_old_children() {
        let armed = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let rows = |ids: &[u32]| -> Vec<TearDownRow> {
            ids.iter()
                .map(|&id| TearDownRow {
                    id,
                    armed: armed.clone(),
                    transition: Default::default(),
                })
                .collect()
        };

        let group = TransitionGroup::new(rows(&[1, 2]), TransitionGroupConfig::new()).unwrap();
        group.update(rows(&[1]), TransitionGroupConfig::new()).unwrap();
        assert_eq!(group.len(), 2);

        armed.store(true, std::sync::atomic::Ordering::SeqCst);
        group.update(rows(&[1]), TransitionGroupConfig::new()).unwrap();

        // The replaced copy of row 2 fired its notifier on teardown
        assert_eq!(group.keys(), vec![ChildKey::Explicit(1)]);
        armed.store(false, std::sync::atomic::Ordering::SeqCst);
    }

    #[test]
    fn test_group_is_shareable_across_threads() {
        let group = Arc::new(
            TransitionGroup::new(items(&["a", "b"]), TransitionGroupConfig::new()).unwrap(),
        );
        group.update(items(&["a"]), TransitionGroupConfig::new()).unwrap();

        let notifier = group.get(&key("b")).unwrap().d().on_exited.clone().unwrap();
        let driver = {
            let group = Arc::clone(&group);
            std::thread::spawn(move || {
                assert!(notifier.notify());
                group.len()
            })
        };

        assert_eq!(driver.join().unwrap(), 1);
        assert_eq!(keys_of(&group), vec!["a"]);
    }
}
