//! Order-preserving merge of two child mappings.
//!
//! When a list re-renders, children that left the new list must stay in
//! place until their exit transition finishes. [`merge_child_mappings`]
//! produces the union of the previous and next mappings in one
//! deterministic order:
//!
//! - keys present in both keep their relative order
//! - keys that left `next` stay directly before the `next` key they
//!   preceded in `prev`
//! - keys that left `next` after the last surviving key go at the end
//!
//! ```text
//! prev:   A B C D
//! next:   A C E
//! merged: A B C E D   (B stays before C, D had no survivor after it)
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::key::{ChildKey, KeyBounds};
use crate::mapping::ChildMapping;

/// Run of leaving keys re-inserted before one surviving key
type PendingRun<K> = SmallVec<[ChildKey<K>; 4]>;

/// Merge `prev` and `next` into one mapping.
///
/// A key present in `next` takes its child from `next`; a key only in
/// `prev` keeps its previous child. Neither input is modified.
pub fn merge_child_mappings<K, P>(
    prev: &ChildMapping<K, P>,
    next: &ChildMapping<K, P>,
) -> ChildMapping<K, P>
where
    K: KeyBounds,
    P: Clone,
{
    let child_for = |key: &ChildKey<K>| -> Option<P> {
        next.get(key).or_else(|| prev.get(key)).cloned()
    };

    // For each key of `next` that also appears in `prev`, the run of
    // `prev`-only keys that came right before it.
    let mut runs_before: FxHashMap<&ChildKey<K>, PendingRun<K>> = FxHashMap::default();
    let mut pending: PendingRun<K> = SmallVec::new();

    for key in prev.keys() {
        if next.contains_key(key) {
            if !pending.is_empty() {
                runs_before.insert(key, std::mem::take(&mut pending));
            }
        } else {
            pending.push(key.clone());
        }
    }

    let mut merged = ChildMapping::with_capacity(prev.len() + next.len());

    for next_key in next.keys() {
        if let Some(run) = runs_before.remove(next_key) {
            for key in run {
                if let Some(child) = child_for(&key) {
                    push_unique(&mut merged, key, child);
                }
            }
        }
        if let Some(child) = child_for(next_key) {
            push_unique(&mut merged, next_key.clone(), child);
        }
    }

    // Leaving keys with no surviving key after them
    for key in pending {
        if let Some(child) = child_for(&key) {
            push_unique(&mut merged, key, child);
        }
    }

    merged
}

/// Insert into a mapping whose inputs already guarantee unique keys.
fn push_unique<K: KeyBounds, P>(merged: &mut ChildMapping<K, P>, key: ChildKey<K>, child: P) {
    if merged.insert(key, child).is_err() {
        tracing::trace!("merge skipped a key that was already placed");
    }
}
