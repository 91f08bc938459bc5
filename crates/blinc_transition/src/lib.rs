//! Blinc Transition Groups
//!
//! Keyed enter/exit reconciliation for lists of animated children. When a
//! parent re-renders with a different child list, removed children must stay
//! mounted until their exit animation has played. This crate answers one
//! question per render: which children must currently exist, in what order,
//! and which transition each of them is in.
//!
//! - **Child mappings**: ordered key → child associations built from input lists
//! - **Ordered merge**: union of the previous and next children that keeps
//!   removed children in place
//! - **Transition groups**: per-key entering/exiting/unchanged classification
//!   and removal once an exit completes
//!
//! Animation timing is left to each child's own driver, which reads the
//! [`TransitionDirectives`] the group writes and fires the embedded
//! [`ExitNotifier`] when its exit finishes.
//!
//! # Example
//!
//! ```rust
//! use blinc_transition::{
//!     ChildKey, Keyed, TransitionChild, TransitionDirectives, TransitionGroup,
//!     TransitionGroupConfig, TransitionKind,
//! };
//!
//! #[derive(Clone)]
//! struct Row {
//!     id: u32,
//!     transition: TransitionDirectives<u32>,
//! }
//!
//! impl Keyed for Row {
//!     type Key = u32;
//!     fn key(&self) -> Option<&u32> {
//!         Some(&self.id)
//!     }
//! }
//!
//! impl TransitionChild for Row {
//!     fn directives(&self) -> Option<&TransitionDirectives<u32>> {
//!         Some(&self.transition)
//!     }
//!     fn directives_mut(&mut self) -> Option<&mut TransitionDirectives<u32>> {
//!         Some(&mut self.transition)
//!     }
//! }
//!
//! let rows = |ids: &[u32]| -> Vec<Row> {
//!     ids.iter()
//!         .map(|&id| Row { id, transition: TransitionDirectives::default() })
//!         .collect()
//! };
//!
//! let group = TransitionGroup::new(rows(&[1, 2, 3]), TransitionGroupConfig::new()).unwrap();
//!
//! // Row 2 is removed from the input but kept while it animates out
//! let summary = group.update(rows(&[1, 3]), TransitionGroupConfig::new()).unwrap();
//! assert_eq!(summary.kind_of(&ChildKey::Explicit(2)), Some(TransitionKind::Exiting));
//! assert_eq!(group.len(), 3);
//!
//! // Its driver reports the exit animation finished
//! let row = group.get(&ChildKey::Explicit(2)).unwrap();
//! row.transition.on_exited.as_ref().unwrap().notify();
//! assert_eq!(group.len(), 2);
//! ```

pub mod child;
pub mod config;
pub mod error;
pub mod group;
pub mod key;
pub mod mapping;
pub mod merge;
pub mod notifier;

pub use child::{DirectivePatch, Keyed, TransitionChild, TransitionDirectives};
pub use config::TransitionGroupConfig;
pub use error::{Result, TransitionError};
pub use group::{TransitionGroup, TransitionKind, UpdateSummary};
pub use key::{ChildKey, KeyBounds};
pub use mapping::{child_mapping, child_mapping_with, ChildMapping};
pub use merge::merge_child_mappings;
pub use notifier::ExitNotifier;
