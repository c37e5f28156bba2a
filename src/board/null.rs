//! The no-op collector variant.

use std::any::Any;
use std::collections::HashSet;
use std::sync::Arc;

use super::interface::Collect;
use super::slot_id::SlotId;

/// A collector with the full [`Collect`] surface and no behavior.
///
/// Pushes are discarded, queries report absent, and rendering yields the
/// usual sentinel. Swapping this in for a
/// [`SlotStore`](super::store::SlotStore) compiles collection out of a
/// pipeline without touching call sites; it holds no state and takes no
/// locks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCollector;

impl NullCollector {
    /// Create a null collector.
    pub fn new() -> Self {
        Self
    }
}

impl Collect for NullCollector {
    fn push_data<T: Any + Send + Sync>(&self, _slot_id: SlotId, _channel: &str, _value: T) {}

    fn get_data<T: Any + Send + Sync>(&self, _slot_id: SlotId, _channel: &str) -> Option<Arc<T>> {
        None
    }

    fn has_channel(&self, _slot_id: SlotId, _channel: &str) -> bool {
        false
    }

    fn has_slot(&self, _slot_id: SlotId) -> bool {
        false
    }

    fn remove_slot(&self, _slot_id: SlotId) -> bool {
        false
    }

    fn slot_ids(&self) -> HashSet<SlotId> {
        HashSet::new()
    }

    fn reset(&self) {}
}
