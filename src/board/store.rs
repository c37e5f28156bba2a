//! The collecting slot store.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use super::group::ChannelGroup;
use super::interface::Collect;
use super::slot_id::SlotId;

static GLOBAL: OnceLock<Arc<SlotStore>> = OnceLock::new();

/// Thread-safe store of evaluation data, addressed two levels deep: slot id
/// to channel group, channel name to typed value.
///
/// The outer lock guards only the structure of the slot map; every group
/// synchronizes its own contents. Pushes to different slots contend only on
/// the brief map operation, pushes to the same slot serialize on that
/// group's lock. Groups are reference counted, so a handle obtained from
/// the map stays valid even if the entry is removed concurrently — late
/// writes land in the orphaned group and are dropped with it.
///
/// There is no automatic eviction. Consumers bound memory by sweeping
/// [`slot_ids`](Collect::slot_ids) and removing slots they have processed
/// (see [`sweep_slots`](super::sweep::sweep_slots)).
#[derive(Debug, Default)]
pub struct SlotStore {
    groups: RwLock<HashMap<SlotId, Arc<ChannelGroup>>>,
}

impl SlotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared store, created on first access.
    ///
    /// Prefer passing a store (or any [`Collect`]) handle explicitly; the
    /// global exists for instrumentation points that cannot thread one
    /// through. Tests using it should call [`reset`](Collect::reset) for
    /// isolation.
    pub fn global() -> Arc<SlotStore> {
        GLOBAL.get_or_init(|| Arc::new(SlotStore::new())).clone()
    }

    /// Number of live slots, the common slot included once present.
    pub fn len(&self) -> usize {
        self.groups.read().len()
    }

    /// Whether no slot holds data.
    pub fn is_empty(&self) -> bool {
        self.groups.read().is_empty()
    }

    /// Channel names currently present under `slot_id`.
    pub fn channel_names(&self, slot_id: SlotId) -> Vec<String> {
        self.group(slot_id).map(|g| g.names()).unwrap_or_default()
    }

    fn group(&self, slot_id: SlotId) -> Option<Arc<ChannelGroup>> {
        self.groups.read().get(&slot_id).cloned()
    }

    fn group_or_create(&self, slot_id: SlotId) -> Arc<ChannelGroup> {
        if let Some(group) = self.group(slot_id) {
            return group;
        }
        let mut groups = self.groups.write();
        Arc::clone(groups.entry(slot_id).or_insert_with(|| {
            log::debug!("created slot {}", slot_id);
            Arc::new(ChannelGroup::new())
        }))
    }
}

impl Collect for SlotStore {
    fn push_data<T: Any + Send + Sync>(&self, slot_id: SlotId, channel: &str, value: T) {
        // The structural lock is released before the group mutation; the
        // group's own lock serializes same-slot writers.
        self.group_or_create(slot_id).set(channel, value);
    }

    fn get_data<T: Any + Send + Sync>(&self, slot_id: SlotId, channel: &str) -> Option<Arc<T>> {
        self.group(slot_id).and_then(|group| group.get::<T>(channel))
    }

    fn has_channel(&self, slot_id: SlotId, channel: &str) -> bool {
        self.group(slot_id).is_some_and(|group| group.has(channel))
    }

    fn has_slot(&self, slot_id: SlotId) -> bool {
        self.groups.read().contains_key(&slot_id)
    }

    fn remove_slot(&self, slot_id: SlotId) -> bool {
        let removed = self.groups.write().remove(&slot_id).is_some();
        if removed {
            log::debug!("removed slot {}", slot_id);
        }
        removed
    }

    fn slot_ids(&self) -> HashSet<SlotId> {
        self.groups
            .read()
            .keys()
            .filter(|id| !id.is_common())
            .copied()
            .collect()
    }

    fn reset(&self) {
        self.groups.write().clear();
        log::debug!("store reset");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
