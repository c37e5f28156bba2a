//! Consumer-side sweep over buffered slots.

use super::interface::Collect;
use super::slot_id::SlotId;

/// Walk a snapshot of the live slots and free the processed ones.
///
/// `process` is called once per slot id in the snapshot; returning `true`
/// marks the slot processed and removes it. Returns the number of slots
/// removed. Slots pushed after the snapshot was taken are left for the next
/// sweep, and the common slot is never offered.
///
/// This is the bounded-memory loop of a consumer: the buffer grows with
/// pushes and shrinks with each sweep.
///
/// ```
/// use evalboard::{sweep_slots, Collect, SlotId, SlotStore};
///
/// let store = SlotStore::new();
/// let frame = SlotId::random();
/// store.push_data(frame, "count", 42u32);
///
/// let removed = sweep_slots(&store, |slot_id| {
///     store.get_data::<u32>(slot_id, "count").is_some()
/// });
/// assert_eq!(removed, 1);
/// assert!(!store.has_slot(frame));
/// ```
pub fn sweep_slots<C, F>(collector: &C, mut process: F) -> usize
where
    C: Collect,
    F: FnMut(SlotId) -> bool,
{
    let snapshot = collector.slot_ids();
    let total = snapshot.len();
    let mut removed = 0;
    for slot_id in snapshot {
        if process(slot_id) && collector.remove_slot(slot_id) {
            removed += 1;
        }
    }
    if removed > 0 {
        log::debug!("sweep removed {} of {} slots", removed, total);
    }
    removed
}
