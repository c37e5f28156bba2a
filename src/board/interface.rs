//! The operation set shared by the collecting and null variants.

use std::any::Any;
use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;

use super::slot_id::SlotId;

/// Rendering result when a channel is absent or stored as another type.
pub const CHANNEL_NOT_AVAILABLE: &str = "Channel not available.";

/// Operation set of a slot/channel collector.
///
/// Producers push typed values addressed by `(slot, channel)`; consumers
/// probe the same coordinates with an expected type. Absence and type
/// mismatch are ordinary outcomes reported as `None`/`false`, never errors,
/// because probing for optional debug data is the normal usage pattern. The
/// safe read deliberately does not distinguish "never written" from
/// "written as a different type" — both are ignorable the same way.
///
/// Implemented by [`SlotStore`](super::store::SlotStore) (collecting) and
/// [`NullCollector`](super::null::NullCollector) (every operation a no-op).
/// Call sites stay generic over `Collect`, so which one runs is a pure
/// composition decision.
pub trait Collect {
    /// Store `value` under `(slot_id, channel)`, creating the slot on the
    /// first push to it. Replaces any previous value and its type.
    fn push_data<T: Any + Send + Sync>(&self, slot_id: SlotId, channel: &str, value: T);

    /// Fetch the value under `(slot_id, channel)` as type `T`.
    ///
    /// `None` when the slot or channel is absent or the stored type
    /// differs. Never creates a slot.
    fn get_data<T: Any + Send + Sync>(&self, slot_id: SlotId, channel: &str) -> Option<Arc<T>>;

    /// Whether `(slot_id, channel)` currently holds a value of any type.
    fn has_channel(&self, slot_id: SlotId, channel: &str) -> bool;

    /// Whether anything has been pushed to `slot_id` since it was last
    /// removed.
    fn has_slot(&self, slot_id: SlotId) -> bool;

    /// Remove the slot and all its channels. Returns whether a slot was
    /// present; removing an absent slot is a no-op.
    fn remove_slot(&self, slot_id: SlotId) -> bool;

    /// Point-in-time snapshot of the live slot ids, excluding the common
    /// slot. Mutations after the snapshot is taken do not show up in it.
    fn slot_ids(&self) -> HashSet<SlotId>;

    /// Drop every slot and channel.
    fn reset(&self);

    // --- Rendering ---

    /// Render the value under `(slot_id, channel)` via its `Display` impl,
    /// or [`CHANNEL_NOT_AVAILABLE`] when absent or stored as another type.
    ///
    /// The `Display` bound is the capability gate: a stored type without a
    /// string conversion is reachable through [`Collect::get_data`] but not
    /// through this path.
    fn print_data<T: Any + Send + Sync + Display>(&self, slot_id: SlotId, channel: &str) -> String {
        match self.get_data::<T>(slot_id, channel) {
            Some(value) => value.to_string(),
            None => CHANNEL_NOT_AVAILABLE.to_string(),
        }
    }

    // --- Common-slot wrappers ---

    /// Store `value` under `channel` in the common slot.
    fn push_common_data<T: Any + Send + Sync>(&self, channel: &str, value: T) {
        self.push_data(SlotId::common(), channel, value);
    }

    /// Fetch `channel` from the common slot as type `T`.
    fn get_common_data<T: Any + Send + Sync>(&self, channel: &str) -> Option<Arc<T>> {
        self.get_data(SlotId::common(), channel)
    }

    /// Whether the common slot currently holds `channel`.
    fn has_common_channel(&self, channel: &str) -> bool {
        self.has_channel(SlotId::common(), channel)
    }

    /// Render `channel` of the common slot.
    fn print_common_data<T: Any + Send + Sync + Display>(&self, channel: &str) -> String {
        self.print_data::<T>(SlotId::common(), channel)
    }
}
