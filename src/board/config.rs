//! Composition-time selection between the collecting and null variants.

use std::any::Any;
use std::collections::HashSet;
use std::env;
use std::sync::Arc;

use super::interface::Collect;
use super::null::NullCollector;
use super::slot_id::SlotId;
use super::store::SlotStore;

/// Environment variable that disables collection (`"true"` or `"1"`).
pub const EVALBOARD_DISABLED: &str = "EVALBOARD_DISABLED";

/// A collector variant chosen at composition time.
///
/// Wraps either a live [`SlotStore`] or a [`NullCollector`] behind one
/// concrete type, for hosts that want the choice made from the environment
/// rather than going generic over [`Collect`].
#[derive(Debug, Clone)]
pub enum CollectorHandle {
    /// Collection enabled; data lands in the wrapped store.
    Collecting(Arc<SlotStore>),
    /// Collection disabled; every operation is a no-op.
    Disabled(NullCollector),
}

impl CollectorHandle {
    /// A collecting handle backed by a fresh store.
    pub fn collecting() -> Self {
        Self::Collecting(Arc::new(SlotStore::new()))
    }

    /// A disabled handle.
    pub fn disabled() -> Self {
        Self::Disabled(NullCollector::new())
    }

    /// Choose the variant from [`EVALBOARD_DISABLED`].
    ///
    /// Unset, or set to anything other than `"true"`/`"1"`, keeps
    /// collection enabled with a fresh store.
    pub fn from_env() -> Self {
        if is_disabled_by_env() {
            log::info!("evaluation data collection disabled via {}", EVALBOARD_DISABLED);
            Self::disabled()
        } else {
            Self::collecting()
        }
    }

    /// Whether this handle actually records data.
    pub fn is_collecting(&self) -> bool {
        matches!(self, Self::Collecting(_))
    }
}

fn is_disabled_by_env() -> bool {
    let value = env::var(EVALBOARD_DISABLED)
        .unwrap_or_default()
        .to_lowercase();
    value == "true" || value == "1"
}

impl Collect for CollectorHandle {
    fn push_data<T: Any + Send + Sync>(&self, slot_id: SlotId, channel: &str, value: T) {
        match self {
            Self::Collecting(store) => store.push_data(slot_id, channel, value),
            Self::Disabled(null) => null.push_data(slot_id, channel, value),
        }
    }

    fn get_data<T: Any + Send + Sync>(&self, slot_id: SlotId, channel: &str) -> Option<Arc<T>> {
        match self {
            Self::Collecting(store) => store.get_data(slot_id, channel),
            Self::Disabled(null) => null.get_data(slot_id, channel),
        }
    }

    fn has_channel(&self, slot_id: SlotId, channel: &str) -> bool {
        match self {
            Self::Collecting(store) => store.has_channel(slot_id, channel),
            Self::Disabled(null) => null.has_channel(slot_id, channel),
        }
    }

    fn has_slot(&self, slot_id: SlotId) -> bool {
        match self {
            Self::Collecting(store) => store.has_slot(slot_id),
            Self::Disabled(null) => null.has_slot(slot_id),
        }
    }

    fn remove_slot(&self, slot_id: SlotId) -> bool {
        match self {
            Self::Collecting(store) => store.remove_slot(slot_id),
            Self::Disabled(null) => null.remove_slot(slot_id),
        }
    }

    fn slot_ids(&self) -> HashSet<SlotId> {
        match self {
            Self::Collecting(store) => store.slot_ids(),
            Self::Disabled(null) => null.slot_ids(),
        }
    }

    fn reset(&self) {
        match self {
            Self::Collecting(store) => store.reset(),
            Self::Disabled(null) => null.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_handle_records() {
        let handle = CollectorHandle::collecting();
        let slot = SlotId::random();

        assert!(handle.is_collecting());
        handle.push_data(slot, "count", 42u32);
        assert_eq!(*handle.get_data::<u32>(slot, "count").unwrap(), 42);
        assert_eq!(handle.slot_ids().len(), 1);

        handle.reset();
        assert!(!handle.has_slot(slot));
    }

    #[test]
    fn test_disabled_handle_discards() {
        let handle = CollectorHandle::disabled();
        let slot = SlotId::random();

        assert!(!handle.is_collecting());
        handle.push_data(slot, "count", 42u32);
        assert!(handle.get_data::<u32>(slot, "count").is_none());
        assert!(!handle.has_slot(slot));
        assert!(handle.slot_ids().is_empty());
        assert!(!handle.remove_slot(slot));
    }

    #[test]
    fn test_clones_share_the_store() {
        let handle = CollectorHandle::collecting();
        let clone = handle.clone();
        let slot = SlotId::random();

        handle.push_data(slot, "count", 1u8);
        assert!(clone.has_slot(slot));
    }

    #[test]
    fn test_from_env() {
        env::set_var(EVALBOARD_DISABLED, "true");
        assert!(!CollectorHandle::from_env().is_collecting());

        env::set_var(EVALBOARD_DISABLED, "1");
        assert!(!CollectorHandle::from_env().is_collecting());

        env::set_var(EVALBOARD_DISABLED, "0");
        assert!(CollectorHandle::from_env().is_collecting());

        env::remove_var(EVALBOARD_DISABLED);
        assert!(CollectorHandle::from_env().is_collecting());
    }
}
