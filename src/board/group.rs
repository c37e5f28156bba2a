//! The channels of a single slot.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::channel::Channel;

/// Named channels belonging to one slot, keyed by channel name.
///
/// Each group carries its own lock, so a handle to one group stays safe to
/// use while the owning store concurrently mutates other slots. Writes to
/// the same slot serialize here; writes to different slots never meet.
#[derive(Debug, Default)]
pub struct ChannelGroup {
    channels: Mutex<HashMap<String, Channel>>,
}

impl ChannelGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value and its
    /// runtime type in one step.
    pub fn set<T: Any + Send + Sync>(&self, name: impl Into<String>, value: T) {
        self.channels.lock().insert(name.into(), Channel::new(value));
    }

    /// Fetch the value under `name` as type `T`.
    ///
    /// `None` when the channel does not exist or holds a different type.
    /// The returned `Arc` stays readable across later overwrites.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.channels.lock().get(name).and_then(|c| c.downcast::<T>())
    }

    /// Existence check, independent of the stored type.
    pub fn has(&self, name: &str) -> bool {
        self.channels.lock().contains_key(name)
    }

    /// Names of all channels currently present, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.channels.lock().keys().cloned().collect()
    }

    /// Number of channels in the group.
    pub fn len(&self) -> usize {
        self.channels.lock().len()
    }

    /// Whether the group holds no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_set_get_roundtrip() {
        let group = ChannelGroup::new();
        group.set("count", 42u32);
        assert_eq!(*group.get::<u32>("count").unwrap(), 42);
    }

    #[test]
    fn test_get_wrong_type_is_none() {
        let group = ChannelGroup::new();
        group.set("count", 42u32);
        assert!(group.get::<f64>("count").is_none());
        // Presence is still reported regardless of type.
        assert!(group.has("count"));
    }

    #[test]
    fn test_overwrite_replaces_value_and_type() {
        let group = ChannelGroup::new();
        group.set("x", 1u32);
        group.set("x", 2u32);
        assert_eq!(*group.get::<u32>("x").unwrap(), 2);

        group.set("x", String::from("reused"));
        assert!(group.get::<u32>("x").is_none());
        assert_eq!(*group.get::<String>("x").unwrap(), "reused");
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_reader_keeps_value_across_overwrite() {
        let group = ChannelGroup::new();
        group.set("x", String::from("first"));
        let first = group.get::<String>("x").unwrap();
        group.set("x", String::from("second"));
        assert_eq!(*first, "first");
        assert_eq!(*group.get::<String>("x").unwrap(), "second");
    }

    #[test]
    fn test_names_and_len() {
        let group = ChannelGroup::new();
        assert!(group.is_empty());
        group.set("a", 1u8);
        group.set("b", 2u8);

        let mut names = group.names();
        names.sort();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_concurrent_writers() {
        let group = Arc::new(ChannelGroup::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let group = Arc::clone(&group);
                thread::spawn(move || {
                    for j in 0..100 {
                        group.set(format!("channel_{}", i), i * 100 + j);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(group.len(), 8);
        for i in 0..8i32 {
            let value = group.get::<i32>(&format!("channel_{}", i)).unwrap();
            assert_eq!(*value, i * 100 + 99);
        }
    }
}
