//! Inline rendering of channel values for log embedding.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use super::interface::Collect;
use super::slot_id::SlotId;
use super::store::SlotStore;

/// Lazily renders one channel through [`Collect::print_data`] when
/// formatted, so a log line can embed a live value without querying and
/// formatting it separately:
///
/// ```
/// use evalboard::{Collect, PrintChannel, SlotId, SlotStore};
///
/// let store = SlotStore::new();
/// let frame = SlotId::random();
/// store.push_data(frame, "score", 3.14f64);
///
/// let line = format!("score={}", PrintChannel::<f64>::new(&store, frame, "score"));
/// assert_eq!(line, "score=3.14");
/// ```
///
/// Absent or differently typed channels render as the sentinel, so the
/// adapter is safe to drop into log statements unconditionally.
pub struct PrintChannel<'a, T, C: Collect = SlotStore> {
    collector: &'a C,
    slot_id: SlotId,
    channel: &'a str,
    _data: PhantomData<fn() -> T>,
}

impl<'a, T, C: Collect> PrintChannel<'a, T, C> {
    /// Render `channel` of `slot_id`.
    pub fn new(collector: &'a C, slot_id: SlotId, channel: &'a str) -> Self {
        Self {
            collector,
            slot_id,
            channel,
            _data: PhantomData,
        }
    }

    /// Render `channel` of the common slot.
    pub fn common(collector: &'a C, channel: &'a str) -> Self {
        Self::new(collector, SlotId::common(), channel)
    }
}

impl<T, C> fmt::Display for PrintChannel<'_, T, C>
where
    T: Any + Send + Sync + fmt::Display,
    C: Collect,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.collector.print_data::<T>(self.slot_id, self.channel))
    }
}
