//! Type-erased storage for a single channel value.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// One named value within a slot, stored with its concrete type erased.
///
/// The `TypeId` is captured at store time and compared on every read, so a
/// channel written as one type and queried as another yields nothing rather
/// than reinterpreted bytes. The value lives behind an `Arc`: a reader that
/// downcasts a channel keeps its value alive even if the channel is
/// overwritten or the owning slot removed while the reader still holds it.
pub struct Channel {
    value: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
    stored_at: i64,
}

impl Channel {
    /// Store `value`, capturing its runtime type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
            stored_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Check if the stored value has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Recover the stored value as type `T`.
    ///
    /// `None` when the stored type differs.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.value).downcast::<T>().ok()
    }

    /// Name of the stored concrete type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Epoch milliseconds at which the value was stored.
    pub fn stored_at(&self) -> i64 {
        self.stored_at
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("type_name", &self.type_name)
            .field("stored_at", &self.stored_at)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
