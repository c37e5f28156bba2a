//! # evalboard
//!
//! Thread-safe collection of per-frame evaluation data for sensing
//! pipelines.
//!
//! Producers push typed debug values addressed by slot (usually a frame)
//! and channel (a name within it); consumers fetch them back type-checked,
//! render them into log lines, and sweep processed slots to bound memory.
//! Composed with the null variant, collection compiles down to no-ops
//! without changing call sites.

pub mod board;

pub use board::config::{CollectorHandle, EVALBOARD_DISABLED};
pub use board::interface::{Collect, CHANNEL_NOT_AVAILABLE};
pub use board::null::NullCollector;
pub use board::print::PrintChannel;
pub use board::slot_id::{ParseSlotIdError, SlotId};
pub use board::store::SlotStore;
pub use board::sweep::sweep_slots;

/// Library version.
pub const VERSION: &str = "0.4.0";
