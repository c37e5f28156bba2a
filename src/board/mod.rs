//! Slot/channel store for evaluation data.
//!
//! Producers in a sensing pipeline push arbitrarily typed debug values
//! keyed by `(slot, channel)` — a slot is usually one frame, a channel one
//! named quantity of it. Consumers (a visualizer, a diagnostic report)
//! later probe the same coordinates with an expected type and free slots
//! they are done with.
//!
//! A storage layout could look like this:
//!
//! ```text
//! SlotStore --> frame id 0 --> Channel ("nframe")
//!                          --> Channel ("outlier_tracks")
//!           --> frame id 1 --> Channel ("nframe")
//!                          --> Channel ("reprojection_error")
//!           --> common     --> Channel ("sequence_name")
//! ```
//!
//! # Safe reads
//!
//! Stored values are type-erased; every read states the expected type and
//! fails soft (`None`) on absence or mismatch. Nothing in the store can be
//! made to panic by probing with the wrong coordinates or the wrong type.
//!
//! # Disabling collection
//!
//! [`NullCollector`] implements the same [`Collect`] surface with every
//! operation a no-op. [`CollectorHandle::from_env`] picks the variant once
//! at composition time; call sites stay unchanged either way.

pub mod channel;
pub mod config;
pub mod group;
pub mod interface;
pub mod null;
pub mod print;
pub mod slot_id;
pub mod store;
pub mod sweep;

pub use channel::Channel;
pub use config::{CollectorHandle, EVALBOARD_DISABLED};
pub use group::ChannelGroup;
pub use interface::{Collect, CHANNEL_NOT_AVAILABLE};
pub use null::NullCollector;
pub use print::PrintChannel;
pub use slot_id::{ParseSlotIdError, SlotId};
pub use store::SlotStore;
pub use sweep::sweep_slots;
