//! Slot identifiers.
//!
//! A slot is a logical bucket of evaluation data, typically one per frame
//! of a sensing pipeline. Ids are opaque 128-bit values. One reserved id,
//! generated once per process, addresses the "common" slot holding data
//! not tied to any particular frame.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The reserved common-slot id, drawn once from the same id space as
/// caller-chosen ids.
static COMMON_SLOT_ID: Lazy<SlotId> = Lazy::new(SlotId::random);

/// Opaque identifier of a slot.
///
/// Hashable and totally ordered so it can key maps and sets. Typically one
/// id is minted per pipeline frame and carried along with the frame, so
/// producers and consumers address the same bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SlotId(Uuid);

impl SlotId {
    /// Mint a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an id from a raw 128-bit value.
    ///
    /// Useful for deterministic ids in tests and replay tooling.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// The reserved id of the common slot.
    ///
    /// Generated on first use and stable for the rest of the process, so
    /// it cannot collide with ids minted through [`SlotId::random`].
    pub fn common() -> Self {
        *COMMON_SLOT_ID
    }

    /// Whether this id addresses the common slot.
    pub fn is_common(&self) -> bool {
        *self == Self::common()
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Error returned when parsing a [`SlotId`] from a string fails.
#[derive(Debug, Error)]
#[error("invalid slot id '{input}': {source}")]
pub struct ParseSlotIdError {
    /// The rejected input.
    pub input: String,
    source: uuid::Error,
}

impl FromStr for SlotId {
    type Err = ParseSlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|source| ParseSlotIdError {
                input: s.to_string(),
                source,
            })
    }
}
