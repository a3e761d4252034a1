//! Record identifiers.
//!
//! The public contract addresses records by zero-based position. The
//! registry never removes or reorders slots, so the id handed out at
//! creation always equals the slot's position; [`ItemId`] keeps that
//! mapping in one place instead of indexing with raw request input.

use std::fmt;

use serde::Serialize;

/// Identifier assigned to a record when it is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Interpret a raw path id. Negative values never name a record.
    pub fn from_raw(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().map(Self)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
