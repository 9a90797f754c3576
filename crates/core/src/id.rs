//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a catalogue item.
///
/// Assigned by the item store from a monotonically increasing counter and
/// never reused, so ordering by id is ordering by creation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    ///
    /// Fails once the counter is at `u64::MAX`.
    pub fn next(&self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::conflict("item id counter exhausted"))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments_and_displays() {
        let id = ItemId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.next().unwrap(), ItemId::new(43));
    }

    #[test]
    fn next_fails_at_counter_limit() {
        let err = ItemId::new(u64::MAX).next().unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
