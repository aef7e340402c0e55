//! Strongly-typed product identifier and the id-generation capability.

use serde::{Deserialize, Serialize};

/// Identifier of a product record.
///
/// Plain integer ids: assigned once at creation from an [`IdGenerator`],
/// immutable afterwards, unique across the catalog at all times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Capability that hands out fresh product ids.
///
/// Implementations must return a value not present in `in_use`. Prefer
/// [`SequentialIdGen`] in tests for determinism.
pub trait IdGenerator {
    fn next_id(&mut self, in_use: &[ProductId]) -> ProductId;
}

/// Wall-clock id source: millisecond timestamps, bumped past collisions.
///
/// Ids issued by one instance are strictly increasing, so two calls landing
/// on the same millisecond still produce distinct ids.
#[derive(Debug, Default)]
pub struct TimestampIdGen {
    last: i64,
}

impl TimestampIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIdGen {
    fn next_id(&mut self, in_use: &[ProductId]) -> ProductId {
        let mut candidate = chrono::Utc::now().timestamp_millis().max(self.last + 1);
        while in_use.contains(&ProductId(candidate)) {
            candidate += 1;
        }
        self.last = candidate;
        ProductId(candidate)
    }
}

/// Deterministic id source for tests/dev: counts up, skipping held ids.
#[derive(Debug, Default)]
pub struct SequentialIdGen {
    last: i64,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// First issued id will be `first` (unless already held).
    pub fn starting_at(first: i64) -> Self {
        Self { last: first - 1 }
    }
}

impl IdGenerator for SequentialIdGen {
    fn next_id(&mut self, in_use: &[ProductId]) -> ProductId {
        let mut candidate = self.last + 1;
        while in_use.contains(&ProductId(candidate)) {
            candidate += 1;
        }
        self.last = candidate;
        ProductId(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIdGen::starting_at(10);
        assert_eq!(ids.next_id(&[]), ProductId::new(10));
        assert_eq!(ids.next_id(&[]), ProductId::new(11));
    }

    #[test]
    fn sequential_ids_skip_held_ids() {
        let mut ids = SequentialIdGen::new();
        let held = [ProductId::new(1), ProductId::new(2)];
        assert_eq!(ids.next_id(&held), ProductId::new(3));
    }

    #[test]
    fn timestamp_ids_are_strictly_increasing() {
        let mut ids = TimestampIdGen::new();
        let a = ids.next_id(&[]);
        let b = ids.next_id(&[]);
        let c = ids.next_id(&[a, b]);
        assert!(a < b);
        assert!(b < c);
    }
}
