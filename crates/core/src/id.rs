//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a fruit record.
///
/// Sequential and 1-based: the n-th record created in an empty stock gets `n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitId(u64);

impl FruitId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Identifier for a record appended at zero-based position `len`.
    pub fn for_position(len: usize) -> Self {
        Self::new(len as u64 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for FruitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_maps_to_one_based_id() {
        assert_eq!(FruitId::for_position(0), FruitId::new(1));
        assert_eq!(FruitId::for_position(3).get(), 4);
    }

    #[test]
    fn displays_as_plain_number() {
        assert_eq!(FruitId::new(7).to_string(), "7");
    }
}
