//! Territories - the sub-regions a hexagon is divided into.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::types::{HexSide, TerritoryId};

/// A sub-region of a hexagon occupying one or more of its sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    /// Sides of the owning hexagon this territory reaches.
    pub sides: BTreeSet<HexSide>,
}

impl Territory {
    /// Build a fresh territory touching the given sides.
    pub fn touching<I>(sides: I) -> Self
    where
        I: IntoIterator<Item = HexSide>,
    {
        Self {
            id: TerritoryId::new(),
            sides: sides.into_iter().collect(),
        }
    }

    pub fn touches(&self, side: HexSide) -> bool {
        self.sides.contains(&side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_collapses_duplicates() {
        let territory = Territory::touching([HexSide::new(2), HexSide::new(2), HexSide::new(3)]);
        assert_eq!(territory.sides.len(), 2);
        assert!(territory.touches(HexSide::new(2)));
        assert!(territory.touches(HexSide::new(3)));
        assert!(!territory.touches(HexSide::new(0)));
    }

    #[test]
    fn test_fresh_ids_per_territory() {
        let a = Territory::touching([HexSide::new(0)]);
        let b = Territory::touching([HexSide::new(0)]);
        assert_ne!(a.id, b.id);
    }
}
