//! Hexagon tiles and rotation arithmetic.

use serde::{Deserialize, Serialize};

use crate::core::types::{HexDirection, HexSide, HexagonId, TerritoryId};
use crate::hex::territory::Territory;

/// A hexagonal tile subdivided into territories.
///
/// Rotation is counted in sixths of a turn; 0 means side 0 faces north.
/// Everything downstream of placement works on concrete sides, so the
/// only point where a compass direction turns into a side number is
/// [`Hexagon::side_facing`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hexagon {
    pub id: HexagonId,
    pub territories: Vec<Territory>,
    /// Symmetric adjacency between this hexagon's own territories.
    pub internal_edges: Vec<(TerritoryId, TerritoryId)>,
    /// Current rotation in 0..=5.
    pub rotation: u8,
}

impl Hexagon {
    pub fn new(territories: Vec<Territory>, internal_edges: Vec<(TerritoryId, TerritoryId)>) -> Self {
        Self {
            id: HexagonId::new(),
            territories,
            internal_edges,
            rotation: 0,
        }
    }

    /// The concrete side currently facing `direction`.
    pub fn side_facing(&self, direction: HexDirection) -> HexSide {
        HexSide::new(direction.index() + self.rotation % 6)
    }

    /// Territories that reach the given side.
    pub fn territories_on_side(&self, side: HexSide) -> Vec<&Territory> {
        self.territories.iter().filter(|t| t.touches(side)).collect()
    }

    /// True when every side 0..=5 is reached by exactly one territory.
    pub fn sides_partitioned(&self) -> bool {
        HexSide::ALL
            .iter()
            .all(|&side| self.territories_on_side(side).len() == 1)
    }
}
