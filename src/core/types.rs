//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for hexagons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexagonId(pub Uuid);

impl HexagonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for labels and log lines.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for HexagonId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for territories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub Uuid);

impl TerritoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, for labels and log lines.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TerritoryId {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the six edges of a hexagon, numbered 0-5 clockwise.
///
/// Numbering is fixed to the tile. Rotating a hexagon changes which
/// compass direction a side faces, never the side numbers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexSide(u8);

impl HexSide {
    pub const ALL: [HexSide; 6] = [
        HexSide(0),
        HexSide(1),
        HexSide(2),
        HexSide(3),
        HexSide(4),
        HexSide(5),
    ];

    /// Wraps any index into 0..=5.
    pub fn new(index: u8) -> Self {
        Self(index % 6)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Next side going clockwise around the hexagon.
    pub fn clockwise(self) -> Self {
        Self((self.0 + 1) % 6)
    }

    /// Next side going counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        Self((self.0 + 5) % 6)
    }

    /// The side directly across the hexagon.
    pub fn opposite(self) -> Self {
        Self((self.0 + 3) % 6)
    }
}

impl std::fmt::Display for HexSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compass direction independent of a hexagon's physical rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    North,
    Northeast,
    Southeast,
    South,
    Southwest,
    Northwest,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::Northeast,
        HexDirection::Southeast,
        HexDirection::South,
        HexDirection::Southwest,
        HexDirection::Northwest,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_side_wraps_mod_six() {
        assert_eq!(HexSide::new(6), HexSide::new(0));
        assert_eq!(HexSide::new(11), HexSide::new(5));
    }

    #[test]
    fn test_hex_side_steps() {
        let side = HexSide::new(5);
        assert_eq!(side.clockwise(), HexSide::new(0));
        assert_eq!(side.counter_clockwise(), HexSide::new(4));
        assert_eq!(HexSide::new(0).counter_clockwise(), HexSide::new(5));
    }

    #[test]
    fn test_hex_side_opposite() {
        assert_eq!(HexSide::new(0).opposite(), HexSide::new(3));
        assert_eq!(HexSide::new(4).opposite(), HexSide::new(1));
    }

    #[test]
    fn test_direction_indexes_cover_zero_to_five() {
        let indexes: Vec<u8> = HexDirection::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_territory_id_hash() {
        use std::collections::HashMap;
        let id = TerritoryId::new();
        let mut map: HashMap<TerritoryId, &str> = HashMap::new();
        map.insert(id, "plains");
        assert_eq!(map.get(&id), Some(&"plains"));
    }
}
