//! Grid assembly - hexagons plus the connections gluing their sides.

pub mod ring;

use serde::{Deserialize, Serialize};

use crate::core::error::{AtlasError, Result};
use crate::core::types::{HexSide, HexagonId};
use crate::hex::hexagon::Hexagon;

/// A glued pair of hexagon sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideConnection {
    pub a: HexagonId,
    pub a_side: HexSide,
    pub b: HexagonId,
    pub b_side: HexSide,
}

impl SideConnection {
    /// True when this connection involves the given hexagon side, in
    /// either position.
    pub fn uses(&self, hexagon: HexagonId, side: HexSide) -> bool {
        (self.a == hexagon && self.a_side == side) || (self.b == hexagon && self.b_side == side)
    }
}

/// Owns every hexagon of a map and the connections between them.
///
/// Insertion order is creation order and is never reordered; hexagons are
/// never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HexagonGrid {
    pub hexagons: Vec<Hexagon>,
    pub connections: Vec<SideConnection>,
}

impl HexagonGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hexagon(&self, id: HexagonId) -> Option<&Hexagon> {
        self.hexagons.iter().find(|h| h.id == id)
    }

    /// Whether this hexagon side is already glued to another side.
    ///
    /// Linear scan over the connection list; fine at ring scale.
    pub fn is_side_occupied(&self, hexagon: HexagonId, side: HexSide) -> bool {
        self.connections.iter().any(|c| c.uses(hexagon, side))
    }

    /// Append a connection without occupancy checks.
    ///
    /// Needed to close cycles where both hexagons already sit in the
    /// grid; the caller upholds the one-connection-per-side invariant.
    pub fn connect(&mut self, a: HexagonId, a_side: HexSide, b: HexagonId, b_side: HexSide) {
        self.connections.push(SideConnection { a, a_side, b, b_side });
    }

    /// Add a hexagon, optionally gluing one of its sides to an existing
    /// hexagon.
    ///
    /// The hexagon is appended even when the requested connection cannot
    /// be made. Returns `Ok(false)` when either side is already occupied;
    /// in that case no connection is recorded and the grid keeps the gap.
    pub fn add_hexagon(
        &mut self,
        hexagon: Hexagon,
        connect_to: Option<HexagonId>,
        my_side: Option<HexSide>,
        their_side: Option<HexSide>,
    ) -> Result<bool> {
        let new_id = hexagon.id;
        self.hexagons.push(hexagon);

        let Some(target) = connect_to else {
            return Ok(true);
        };
        let (Some(my_side), Some(their_side)) = (my_side, their_side) else {
            return Err(AtlasError::IncompleteConnection(target));
        };

        if self.is_side_occupied(new_id, my_side) {
            tracing::warn!(
                "side {} of new hexagon {} is already occupied, leaving it unconnected",
                my_side,
                new_id.short()
            );
            return Ok(false);
        }
        if self.is_side_occupied(target, their_side) {
            tracing::warn!(
                "side {} of hexagon {} is already occupied, leaving the new hexagon unconnected",
                their_side,
                target.short()
            );
            return Ok(false);
        }

        self.connect(new_id, my_side, target, their_side);
        Ok(true)
    }
}
