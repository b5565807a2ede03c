//! Ring-of-six map construction.
//!
//! Builds the standard layout: six hexagons chained into a ring, one
//! center hexagon spoked to all of them.

use rand::Rng;

use crate::core::error::Result;
use crate::core::types::{HexDirection, HexSide};
use crate::grid::HexagonGrid;
use crate::hex::archetypes::{Archetype, ArchetypeFilter};

/// What to place in the middle of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterArchetype {
    Single,
    Diamond,
    Triple,
    Five,
    Random,
}

impl CenterArchetype {
    fn resolve<R: Rng>(self, rng: &mut R) -> Archetype {
        match self {
            Self::Single => Archetype::Single,
            Self::Diamond => Archetype::Diamond,
            Self::Triple => Archetype::Triple,
            Self::Five => Archetype::Five,
            Self::Random => ArchetypeFilter::All.choose(rng),
        }
    }
}

/// Direction each new ring hexagon presents to its predecessor, paired
/// with the direction the predecessor presents back. Fixed by the board
/// layout; changing any pair breaks the ring topology.
const RING_STEPS: [(HexDirection, HexDirection); 5] = [
    (HexDirection::Southwest, HexDirection::Northeast),
    (HexDirection::South, HexDirection::North),
    (HexDirection::Southeast, HexDirection::Northwest),
    (HexDirection::Northeast, HexDirection::Southwest),
    (HexDirection::North, HexDirection::South),
];

/// Assemble six ring hexagons plus a connected center.
///
/// Ring hexagons are drawn from `ring_filter` with uniform random
/// rotations. Occupied-side failures are logged and tolerated; the grid
/// keeps whatever links could be made.
pub fn build_ring<R: Rng>(
    center: CenterArchetype,
    ring_filter: ArchetypeFilter,
    rng: &mut R,
) -> Result<HexagonGrid> {
    let mut grid = HexagonGrid::new();

    let mut first = ring_filter.choose(rng).build();
    first.rotation = rng.gen_range(0..6);
    let first_id = first.id;
    tracing::info!(
        "placed ring hexagon 1: {} territories, rotation {}",
        first.territories.len(),
        first.rotation
    );
    grid.add_hexagon(first, None, None, None)?;

    let mut ring_ids = vec![first_id];
    let mut prev_id = first_id;
    for (step, (my_direction, their_direction)) in RING_STEPS.iter().enumerate() {
        let mut hexagon = ring_filter.choose(rng).build();
        hexagon.rotation = rng.gen_range(0..6);
        let my_side = hexagon.side_facing(*my_direction);
        let their_side = grid
            .hexagon(prev_id)
            .expect("previous ring hexagon is in the grid")
            .side_facing(*their_direction);

        let id = hexagon.id;
        tracing::info!(
            "placed ring hexagon {}: {} territories, rotation {}",
            step + 2,
            hexagon.territories.len(),
            hexagon.rotation
        );
        grid.add_hexagon(hexagon, Some(prev_id), Some(my_side), Some(their_side))?;
        ring_ids.push(id);
        prev_id = id;
    }

    // Close the ring: the last hexagon's southeast meets the first's
    // northwest. Both are already in the grid, so append directly.
    let closing_side = grid
        .hexagon(prev_id)
        .expect("last ring hexagon is in the grid")
        .side_facing(HexDirection::Southeast);
    let first_side = grid
        .hexagon(first_id)
        .expect("first ring hexagon is in the grid")
        .side_facing(HexDirection::Northwest);
    grid.connect(prev_id, closing_side, first_id, first_side);
    tracing::info!("closed the hexagon ring");

    // Center hexagon, spoked to every ring position. Spokes use raw side
    // numbers: center side i always meets ring hexagon i on the side
    // directly across from it.
    let mut center_hexagon = center.resolve(rng).build();
    center_hexagon.rotation = rng.gen_range(0..6);
    let center_id = center_hexagon.id;
    tracing::info!(
        "placed center hexagon: {} territories, rotation {}",
        center_hexagon.territories.len(),
        center_hexagon.rotation
    );
    grid.add_hexagon(center_hexagon, None, None, None)?;

    for (i, &ring_id) in ring_ids.iter().enumerate() {
        let center_side = HexSide::new(i as u8);
        grid.connect(center_id, center_side, ring_id, center_side.opposite());
    }

    tracing::info!(
        "assembled grid: {} hexagons, {} connections",
        grid.hexagons.len(),
        grid.connections.len()
    );
    Ok(grid)
}
