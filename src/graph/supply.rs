//! Supply-center selection policies.

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

use crate::core::error::{AtlasError, Result};
use crate::core::types::TerritoryId;
use crate::graph::extract::TerritoryGraph;
use crate::grid::HexagonGrid;

/// Attempts the spaced selector makes before giving up.
const MAX_SELECTION_ATTEMPTS: u32 = 5;
/// A placed center clears everything within this graph distance.
const EXCLUSION_RADIUS: usize = 2;

/// Policy for marking supply centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyMode {
    /// No supply centers at all.
    None,
    /// Uniform sample with no spacing constraint.
    Random,
    /// Exactly one territory per hexagon, spacing ignored.
    Distributed,
    /// Pairwise graph distance of at least three between centers.
    Spaced,
}

/// Select supply centers under the given policy.
///
/// `count` is the requested number of centers; `Distributed` requires it
/// to equal the hexagon count, `Spaced` requires it to fit the graph.
pub fn select_supply_centers<R: Rng>(
    grid: &HexagonGrid,
    graph: &TerritoryGraph,
    mode: SupplyMode,
    count: usize,
    rng: &mut R,
) -> Result<Option<Vec<TerritoryId>>> {
    match mode {
        SupplyMode::None => Ok(None),
        SupplyMode::Random => Ok(Some(select_random(graph, count, rng))),
        SupplyMode::Distributed => select_distributed(grid, count, rng).map(Some),
        SupplyMode::Spaced => select_spaced(graph, count, rng).map(Some),
    }
}

fn select_random<R: Rng>(graph: &TerritoryGraph, count: usize, rng: &mut R) -> Vec<TerritoryId> {
    // Small graphs simply yield fewer centers.
    graph
        .nodes
        .iter()
        .map(|n| n.territory)
        .choose_multiple(rng, count)
}

fn select_distributed<R: Rng>(
    grid: &HexagonGrid,
    count: usize,
    rng: &mut R,
) -> Result<Vec<TerritoryId>> {
    if count != grid.hexagons.len() {
        return Err(AtlasError::SupplyCountMismatch {
            requested: count,
            hexagons: grid.hexagons.len(),
        });
    }

    Ok(grid
        .hexagons
        .iter()
        .filter_map(|hexagon| hexagon.territories.choose(rng).map(|t| t.id))
        .collect())
}

fn select_spaced<R: Rng>(
    graph: &TerritoryGraph,
    count: usize,
    rng: &mut R,
) -> Result<Vec<TerritoryId>> {
    let total = graph.node_count();
    if count > total {
        return Err(AtlasError::NotEnoughTerritories {
            requested: count,
            available: total,
        });
    }

    for attempt in 1..=MAX_SELECTION_ATTEMPTS {
        let mut available: Vec<TerritoryId> = graph.nodes.iter().map(|n| n.territory).collect();
        let mut selected = Vec::with_capacity(count);

        while selected.len() < count && !available.is_empty() {
            let pick = available[rng.gen_range(0..available.len())];
            selected.push(pick);

            // Clear the picked territory and everything within two steps.
            let excluded = graph.within_distance(pick, EXCLUSION_RADIUS);
            available.retain(|t| !excluded.contains(t));
        }

        if selected.len() == count {
            return Ok(selected);
        }
        tracing::debug!(
            "spaced selection attempt {} placed {}/{} centers, retrying",
            attempt,
            selected.len(),
            count
        );
    }

    Err(AtlasError::SelectionExhausted {
        requested: count,
        available: total,
        attempts: MAX_SELECTION_ATTEMPTS,
    })
}
