//! Flattening a hexagon grid into a single territory graph.
//!
//! The graph is a pure function of grid state: nodes are territories,
//! edges come from archetype-internal adjacency and from glued hexagon
//! sides. The only randomness is the cross-link tie-break on boundaries
//! where both glued sides carry two territories, and it is injectable so
//! tests can pin either outcome.

use ahash::{AHashMap, AHashSet};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{HexSide, HexagonId, TerritoryId};
use crate::grid::HexagonGrid;
use crate::hex::territory::Territory;

/// How an edge came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Adjacency between two territories of the same hexagon.
    Internal,
    /// Adjacency across a glued pair of hexagon sides.
    InterHexagon,
}

/// A territory together with the hexagon it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryNode {
    pub territory: TerritoryId,
    pub hexagon: HexagonId,
}

/// An undirected edge between two territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryEdge {
    pub a: TerritoryId,
    pub b: TerritoryId,
    pub kind: EdgeKind,
}

/// Undirected territory graph derived from a grid.
///
/// Edges are kept exactly as produced; parallel edges between the same
/// pair are not merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerritoryGraph {
    pub nodes: Vec<TerritoryNode>,
    pub edges: Vec<TerritoryEdge>,
    #[serde(skip)]
    adjacency: AHashMap<TerritoryId, Vec<TerritoryId>>,
}

impl TerritoryGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn neighbors(&self, territory: TerritoryId) -> &[TerritoryId] {
        self.adjacency
            .get(&territory)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &TerritoryEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// Every territory within `radius` steps of `from`, including `from`
    /// itself, found by repeated neighbor expansion.
    pub fn within_distance(&self, from: TerritoryId, radius: usize) -> AHashSet<TerritoryId> {
        let mut reached = AHashSet::new();
        reached.insert(from);
        for _ in 0..radius {
            let frontier: Vec<TerritoryId> = reached
                .iter()
                .flat_map(|&t| self.neighbors(t).iter().copied())
                .collect();
            reached.extend(frontier);
        }
        reached
    }

    fn add_node(&mut self, territory: TerritoryId, hexagon: HexagonId) {
        self.nodes.push(TerritoryNode { territory, hexagon });
        self.adjacency.entry(territory).or_default();
    }

    fn add_edge(&mut self, a: TerritoryId, b: TerritoryId, kind: EdgeKind) {
        self.edges.push(TerritoryEdge { a, b, kind });
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }
}

/// Which same-position pair receives the extra cross-link on a boundary
/// where both glued sides carry two territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossLink {
    StartToStart,
    EndToEnd,
}

/// Where a territory sits along a side it touches, looking clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SidePosition {
    Start,
    End,
    Middle,
}

fn classify(territory: &Territory, side: HexSide) -> SidePosition {
    if territory.touches(side.counter_clockwise()) {
        SidePosition::Start
    } else if territory.touches(side.clockwise()) {
        SidePosition::End
    } else {
        SidePosition::Middle
    }
}

/// Splits a two-territory side into its start and end occupant, or `None`
/// when the pair does not classify cleanly.
fn split_pair(pair: &[&Territory], side: HexSide) -> Option<(TerritoryId, TerritoryId)> {
    match (classify(pair[0], side), classify(pair[1], side)) {
        (SidePosition::Start, SidePosition::End) => Some((pair[0].id, pair[1].id)),
        (SidePosition::End, SidePosition::Start) => Some((pair[1].id, pair[0].id)),
        _ => None,
    }
}

fn connect_boundary(
    graph: &mut TerritoryGraph,
    on_a: &[&Territory],
    side_a: HexSide,
    on_b: &[&Territory],
    side_b: HexSide,
    choose_cross: &mut impl FnMut() -> CrossLink,
) {
    if on_a.len() == 2 && on_b.len() == 2 {
        if let (Some((a_start, a_end)), Some((b_start, b_end))) =
            (split_pair(on_a, side_a), split_pair(on_b, side_b))
        {
            // Glued sides are mirrored: the clockwise end of one side
            // lines up with the counter-clockwise end of the other.
            graph.add_edge(a_start, b_end, EdgeKind::InterHexagon);
            graph.add_edge(a_end, b_start, EdgeKind::InterHexagon);
            match choose_cross() {
                CrossLink::StartToStart => graph.add_edge(a_start, b_start, EdgeKind::InterHexagon),
                CrossLink::EndToEnd => graph.add_edge(a_end, b_end, EdgeKind::InterHexagon),
            }
            return;
        }
    }

    // Unambiguous or unclassifiable boundaries connect everything on one
    // side to everything on the other.
    for territory_a in on_a {
        for territory_b in on_b {
            graph.add_edge(territory_a.id, territory_b.id, EdgeKind::InterHexagon);
        }
    }
}

/// Extract the territory graph with an injected cross-link chooser.
pub fn extract_with(
    grid: &HexagonGrid,
    mut choose_cross: impl FnMut() -> CrossLink,
) -> TerritoryGraph {
    let mut graph = TerritoryGraph::default();

    // Internal pass: every territory becomes a node, every recorded
    // internal adjacency an edge.
    for hexagon in &grid.hexagons {
        for territory in &hexagon.territories {
            graph.add_node(territory.id, hexagon.id);
        }
        for &(a, b) in &hexagon.internal_edges {
            graph.add_edge(a, b, EdgeKind::Internal);
        }
    }

    // Inter-hexagon pass: connect the territories on each glued side
    // pair. Connections naming unknown hexagons are skipped.
    for connection in &grid.connections {
        let (Some(hexagon_a), Some(hexagon_b)) =
            (grid.hexagon(connection.a), grid.hexagon(connection.b))
        else {
            continue;
        };
        let on_a = hexagon_a.territories_on_side(connection.a_side);
        let on_b = hexagon_b.territories_on_side(connection.b_side);
        connect_boundary(
            &mut graph,
            &on_a,
            connection.a_side,
            &on_b,
            connection.b_side,
            &mut choose_cross,
        );
    }

    tracing::debug!(
        "extracted territory graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

/// Extract the territory graph, resolving two-vs-two boundaries with a
/// fair coin from `rng`.
pub fn extract_territory_graph<R: Rng>(grid: &HexagonGrid, rng: &mut R) -> TerritoryGraph {
    extract_with(grid, || {
        if rng.gen_bool(0.5) {
            CrossLink::StartToStart
        } else {
            CrossLink::EndToEnd
        }
    })
}
