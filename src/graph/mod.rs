//! The derived territory connectivity graph.

pub mod extract;
pub mod supply;

pub use extract::{
    extract_territory_graph, extract_with, CrossLink, EdgeKind, TerritoryEdge, TerritoryGraph,
    TerritoryNode,
};
pub use supply::{select_supply_centers, SupplyMode};
