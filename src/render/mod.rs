//! Export surface for the external renderer.
//!
//! Layout and plotting live outside this crate. What crosses the
//! boundary is the derived graph - nodes tagged with their hexagon,
//! edges tagged with their kind - and the optional supply-center list,
//! either as Graphviz DOT or as JSON.

use std::fmt::Write;

use ahash::AHashMap;
use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{HexagonId, TerritoryId};
use crate::graph::extract::{EdgeKind, TerritoryGraph};
use crate::grid::HexagonGrid;

/// Display toggles passed through from the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Color nodes by owning hexagon instead of a flat grey.
    pub use_colors: bool,
    /// Label nodes with shortened territory ids.
    pub show_ids: bool,
}

/// Palette cycled across hexagons when coloring is on.
const HEXAGON_COLORS: [&str; 8] = [
    "red", "blue", "green", "orange", "purple", "cyan", "magenta", "yellow",
];

const PLAIN_COLOR: &str = "lightgrey";

/// Render the graph as Graphviz DOT.
///
/// Internal edges are solid black, inter-hexagon edges dashed red,
/// supply centers get a heavy black outline - the same legend the
/// external plot uses.
pub fn to_dot(
    grid: &HexagonGrid,
    graph: &TerritoryGraph,
    supply: Option<&[TerritoryId]>,
    options: RenderOptions,
) -> String {
    let mut colors: AHashMap<HexagonId, &str> = AHashMap::new();
    for (i, hexagon) in grid.hexagons.iter().enumerate() {
        colors.insert(hexagon.id, HEXAGON_COLORS[i % HEXAGON_COLORS.len()]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "graph territories {{");
    let _ = writeln!(out, "    node [shape=circle style=filled];");

    for node in &graph.nodes {
        let fill = if options.use_colors {
            colors.get(&node.hexagon).copied().unwrap_or(PLAIN_COLOR)
        } else {
            PLAIN_COLOR
        };
        let label = if options.show_ids {
            node.territory.short()
        } else {
            String::new()
        };
        let outline = if supply.is_some_and(|s| s.contains(&node.territory)) {
            " color=black penwidth=3"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "    \"{}\" [fillcolor={} label=\"{}\"{}];",
            node.territory.short(),
            fill,
            label,
            outline
        );
    }

    for edge in &graph.edges {
        let style = match edge.kind {
            EdgeKind::Internal => "color=black",
            EdgeKind::InterHexagon => "color=red style=dashed",
        };
        let _ = writeln!(
            out,
            "    \"{}\" -- \"{}\" [{}];",
            edge.a.short(),
            edge.b.short(),
            style
        );
    }

    let _ = writeln!(out, "}}");
    out
}

#[derive(Serialize)]
struct GraphExport<'a> {
    graph: &'a TerritoryGraph,
    supply_centers: Option<&'a [TerritoryId]>,
}

/// Render the graph as JSON for renderers that do their own layout.
pub fn to_json(graph: &TerritoryGraph, supply: Option<&[TerritoryId]>) -> Result<String> {
    let export = GraphExport {
        graph,
        supply_centers: supply,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::graph::extract::extract_territory_graph;
    use crate::grid::ring::{build_ring, CenterArchetype};
    use crate::hex::archetypes::ArchetypeFilter;

    fn ring_fixture() -> (HexagonGrid, TerritoryGraph) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let grid = build_ring(CenterArchetype::Single, ArchetypeFilter::All, &mut rng).unwrap();
        let graph = extract_territory_graph(&grid, &mut rng);
        (grid, graph)
    }

    #[test]
    fn test_dot_lists_every_node_and_edge() {
        let (grid, graph) = ring_fixture();
        let dot = to_dot(&grid, &graph, None, RenderOptions::default());

        for node in &graph.nodes {
            assert!(dot.contains(&format!("\"{}\"", node.territory.short())));
        }
        assert_eq!(
            dot.matches(" -- ").count(),
            graph.edge_count(),
            "one DOT edge statement per graph edge"
        );
        assert!(dot.contains("style=dashed"));
    }

    #[test]
    fn test_dot_outlines_supply_centers() {
        let (grid, graph) = ring_fixture();
        let supply = vec![graph.nodes[0].territory];
        let dot = to_dot(&grid, &graph, Some(&supply), RenderOptions::default());
        assert!(dot.contains("penwidth=3"));
    }

    #[test]
    fn test_dot_color_toggle() {
        let (grid, graph) = ring_fixture();
        let colored = to_dot(
            &grid,
            &graph,
            None,
            RenderOptions { use_colors: true, show_ids: false },
        );
        assert!(colored.contains("fillcolor=red"));

        let plain = to_dot(&grid, &graph, None, RenderOptions::default());
        assert!(!plain.contains("fillcolor=red"));
    }

    #[test]
    fn test_json_round_trips_counts() {
        let (_, graph) = ring_fixture();
        let json = to_json(&graph, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value["graph"]["nodes"].as_array().unwrap().len(),
            graph.node_count()
        );
        assert_eq!(
            value["graph"]["edges"].as_array().unwrap().len(),
            graph.edge_count()
        );
        assert!(value["supply_centers"].is_null());
    }
}
