//! Hexatlas - Entry Point
//!
//! Assembles a ring map, extracts the territory graph, picks supply
//! centers, and writes the export the renderer consumes.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexatlas::core::error::{AtlasError, Result};
use hexatlas::graph::{extract_territory_graph, select_supply_centers, EdgeKind, SupplyMode};
use hexatlas::grid::ring::{build_ring, CenterArchetype};
use hexatlas::hex::archetypes::ArchetypeFilter;
use hexatlas::render::{self, RenderOptions};

/// Generate a hexagonal territory map and its connectivity graph
#[derive(Parser, Debug)]
#[command(name = "hexatlas")]
#[command(about = "Generate a hexagonal territory map and its connectivity graph")]
struct Args {
    /// Center hexagon archetype: single, diamond, triple, five or random
    #[arg(long, short, default_value = "random")]
    center: String,

    /// Ring archetype pool: all, standard or expanded
    #[arg(long, default_value = "all")]
    ring: String,

    /// Supply centers: none, random, distributed or spaced
    #[arg(long, short, default_value = "none")]
    supply: String,

    /// How many supply centers to place (distributed mode requires the
    /// hexagon count)
    #[arg(long, default_value_t = 7)]
    supply_count: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output path for the exported graph
    #[arg(long, short, default_value = "territory_graph.dot")]
    output: String,

    /// Output format: dot or json
    #[arg(long, default_value = "dot")]
    format: String,

    /// Color nodes by owning hexagon (default: flat grey)
    #[arg(long)]
    color: bool,

    /// Label nodes with shortened territory ids
    #[arg(long)]
    show_ids: bool,
}

fn parse_center(value: &str) -> Result<CenterArchetype> {
    match value {
        "single" => Ok(CenterArchetype::Single),
        "diamond" => Ok(CenterArchetype::Diamond),
        "triple" => Ok(CenterArchetype::Triple),
        "five" => Ok(CenterArchetype::Five),
        "random" => Ok(CenterArchetype::Random),
        other => Err(AtlasError::UnknownOption {
            context: "--center",
            value: other.to_string(),
        }),
    }
}

fn parse_ring(value: &str) -> Result<ArchetypeFilter> {
    match value {
        "all" => Ok(ArchetypeFilter::All),
        "standard" => Ok(ArchetypeFilter::Standard),
        "expanded" => Ok(ArchetypeFilter::Expanded),
        other => Err(AtlasError::UnknownOption {
            context: "--ring",
            value: other.to_string(),
        }),
    }
}

fn parse_supply(value: &str) -> Result<SupplyMode> {
    match value {
        "none" => Ok(SupplyMode::None),
        "random" => Ok(SupplyMode::Random),
        "distributed" => Ok(SupplyMode::Distributed),
        "spaced" => Ok(SupplyMode::Spaced),
        other => Err(AtlasError::UnknownOption {
            context: "--supply",
            value: other.to_string(),
        }),
    }
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("hexatlas=info")
        .init();

    let args = Args::parse();
    let center = parse_center(&args.center)?;
    let ring_filter = parse_ring(&args.ring)?;
    let supply_mode = parse_supply(&args.supply)?;

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let grid = build_ring(center, ring_filter, &mut rng)?;
    for (i, connection) in grid.connections.iter().enumerate() {
        tracing::info!(
            "connection {}: {} side {} <-> {} side {}",
            i + 1,
            connection.a.short(),
            connection.a_side,
            connection.b.short(),
            connection.b_side
        );
    }

    let graph = extract_territory_graph(&grid, &mut rng);
    tracing::info!(
        "territory graph: {} territories, {} internal edges, {} inter-hexagon edges",
        graph.node_count(),
        graph.edges_of_kind(EdgeKind::Internal).count(),
        graph.edges_of_kind(EdgeKind::InterHexagon).count()
    );

    let supply = select_supply_centers(&grid, &graph, supply_mode, args.supply_count, &mut rng)?;
    if let Some(centers) = &supply {
        tracing::info!("marked {} supply centers", centers.len());
    }

    let options = RenderOptions {
        use_colors: args.color,
        show_ids: args.show_ids,
    };
    let contents = match args.format.as_str() {
        "dot" => render::to_dot(&grid, &graph, supply.as_deref(), options),
        "json" => render::to_json(&graph, supply.as_deref())?,
        other => {
            return Err(AtlasError::UnknownOption {
                context: "--format",
                value: other.to_string(),
            })
        }
    };
    std::fs::write(&args.output, contents)?;
    tracing::info!("wrote graph export to {}", args.output);

    Ok(())
}
