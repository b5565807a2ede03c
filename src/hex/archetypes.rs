//! Named territory-subdivision patterns for hexagons.
//!
//! Each archetype is a pure constructor: fresh territory and hexagon ids
//! on every call, rotation 0, side coverage forming an exact partition of
//! the six sides.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::types::HexSide;
use crate::hex::hexagon::Hexagon;
use crate::hex::territory::Territory;

/// The closed set of subdivision patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    /// One territory covering all six sides.
    Single,
    /// Three two-side wedges, fully connected.
    Triple,
    /// Two wedges and two slivers in a diamond adjacency.
    Diamond,
    /// Four single-side territories around a two-side anchor.
    Five,
}

impl Archetype {
    /// Construct a fresh hexagon with this pattern.
    pub fn build(self) -> Hexagon {
        let hexagon = match self {
            Self::Single => build_single(),
            Self::Triple => build_triple(),
            Self::Diamond => build_diamond(),
            Self::Five => build_five(),
        };
        debug_assert!(
            hexagon.sides_partitioned(),
            "{self:?} must cover each side exactly once"
        );
        hexagon
    }
}

/// Which archetypes a random draw may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeFilter {
    /// Every pattern eligible for random placement.
    All,
    /// The original wedge-based patterns only.
    Standard,
    /// The later five-territory pattern only.
    Expanded,
}

impl ArchetypeFilter {
    pub fn choices(self) -> &'static [Archetype] {
        match self {
            Self::All => &[Archetype::Triple, Archetype::Diamond, Archetype::Five],
            Self::Standard => &[Archetype::Triple, Archetype::Diamond],
            Self::Expanded => &[Archetype::Five],
        }
    }

    /// Uniformly pick one archetype out of this filter's pool.
    pub fn choose<R: Rng>(self, rng: &mut R) -> Archetype {
        *self
            .choices()
            .choose(rng)
            .expect("every filter has at least one archetype")
    }
}

fn build_single() -> Hexagon {
    let whole = Territory::touching(HexSide::ALL);
    Hexagon::new(vec![whole], Vec::new())
}

fn build_triple() -> Hexagon {
    let north = Territory::touching([HexSide::new(0), HexSide::new(1)]);
    let southeast = Territory::touching([HexSide::new(2), HexSide::new(3)]);
    let southwest = Territory::touching([HexSide::new(4), HexSide::new(5)]);

    let internal_edges = vec![
        (north.id, southeast.id),
        (southeast.id, southwest.id),
        (north.id, southwest.id),
    ];

    Hexagon::new(vec![north, southeast, southwest], internal_edges)
}

fn build_diamond() -> Hexagon {
    let north = Territory::touching([HexSide::new(0), HexSide::new(1)]);
    let west = Territory::touching([HexSide::new(5)]);
    let east = Territory::touching([HexSide::new(2)]);
    let south = Territory::touching([HexSide::new(3), HexSide::new(4)]);

    // The two slivers link to everything; the wedges never touch directly.
    let internal_edges = vec![
        (north.id, west.id),
        (north.id, east.id),
        (west.id, east.id),
        (south.id, west.id),
        (south.id, east.id),
    ];

    Hexagon::new(vec![north, west, east, south], internal_edges)
}

fn build_five() -> Hexagon {
    let t1 = Territory::touching([HexSide::new(0)]);
    let t2 = Territory::touching([HexSide::new(1)]);
    let t3 = Territory::touching([HexSide::new(2)]);
    let t4 = Territory::touching([HexSide::new(3), HexSide::new(4)]);
    let t5 = Territory::touching([HexSide::new(5)]);

    // Every pair adjacent except t1-t4, t2-t4 and t2-t5.
    let internal_edges = vec![
        (t1.id, t2.id),
        (t1.id, t5.id),
        (t1.id, t3.id),
        (t2.id, t3.id),
        (t4.id, t3.id),
        (t4.id, t5.id),
        (t3.id, t5.id),
    ];

    Hexagon::new(vec![t1, t2, t3, t4, t5], internal_edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TerritoryId;

    const EVERY_ARCHETYPE: [Archetype; 4] = [
        Archetype::Single,
        Archetype::Triple,
        Archetype::Diamond,
        Archetype::Five,
    ];

    fn has_edge(hexagon: &Hexagon, a: TerritoryId, b: TerritoryId) -> bool {
        hexagon
            .internal_edges
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    #[test]
    fn test_every_archetype_partitions_the_sides() {
        for archetype in EVERY_ARCHETYPE {
            let hexagon = archetype.build();
            assert!(
                hexagon.sides_partitioned(),
                "{archetype:?} does not cover each side exactly once"
            );
        }
    }

    #[test]
    fn test_internal_edges_reference_own_territories() {
        for archetype in EVERY_ARCHETYPE {
            let hexagon = archetype.build();
            for &(a, b) in &hexagon.internal_edges {
                assert_ne!(a, b, "{archetype:?} has a self-edge");
                assert!(hexagon.territories.iter().any(|t| t.id == a));
                assert!(hexagon.territories.iter().any(|t| t.id == b));
            }
        }
    }

    #[test]
    fn test_single_has_one_territory_no_edges() {
        let hexagon = Archetype::Single.build();
        assert_eq!(hexagon.territories.len(), 1);
        assert!(hexagon.internal_edges.is_empty());
        assert_eq!(hexagon.territories[0].sides.len(), 6);
    }

    #[test]
    fn test_triple_is_a_triangle() {
        let hexagon = Archetype::Triple.build();
        assert_eq!(hexagon.territories.len(), 3);
        assert_eq!(hexagon.internal_edges.len(), 3);
        for pair in hexagon.territories.windows(2) {
            assert!(has_edge(&hexagon, pair[0].id, pair[1].id));
        }
    }

    #[test]
    fn test_diamond_wedges_do_not_touch() {
        let hexagon = Archetype::Diamond.build();
        assert_eq!(hexagon.territories.len(), 4);
        assert_eq!(hexagon.internal_edges.len(), 5);
        // Territories 0 and 3 are the two-side wedges.
        let north = hexagon.territories[0].id;
        let south = hexagon.territories[3].id;
        assert!(!has_edge(&hexagon, north, south));
        // Both slivers reach both wedges and each other.
        let west = hexagon.territories[1].id;
        let east = hexagon.territories[2].id;
        assert!(has_edge(&hexagon, west, east));
        assert!(has_edge(&hexagon, north, west));
        assert!(has_edge(&hexagon, south, east));
    }

    #[test]
    fn test_five_skips_three_pairs() {
        let hexagon = Archetype::Five.build();
        assert_eq!(hexagon.territories.len(), 5);
        assert_eq!(hexagon.internal_edges.len(), 7);
        let ids: Vec<TerritoryId> = hexagon.territories.iter().map(|t| t.id).collect();
        assert!(!has_edge(&hexagon, ids[0], ids[3]));
        assert!(!has_edge(&hexagon, ids[1], ids[3]));
        assert!(!has_edge(&hexagon, ids[1], ids[4]));
    }

    #[test]
    fn test_random_draw_respects_the_filter() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let archetype = ArchetypeFilter::Standard.choose(&mut rng);
            assert!(matches!(archetype, Archetype::Triple | Archetype::Diamond));
        }
        assert_eq!(ArchetypeFilter::Expanded.choose(&mut rng), Archetype::Five);
    }

    #[test]
    fn test_fresh_identities_per_build() {
        let first = Archetype::Triple.build();
        let second = Archetype::Triple.build();
        assert_ne!(first.id, second.id);
        assert_ne!(first.territories[0].id, second.territories[0].id);
    }
}
