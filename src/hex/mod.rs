pub mod archetypes;
pub mod hexagon;
pub mod territory;

pub use archetypes::{Archetype, ArchetypeFilter};
pub use hexagon::Hexagon;
pub use territory::Territory;
