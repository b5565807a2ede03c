use thiserror::Error;

use crate::core::types::HexagonId;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("connection to hexagon {0:?} requires both sides to be specified")]
    IncompleteConnection(HexagonId),

    #[error("distributed supply places one center per hexagon: requested {requested}, grid has {hexagons} hexagons")]
    SupplyCountMismatch { requested: usize, hexagons: usize },

    #[error("requested {requested} supply centers but the graph only has {available} territories")]
    NotEnoughTerritories { requested: usize, available: usize },

    #[error("could not place {requested} supply centers among {available} territories after {attempts} attempts")]
    SelectionExhausted {
        requested: usize,
        available: usize,
        attempts: u32,
    },

    #[error("unknown value for {context}: {value}")]
    UnknownOption {
        context: &'static str,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
