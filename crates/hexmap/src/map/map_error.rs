use crate::hex::HexCoord;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum DeckError {
    #[error("No cards left in the deck")]
    Exhausted,
}

#[derive(ThisError, Debug)]
pub enum MapError {
    #[error("Failed to read map file")]
    Io(#[source] std::io::Error),
    #[error("Failed to parse map data")]
    Parse(#[source] serde_json::Error),
    #[error("Failed to save map data")]
    Save(#[source] serde_json::Error),
    #[error("Unknown terrain: {0:?}")]
    UnknownTerrain(String),
    #[error("Unknown sight: {0:?}")]
    UnknownSight(String),
    #[error("Invalid tile entry at index {index}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<MapError>,
    },
    #[error("Tile cannot be placed at {0}")]
    InvalidPlacement(HexCoord),
    #[error(transparent)]
    Deck(#[from] DeckError),
}
