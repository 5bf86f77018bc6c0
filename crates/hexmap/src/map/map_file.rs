use crate::{
    hex::HexCoord,
    map::{MapError, Path, Sight, Terrain, Tile, TileGrid},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fs, path::Path as FsPath};

/// A tile entry of the map file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFileTile {
    pub x: i32,
    pub y: i32,
    pub terrain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sight: Option<String>,
}

impl MapFileTile {
    fn to_tile(&self) -> Result<Tile, MapError> {
        let terrain = self.terrain.parse::<Terrain>()?;
        let mut tile = Tile::new(HexCoord::new(self.x, self.y), terrain);
        if let Some(sight) = &self.sight {
            tile = tile.with_sight(sight.parse::<Sight>()?);
        }
        Ok(tile)
    }
}

impl From<&Tile> for MapFileTile {
    fn from(tile: &Tile) -> Self {
        Self {
            x: tile.coords.x,
            y: tile.coords.y,
            terrain: tile.terrain.name().to_owned(),
            sight: tile.sight.map(|sight| sight.name().to_owned()),
        }
    }
}

/// Layout of the map file. Tile entries are kept raw so a broken entry can be reported with its index.
#[derive(Debug, Deserialize)]
struct RawMapFile {
    tiles: Vec<Value>,
    #[serde(default)]
    paths: Vec<Path>,
}

#[derive(Debug, Serialize)]
struct MapFile {
    tiles: Vec<MapFileTile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    paths: Vec<Path>,
}

/// Content of a map file.
#[derive(Debug, Clone, Default)]
pub struct TileMapData {
    pub grid: TileGrid,
    pub paths: Vec<Path>,
}

impl TileMapData {
    pub fn new(grid: TileGrid) -> Self {
        Self { grid, paths: Vec::new() }
    }

    /// Parse a map description. Either the whole map is loaded or an error is returned.
    pub fn load_from_str(json: &str) -> Result<Self, MapError> {
        let raw: RawMapFile = serde_json::from_str(json).map_err(MapError::Parse)?;

        let mut grid = TileGrid::new();
        for (index, entry) in raw.tiles.into_iter().enumerate() {
            let invalid = |err: MapError| MapError::InvalidEntry {
                index,
                source: Box::new(err),
            };
            let entry: MapFileTile = serde_json::from_value(entry)
                .map_err(MapError::Parse)
                .map_err(invalid)?;
            let tile = entry.to_tile().map_err(invalid)?;
            grid.set(tile).map_err(invalid)?;
        }

        log::debug!(
            "Map loaded with {} tiles, {} paths, extent {}x{}",
            grid.len(),
            raw.paths.len(),
            grid.width(),
            grid.height()
        );
        Ok(Self { grid, paths: raw.paths })
    }

    pub fn load_from_file<P: AsRef<FsPath>>(path: P) -> Result<Self, MapError> {
        log::info!("Loading map from {}...", path.as_ref().display());
        let json = fs::read_to_string(path).map_err(MapError::Io)?;
        Self::load_from_str(&json)
    }

    /// Write the map description in the same format the loader accepts.
    pub fn save_to_string(&self) -> Result<String, MapError> {
        let file = MapFile {
            tiles: self.grid.iter().map(MapFileTile::from).collect(),
            paths: self.paths.clone(),
        };
        serde_json::to_string_pretty(&file).map_err(MapError::Save)
    }
}
