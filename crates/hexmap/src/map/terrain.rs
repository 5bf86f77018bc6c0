use crate::map::MapError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Terrain of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Terrain {
    Desert,
    Forest,
    Mountain,
    Water,
    /// Wildcard, matches any other terrain.
    Any,
}

impl Terrain {
    pub const ALL: [Terrain; 5] = [
        Terrain::Desert,
        Terrain::Forest,
        Terrain::Mountain,
        Terrain::Water,
        Terrain::Any,
    ];

    /// The name used in map files.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Desert => "DESERT",
            Terrain::Forest => "FOREST",
            Terrain::Mountain => "MOUNTAIN",
            Terrain::Water => "WATER",
            Terrain::Any => "ANY",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Terrain {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::ALL
            .into_iter()
            .find(|terrain| terrain.name() == s)
            .ok_or_else(|| MapError::UnknownTerrain(s.to_owned()))
    }
}

/// Point of interest placed on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sight {
    Obelisk,
    Book,
    Toucan,
    Yeti,
    Serpent,
    ATown,
    BTown,
    CTown,
    DTown,
    ETown,
}

impl Sight {
    pub const ALL: [Sight; 10] = [
        Sight::Obelisk,
        Sight::Book,
        Sight::Toucan,
        Sight::Yeti,
        Sight::Serpent,
        Sight::ATown,
        Sight::BTown,
        Sight::CTown,
        Sight::DTown,
        Sight::ETown,
    ];

    /// The name used in map files.
    pub const fn name(self) -> &'static str {
        match self {
            Sight::Obelisk => "OBELISK",
            Sight::Book => "BOOK",
            Sight::Toucan => "TOUCAN",
            Sight::Yeti => "YETI",
            Sight::Serpent => "SERPENT",
            Sight::ATown => "A_TOWN",
            Sight::BTown => "B_TOWN",
            Sight::CTown => "C_TOWN",
            Sight::DTown => "D_TOWN",
            Sight::ETown => "E_TOWN",
        }
    }

    /// Icon asset of the landmarks, towns have no icon.
    pub const fn icon(self) -> Option<&'static str> {
        match self {
            Sight::Obelisk => Some("assets/graphics/obelisk.png"),
            Sight::Book => Some("assets/graphics/book.png"),
            Sight::Toucan => Some("assets/graphics/toucan.png"),
            Sight::Yeti => Some("assets/graphics/yeti.png"),
            Sight::Serpent => Some("assets/graphics/serpent.png"),
            Sight::ATown | Sight::BTown | Sight::CTown | Sight::DTown | Sight::ETown => None,
        }
    }
}

impl fmt::Display for Sight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sight {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sight::ALL
            .into_iter()
            .find(|sight| sight.name() == s)
            .ok_or_else(|| MapError::UnknownSight(s.to_owned()))
    }
}
