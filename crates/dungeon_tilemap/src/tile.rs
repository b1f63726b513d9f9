use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TileMapError;

/// Wall mesh shape family, picked from how many 4-connected neighbors are walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JunctionType {
    /// Straight wall (two opposite wall neighbors)
    #[default]
    Base,
    /// Isolated stub with no wall neighbors
    T0,
    /// Dead end with one wall neighbor
    T1,
    /// Corner with two adjacent wall neighbors
    T2,
    /// Three-way junction
    T3,
    /// Four-way cross
    T4,
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tile {
    #[default]
    Empty,
    Floor,
    Wall {
        /// Rotation in quarter turns (0..=3)
        direction: u8,
        junction: JunctionType,
    },
}

impl Tile {
    /// Freshly placed wall before autotiling corrects it
    pub const PLACEHOLDER_WALL: Tile = Tile::Wall {
        direction: 0,
        junction: JunctionType::Base,
    };

    pub fn tile_type(&self) -> TileType {
        match self {
            Tile::Empty => TileType::Empty,
            Tile::Floor => TileType::Floor,
            Tile::Wall { .. } => TileType::Wall,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall { .. })
    }

    /// Rotation of the wall mesh in degrees, `None` for non-wall tiles
    pub fn rotation_degrees(&self) -> Option<f32> {
        match self {
            Tile::Wall { direction, .. } => Some(f32::from(*direction) * 90.0),
            _ => None,
        }
    }
}

/// Discriminant of [`Tile`], used when painting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    #[default]
    Empty,
    Floor,
    Wall,
}

impl TileType {
    pub const ALL: [TileType; 3] = [TileType::Empty, TileType::Floor, TileType::Wall];

    pub fn name(&self) -> &'static str {
        match self {
            TileType::Empty => "empty",
            TileType::Floor => "floor",
            TileType::Wall => "wall",
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileType {
    type Err = TileMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TileMapError::UnknownTileType(s.to_string()))
    }
}
