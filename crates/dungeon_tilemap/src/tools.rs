//! Paint tool - brush and bucket painting onto a [`TileMap`]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::TileMapError;
use crate::grid::GridPos;
use crate::map::TileMap;
use crate::tile::TileType;

/// Default cell budget for a bucket fill
pub const DEFAULT_FLOOD_FILL_DEPTH: usize = 400;

/// Painting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    /// Paint a single cell
    #[default]
    Brush,
    /// Repaint the contiguous region under the cursor
    Bucket,
}

impl PaintMode {
    pub fn name(&self) -> &'static str {
        match self {
            PaintMode::Brush => "brush",
            PaintMode::Bucket => "bucket",
        }
    }
}

impl fmt::Display for PaintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaintMode {
    type Err = TileMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brush" => Ok(PaintMode::Brush),
            "bucket" => Ok(PaintMode::Bucket),
            _ => Err(TileMapError::UnknownPaintMode(s.to_string())),
        }
    }
}

/// Active tool selection, supplied by the caller on every paint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaintSettings {
    pub mode: PaintMode,
    pub tile_type: TileType,
}

impl PaintSettings {
    pub fn new(mode: PaintMode, tile_type: TileType) -> Self {
        Self { mode, tile_type }
    }

    pub fn brush(tile_type: TileType) -> Self {
        Self::new(PaintMode::Brush, tile_type)
    }

    pub fn bucket(tile_type: TileType) -> Self {
        Self::new(PaintMode::Bucket, tile_type)
    }
}

/// Turns a paint command into `place_tile` calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintTool {
    /// Maximum number of cells a single bucket fill may visit
    pub flood_fill_depth: usize,
}

impl Default for PaintTool {
    fn default() -> Self {
        Self::new(DEFAULT_FLOOD_FILL_DEPTH)
    }
}

impl PaintTool {
    pub fn new(flood_fill_depth: usize) -> Self {
        Self { flood_fill_depth }
    }

    /// Paint at (x, y) using `settings`.
    ///
    /// Returns the number of cell changes the paint produced.
    pub fn paint(&self, map: &mut TileMap, x: i32, y: i32, settings: &PaintSettings) -> usize {
        match settings.mode {
            PaintMode::Brush => map.place_tile(x, y, settings.tile_type),
            PaintMode::Bucket => self.bucket_fill(map, GridPos::new(x, y), settings.tile_type),
        }
    }

    fn bucket_fill(&self, map: &mut TileMap, start: GridPos, tile_type: TileType) -> usize {
        let region = map.get(start.x, start.y).tile_type();
        let cells = map.flood_fill(start, self.flood_fill_depth, region);

        debug!(
            "bucket fill {region} -> {tile_type} from {start}: {} cells",
            cells.len()
        );

        cells
            .into_iter()
            .map(|p| map.place_tile(p.x, p.y, tile_type))
            .sum()
    }
}
