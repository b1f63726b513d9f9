use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::tile::TileType;
use crate::tools::{PaintMode, PaintSettings, DEFAULT_FLOOD_FILL_DEPTH};

/// Editor configuration, usually read from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of cells a bucket fill visits
    pub flood_fill_depth: usize,
    /// Maximum number of undo steps kept
    pub history_limit: usize,
    /// Tile type selected when the session starts
    pub default_tile: TileType,
    /// Paint mode selected when the session starts
    pub default_mode: PaintMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            flood_fill_depth: DEFAULT_FLOOD_FILL_DEPTH,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_tile: TileType::Floor,
            default_mode: PaintMode::Brush,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Tool selection the session starts with
    pub fn default_settings(&self) -> PaintSettings {
        PaintSettings::new(self.default_mode, self.default_tile)
    }
}
