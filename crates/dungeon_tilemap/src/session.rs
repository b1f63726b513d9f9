use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::grid::GridCell;
use crate::history::History;
use crate::map::TileMap;
use crate::tile::{Tile, TileType};
use crate::tools::{PaintMode, PaintSettings, PaintTool};

/// One editing session: the map, its history and the active tool
#[derive(Debug, Clone)]
pub struct EditSession {
    map: TileMap,
    history: History,
    tool: PaintTool,
    settings: PaintSettings,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl EditSession {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            map: TileMap::new(),
            history: History::new(config.history_limit),
            tool: PaintTool::new(config.flood_fill_depth),
            settings: config.default_settings(),
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> PaintSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: PaintSettings) {
        self.settings = settings;
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        self.settings.mode = mode;
    }

    pub fn set_tile_type(&mut self, tile_type: TileType) {
        self.settings.tile_type = tile_type;
    }

    /// Select a tile type by name. Unknown names leave the selection as is.
    pub fn select_tile_named(&mut self, name: &str) -> bool {
        match name.parse::<TileType>() {
            Ok(tile_type) => {
                self.settings.tile_type = tile_type;
                true
            }
            Err(err) => {
                warn!("ignoring tile selection: {err}");
                false
            }
        }
    }

    /// Paint at (x, y) with the active settings
    pub fn paint(&mut self, x: i32, y: i32) -> usize {
        let settings = self.settings;
        self.paint_with(x, y, &settings)
    }

    /// Paint at (x, y) as a single undoable edit.
    ///
    /// Paints that change nothing are not recorded.
    pub fn paint_with(&mut self, x: i32, y: i32, settings: &PaintSettings) -> usize {
        let before = self.map.snapshot();
        let changed = self.tool.paint(&mut self.map, x, y, settings);
        if changed > 0 {
            self.history.push_undo(before);
        }
        debug!(
            "paint {} {} at ({x}, {y}): {changed} changes",
            settings.mode, settings.tile_type
        );
        changed
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.map)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.map)
    }

    pub fn poll_changes(&mut self) -> Vec<GridCell<Tile>> {
        self.map.poll_changes()
    }

    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.map.get(x, y)
    }
}
