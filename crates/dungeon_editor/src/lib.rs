//! # Dungeon Editor
//!
//! Bevy integration for the `dungeon_tilemap` engine.
//!
//! The plugin owns one [`DungeonMap`] editing session. Input handling writes
//! [`PaintTileMessage`], [`SelectToolMessage`] and [`HistoryMessage`]; after
//! they are applied, every changed cell is published as a
//! [`TileChangedMessage`] for renderers to add, remove or rotate wall meshes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use dungeon_editor::{DungeonEditorPlugin, DungeonEditorSet, TileChangedMessage};
//!
//! fn place_meshes(mut changes: MessageReader<TileChangedMessage>) {
//!     for change in changes.read() {
//!         info!("({}, {}) is now {:?}", change.x, change.y, change.tile);
//!     }
//! }
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(DungeonEditorPlugin::default())
//!         .add_systems(Update, place_meshes.after(DungeonEditorSet))
//!         .run();
//! }
//! ```

pub mod painter;

pub use painter::{
    handle_history_messages, handle_paint_messages, handle_select_tool_messages,
    publish_tile_changes, wall_rotation, DungeonMap, HistoryMessage, PaintTileMessage,
    SelectToolMessage, TileChangedMessage,
};

use bevy::prelude::*;
use dungeon_tilemap::EditorConfig;

/// Systems that apply edits and publish tile changes
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DungeonEditorSet;

/// Main plugin for the dungeon editor backend
#[derive(Default)]
pub struct DungeonEditorPlugin {
    pub config: EditorConfig,
}

impl DungeonEditorPlugin {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }
}

impl Plugin for DungeonEditorPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .insert_resource(DungeonMap::new(&self.config))
            // Messages
            .add_message::<SelectToolMessage>()
            .add_message::<PaintTileMessage>()
            .add_message::<HistoryMessage>()
            .add_message::<TileChangedMessage>()
            // Systems
            .add_systems(
                Update,
                (
                    handle_select_tool_messages,
                    handle_paint_messages,
                    handle_history_messages,
                    publish_tile_changes,
                )
                    .chain()
                    .in_set(DungeonEditorSet),
            );
    }
}
