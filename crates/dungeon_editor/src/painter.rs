use bevy::prelude::*;
use dungeon_tilemap::{EditSession, EditorConfig, PaintMode, PaintSettings, Tile, TileType};

/// The editing session shared by all dungeon editor systems
#[derive(Resource, Debug, Default)]
pub struct DungeonMap {
    pub session: EditSession,
}

impl DungeonMap {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            session: EditSession::new(config),
        }
    }
}

/// Paint request at a cell. `None` fields fall back to the active tool.
#[derive(Message, Debug, Clone)]
pub struct PaintTileMessage {
    pub x: i32,
    pub y: i32,
    pub mode: Option<PaintMode>,
    pub tile: Option<TileType>,
}

impl PaintTileMessage {
    /// Paint with whatever tool is active
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            mode: None,
            tile: None,
        }
    }
}

/// Change the active tool. The tile comes by name, as sent by menus.
#[derive(Message, Debug, Clone, Default)]
pub struct SelectToolMessage {
    pub mode: Option<PaintMode>,
    pub tile_name: Option<String>,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMessage {
    Undo,
    Redo,
}

/// A cell whose tile changed, written once per cell after each update
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChangedMessage {
    pub x: i32,
    pub y: i32,
    pub tile: Tile,
}

/// Mesh rotation for a wall tile: `direction` quarter turns around +Y
pub fn wall_rotation(tile: &Tile) -> Option<Quat> {
    tile.rotation_degrees()
        .map(|degrees| Quat::from_rotation_y(degrees.to_radians()))
}

pub fn handle_select_tool_messages(
    mut messages: MessageReader<SelectToolMessage>,
    mut map: ResMut<DungeonMap>,
) {
    for message in messages.read() {
        if let Some(mode) = message.mode {
            map.session.set_mode(mode);
        }
        if let Some(name) = &message.tile_name {
            map.session.select_tile_named(name);
        }
        debug!("Active tool: {:?}", map.session.settings());
    }
}

pub fn handle_paint_messages(
    mut messages: MessageReader<PaintTileMessage>,
    mut map: ResMut<DungeonMap>,
) {
    for message in messages.read() {
        let active = map.session.settings();
        let settings = PaintSettings::new(
            message.mode.unwrap_or(active.mode),
            message.tile.unwrap_or(active.tile_type),
        );
        map.session.paint_with(message.x, message.y, &settings);
    }
}

pub fn handle_history_messages(
    mut messages: MessageReader<HistoryMessage>,
    mut map: ResMut<DungeonMap>,
) {
    for message in messages.read() {
        let applied = match message {
            HistoryMessage::Undo => map.session.undo(),
            HistoryMessage::Redo => map.session.redo(),
        };
        if !applied {
            debug!("{message:?} ignored: nothing to apply");
        }
    }
}

/// Drain the map's change buffer into [`TileChangedMessage`]s
pub fn publish_tile_changes(
    mut map: ResMut<DungeonMap>,
    mut changed: MessageWriter<TileChangedMessage>,
) {
    if !map.session.map().has_pending_changes() {
        return;
    }

    let changes = map.session.poll_changes();
    info!("Publishing {} tile changes", changes.len());
    for change in changes {
        changed.write(TileChangedMessage {
            x: change.x,
            y: change.y,
            tile: change.value,
        });
    }
}
