//! # Dungeon Tilemap
//!
//! Tile-map engine for a dungeon layout editor.
//!
//! This crate provides:
//! - **SparseGrid**: infinite 2D storage with a default value for unset cells
//! - **TileMap**: empty/floor/wall tiles with automatic wall shapes and a
//!   change buffer for renderers
//! - **Autotiling**: the neighbor table mapping wall occupancy to a junction
//!   shape and rotation
//! - **PaintTool**: brush and bounded bucket fill
//! - **History**: snapshot-based undo/redo
//! - **EditSession**: all of the above behind `paint` / `undo` / `redo`
//!
//! ## Example
//!
//! ```rust
//! use dungeon_tilemap::{EditSession, PaintSettings, TileType};
//!
//! let mut session = EditSession::default();
//! session.set_settings(PaintSettings::brush(TileType::Wall));
//! session.paint(0, 0);
//! session.paint(1, 0);
//!
//! for change in session.poll_changes() {
//!     println!("({}, {}) -> {:?}", change.x, change.y, change.value);
//! }
//!
//! session.undo();
//! assert_eq!(session.get(1, 0), dungeon_tilemap::Tile::Empty);
//! ```

pub mod autotile;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod map;
pub mod session;
pub mod tile;
pub mod tools;

pub use autotile::{classify, WallNeighbors};
pub use config::EditorConfig;
pub use error::{Result, TileMapError};
pub use grid::{GridCell, GridPos, SparseGrid};
pub use history::History;
pub use map::{Direction, TileMap};
pub use session::EditSession;
pub use tile::{JunctionType, Tile, TileType};
pub use tools::{PaintMode, PaintSettings, PaintTool};
