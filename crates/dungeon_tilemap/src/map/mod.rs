//! Tile map with autotiled walls and a pending-change buffer
//!
//! Every edit goes through [`TileMap::place_tile`], which keeps the wall
//! geometry around the edited cell consistent and remembers which cells
//! changed so a renderer can pick them up with [`TileMap::poll_changes`].

mod edge;

pub use edge::Direction;

use tracing::{debug, trace};

use crate::autotile;
use crate::grid::{GridCell, GridPos, SparseGrid};
use crate::tile::{Tile, TileType};

/// Sparse tile grid for a single editing session
#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: SparseGrid<Tile>,
    /// Cells mutated since the last poll. Values are refreshed on poll.
    changes: SparseGrid<Tile>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TileMap {
    pub fn new() -> Self {
        Self {
            tiles: SparseGrid::new(Tile::Empty),
            changes: SparseGrid::new(Tile::Empty),
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Tile {
        *self.tiles.get(x, y)
    }

    pub fn get_all(&self) -> Vec<GridCell<Tile>> {
        self.tiles.get_all()
    }

    pub fn get_square(&self, x: i32, y: i32, size: u32) -> Vec<GridCell<Tile>> {
        self.tiles.get_square(x, y, size)
    }

    pub fn get_neighbors(&self, x: i32, y: i32) -> Vec<GridCell<Tile>> {
        self.tiles.get_neighbors(x, y)
    }

    /// The underlying grid, for bulk consumers such as exporters
    pub fn grid(&self) -> &SparseGrid<Tile> {
        &self.tiles
    }

    /// Full copy of the current tiles
    pub fn snapshot(&self) -> SparseGrid<Tile> {
        self.tiles.clone()
    }

    /// Whether any change is waiting to be polled
    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Place a tile of the given type at (x, y).
    ///
    /// Walls in the surrounding 3x3 block are reclassified, and every cell
    /// whose value differs from before the call is added to the change buffer.
    /// Erasing a cell that is already empty does nothing at all.
    ///
    /// Returns the number of cells whose value changed.
    pub fn place_tile(&mut self, x: i32, y: i32, tile_type: TileType) -> usize {
        if tile_type == TileType::Empty && self.get(x, y).tile_type() == TileType::Empty {
            return 0;
        }

        // Copy of the neighborhood taken before any mutation, also used as
        // the reference for diffing.
        let before = self.tiles.get_square(x, y, 1);

        let tile = match tile_type {
            TileType::Wall => Tile::PLACEHOLDER_WALL,
            TileType::Floor => Tile::Floor,
            TileType::Empty => Tile::Empty,
        };
        self.tiles.set(x, y, tile);

        for cell in &before {
            autotile::update_wall(&mut self.tiles, cell.x, cell.y);
        }

        let mut changed = 0;
        for cell in &before {
            if *self.tiles.get(cell.x, cell.y) != cell.value {
                self.mark_changed(cell.pos());
                changed += 1;
            }
        }

        trace!("place_tile({x}, {y}, {tile_type}) changed {changed} cells");
        changed
    }

    /// Drain the change buffer.
    ///
    /// Each dirty cell is reported once, with its value at poll time.
    pub fn poll_changes(&mut self) -> Vec<GridCell<Tile>> {
        let changes: Vec<GridCell<Tile>> = self
            .changes
            .positions()
            .map(|pos| GridCell {
                x: pos.x,
                y: pos.y,
                value: self.get(pos.x, pos.y),
            })
            .collect();
        self.changes.clear();

        debug!("TileMap: {} tile changes", changes.len());
        changes
    }

    /// Drop every tile and record the removed cells as changed
    pub fn clear(&mut self) {
        let positions: Vec<GridPos> = self.tiles.positions().collect();
        self.tiles.clear();
        for pos in positions {
            self.mark_changed(pos);
        }
    }

    fn mark_changed(&mut self, pos: GridPos) {
        let value = self.get(pos.x, pos.y);
        self.changes.set(pos.x, pos.y, value);
    }
}
