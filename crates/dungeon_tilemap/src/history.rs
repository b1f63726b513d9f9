//! Snapshot-based undo/redo
//!
//! Each recorded edit stores a full copy of the grid as it was before the
//! edit. Undoing replays the differing cells through [`TileMap::place_tile`],
//! so wall autotiling is recomputed rather than restored verbatim.

use std::collections::HashSet;

use tracing::debug;

use crate::grid::{GridPos, SparseGrid};
use crate::map::TileMap;
use crate::tile::Tile;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Undo/redo stacks of grid snapshots (most recent at the end)
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<SparseGrid<Tile>>,
    redo_stack: Vec<SparseGrid<Tile>>,
    /// Maximum number of snapshots kept on the undo stack
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Push a pre-edit snapshot taken by the caller.
    ///
    /// Any pending redo is discarded.
    pub fn push_undo(&mut self, snapshot: SparseGrid<Tile>) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last edit.
    /// Returns true if an edit was undone
    pub fn undo(&mut self, map: &mut TileMap) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };

        self.redo_stack.push(map.snapshot());
        let replayed = replay(map, &snapshot);
        debug!(
            "undo replayed {replayed} cells ({} undo / {} redo left)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Redo the last undone edit.
    /// Returns true if an edit was redone
    pub fn redo(&mut self, map: &mut TileMap) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };

        self.undo_stack.push(map.snapshot());
        let replayed = replay(map, &snapshot);
        debug!(
            "redo replayed {replayed} cells ({} undo / {} redo left)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

/// Bring `map` back to the tile types stored in `target`.
///
/// Cells are compared by tile type only; walls are re-placed so their shape
/// is derived from the restored neighborhood.
fn replay(map: &mut TileMap, target: &SparseGrid<Tile>) -> usize {
    let cells: HashSet<GridPos> = map.grid().positions().chain(target.positions()).collect();

    let mut replayed = 0;
    for pos in cells {
        let wanted = target.get(pos.x, pos.y).tile_type();
        if map.get(pos.x, pos.y).tile_type() != wanted {
            map.place_tile(pos.x, pos.y, wanted);
            replayed += 1;
        }
    }
    replayed
}
