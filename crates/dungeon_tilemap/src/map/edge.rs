//! Edge classification and the bounded flood fill built on it

use std::collections::HashSet;

use tracing::debug;

use super::TileMap;
use crate::error::{Result, TileMapError};
use crate::grid::GridPos;
use crate::tile::TileType;

/// One of the four unit steps between 4-adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Expansion order of the flood fill: east, west, north, south
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Direction of the unit step from `from` to `to`, if they are 4-adjacent
    pub fn between(from: GridPos, to: GridPos) -> Option<Direction> {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        match (dx, dy) {
            (0, 1) => Some(Direction::North),
            (0, -1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}

impl TileMap {
    /// Classify the edge shared by two 4-adjacent cells.
    ///
    /// The edge looks at the two corner cells flanking it diagonally. If both
    /// hold the same tile type the edge carries that type, otherwise it is
    /// `Empty`.
    pub fn get_edge(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<TileType> {
        let from = GridPos::new(x1, y1);
        let to = GridPos::new(x2, y2);
        let direction =
            Direction::between(from, to).ok_or(TileMapError::NotAdjacent { from, to })?;
        Ok(self.edge_towards(from, direction))
    }

    pub(crate) fn edge_towards(&self, from: GridPos, direction: Direction) -> TileType {
        let (dx, dy) = direction.delta();
        // Perpendicular to the step
        let (qx, qy) = (-dy, dx);

        let grid = self.grid();
        let corner1 = grid.get_offset(from.x, from.y, qx, qy).tile_type();
        let corner2 = grid.get_offset(from.x, from.y, dx - qx, dy - qy).tile_type();

        if corner1 == corner2 {
            corner1
        } else {
            TileType::Empty
        }
    }

    /// Collect the 4-connected region of `region` tiles reachable from `start`.
    ///
    /// Stack-based depth-first traversal that visits at most `max_depth`
    /// cells, in visit order. Crossing an edge is refused when the edge
    /// carries a tile type other than `Empty` and `region`. An edge whose
    /// corners disagree classifies as `Empty` and does not block.
    /// The map is not modified.
    pub fn flood_fill(&self, start: GridPos, max_depth: usize, region: TileType) -> Vec<GridPos> {
        let mut visited = HashSet::from([start]);
        let mut stack = vec![start];
        let mut filled = Vec::new();

        while filled.len() < max_depth {
            let Some(p) = stack.pop() else { break };
            filled.push(p);

            for direction in Direction::ALL {
                let (dx, dy) = direction.delta();
                let Some(n) = p.checked_offset(dx, dy) else {
                    continue;
                };

                let edge = self.edge_towards(p, direction);
                if edge != TileType::Empty && edge != region {
                    continue;
                }
                if self.get(n.x, n.y).tile_type() == region && visited.insert(n) {
                    stack.push(n);
                }
            }
        }

        if !stack.is_empty() {
            debug!(
                "flood fill from {start} stopped at budget of {max_depth} cells, {} pending",
                stack.len()
            );
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn floor_block(map: &mut TileMap, min: i32, max: i32) {
        for x in min..=max {
            for y in min..=max {
                map.place_tile(x, y, TileType::Floor);
            }
        }
    }

    #[test]
    fn test_edge_requires_adjacency() {
        let map = TileMap::new();
        assert!(matches!(
            map.get_edge(0, 0, 2, 0),
            Err(TileMapError::NotAdjacent { .. })
        ));
        assert!(map.get_edge(0, 0, 1, 1).is_err());
        assert!(map.get_edge(3, 3, 3, 3).is_err());
        assert!(map.get_edge(0, 0, 1, 0).is_ok());
    }

    #[test]
    fn test_edge_across_whole_plane_is_not_adjacent() {
        let map = TileMap::new();
        assert!(matches!(
            map.get_edge(i32::MIN, 0, i32::MAX, 0),
            Err(TileMapError::NotAdjacent { .. })
        ));
        assert!(map.get_edge(0, i32::MAX, 0, i32::MIN).is_err());
        assert_eq!(
            map.get_edge(i32::MAX, i32::MAX, i32::MAX, i32::MAX - 1).unwrap(),
            TileType::Empty
        );
    }

    #[test]
    fn test_edge_agreeing_corners() {
        let mut map = TileMap::new();
        // Corners of the edge between (0,0) and (1,0)
        map.place_tile(0, 1, TileType::Floor);
        map.place_tile(1, -1, TileType::Floor);
        assert_eq!(map.get_edge(0, 0, 1, 0).unwrap(), TileType::Floor);
        // Symmetric
        assert_eq!(map.get_edge(1, 0, 0, 0).unwrap(), TileType::Floor);
    }

    #[test]
    fn test_edge_disagreeing_corners_is_empty() {
        let mut map = TileMap::new();
        map.place_tile(0, 1, TileType::Wall);
        map.place_tile(1, -1, TileType::Floor);
        assert_eq!(map.get_edge(0, 0, 1, 0).unwrap(), TileType::Empty);
    }

    #[test]
    fn test_edge_vertical_step() {
        let mut map = TileMap::new();
        // Step north from (0,0): corners are (-1,0) and (1,1)
        map.place_tile(-1, 0, TileType::Wall);
        map.place_tile(1, 1, TileType::Wall);
        assert_eq!(map.get_edge(0, 0, 0, 1).unwrap(), TileType::Wall);
        assert_eq!(map.get_edge(0, 1, 0, 0).unwrap(), TileType::Wall);
    }

    #[test]
    fn test_fill_covers_block() {
        let mut map = TileMap::new();
        floor_block(&mut map, -1, 1);

        let filled = map.flood_fill(GridPos::new(0, 0), 100, TileType::Floor);
        assert_eq!(filled.len(), 9);
        assert_eq!(filled[0], GridPos::new(0, 0));
        let unique: HashSet<GridPos> = filled.iter().copied().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn test_fill_respects_budget() {
        let map = TileMap::new();
        // Empty region on the infinite plane
        let filled = map.flood_fill(GridPos::new(0, 0), 50, TileType::Empty);
        assert_eq!(filled.len(), 50);
        let unique: HashSet<GridPos> = filled.iter().copied().collect();
        assert_eq!(unique.len(), 50);

        assert!(map
            .flood_fill(GridPos::new(0, 0), 0, TileType::Empty)
            .is_empty());
    }

    #[test]
    fn test_fill_stays_in_region() {
        let mut map = TileMap::new();
        floor_block(&mut map, 0, 2);
        map.place_tile(3, 1, TileType::Wall);

        let filled = map.flood_fill(GridPos::new(1, 1), 100, TileType::Floor);
        assert_eq!(filled.len(), 9);
        assert!(filled.iter().all(|p| map.get(p.x, p.y).tile_type() == TileType::Floor));
    }

    #[test]
    fn test_fill_blocked_by_flanked_edge() {
        let mut map = TileMap::new();
        map.place_tile(0, 0, TileType::Floor);
        map.place_tile(1, 0, TileType::Floor);
        // Walls on the diagonal corners of the shared edge
        map.place_tile(0, 1, TileType::Wall);
        map.place_tile(1, -1, TileType::Wall);

        let filled = map.flood_fill(GridPos::new(0, 0), 100, TileType::Floor);
        assert_eq!(filled, vec![GridPos::new(0, 0)]);

        // Removing one corner opens the edge
        map.place_tile(1, -1, TileType::Empty);
        let filled = map.flood_fill(GridPos::new(0, 0), 100, TileType::Floor);
        assert_eq!(filled.len(), 2);
    }

    #[test]
    fn test_fill_stops_at_plane_edge() {
        let mut map = TileMap::new();
        map.place_tile(i32::MAX, i32::MAX, TileType::Floor);
        map.place_tile(i32::MAX - 1, i32::MAX, TileType::Floor);

        let filled = map.flood_fill(GridPos::new(i32::MAX, i32::MAX), 10, TileType::Floor);
        let cells: HashSet<GridPos> = filled.into_iter().collect();
        assert_eq!(
            cells,
            HashSet::from([
                GridPos::new(i32::MAX, i32::MAX),
                GridPos::new(i32::MAX - 1, i32::MAX),
            ])
        );
    }
}
