//! Wall autotiling
//!
//! Derives the mesh shape and rotation of a wall from which of its four
//! 4-connected neighbors are walls too. Renderers rotate a fixed mesh library
//! by `direction * 90°`, so every entry of the table below is load-bearing.
//!
//! ```text
//!         N (+y)
//!           │
//!  W (-x) ──┼── E (+x)
//!           │
//!         S (-y)
//! ```

use crate::grid::SparseGrid;
use crate::tile::{JunctionType, Tile};

/// Which 4-connected neighbors of a cell currently hold a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WallNeighbors {
    pub north: bool,
    pub south: bool,
    pub west: bool,
    pub east: bool,
}

impl WallNeighbors {
    pub fn new(north: bool, south: bool, west: bool, east: bool) -> Self {
        Self {
            north,
            south,
            west,
            east,
        }
    }

    /// Sample the neighbors of (x, y) in `grid`. Nothing past the edge of
    /// the plane is a wall.
    pub fn sample(grid: &SparseGrid<Tile>, x: i32, y: i32) -> Self {
        Self {
            north: grid.get_offset(x, y, 0, 1).is_wall(),
            south: grid.get_offset(x, y, 0, -1).is_wall(),
            west: grid.get_offset(x, y, -1, 0).is_wall(),
            east: grid.get_offset(x, y, 1, 0).is_wall(),
        }
    }

    /// Number of wall neighbors
    pub fn count(&self) -> usize {
        [self.north, self.south, self.west, self.east]
            .into_iter()
            .filter(|&b| b)
            .count()
    }

    /// All 16 neighbor combinations
    pub fn all() -> impl Iterator<Item = WallNeighbors> {
        (0u8..16).map(|bits| WallNeighbors {
            north: bits & 0b1000 != 0,
            south: bits & 0b0100 != 0,
            west: bits & 0b0010 != 0,
            east: bits & 0b0001 != 0,
        })
    }
}

/// Pick the junction shape and quarter-turn rotation for a wall.
///
/// Total over all 16 inputs.
pub fn classify(neighbors: WallNeighbors) -> (JunctionType, u8) {
    let WallNeighbors {
        north,
        south,
        west,
        east,
    } = neighbors;

    match (north, south, west, east) {
        // Straight runs
        (true, true, false, false) => (JunctionType::Base, 0),
        (false, false, true, true) => (JunctionType::Base, 1),
        // Dead ends
        (false, false, false, true) => (JunctionType::T1, 1),
        (false, false, true, false) => (JunctionType::T1, 3),
        (true, false, false, false) => (JunctionType::T1, 0),
        (false, true, false, false) => (JunctionType::T1, 2),
        // Corners
        (true, false, true, false) => (JunctionType::T2, 3),
        (true, false, false, true) => (JunctionType::T2, 0),
        (false, true, true, false) => (JunctionType::T2, 2),
        (false, true, false, true) => (JunctionType::T2, 1),
        // Tees
        (true, false, true, true) => (JunctionType::T3, 3),
        (true, true, true, false) => (JunctionType::T3, 2),
        (true, true, false, true) => (JunctionType::T3, 0),
        (false, true, true, true) => (JunctionType::T3, 1),
        (true, true, true, true) => (JunctionType::T4, 0),
        (false, false, false, false) => (JunctionType::T0, 0),
    }
}

/// Recompute the wall at (x, y) in place.
///
/// Returns `false` without touching the grid if the cell is not a wall.
pub(crate) fn update_wall(grid: &mut SparseGrid<Tile>, x: i32, y: i32) -> bool {
    if !grid.get(x, y).is_wall() {
        return false;
    }

    let (junction, direction) = classify(WallNeighbors::sample(grid, x, y));
    grid.set(x, y, Tile::Wall { direction, junction });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn n(north: bool, south: bool, west: bool, east: bool) -> WallNeighbors {
        WallNeighbors::new(north, south, west, east)
    }

    #[test]
    fn test_classifier_table() {
        let table = [
            (n(true, true, false, false), JunctionType::Base, 0),
            (n(false, false, true, true), JunctionType::Base, 1),
            (n(false, false, false, true), JunctionType::T1, 1),
            (n(false, false, true, false), JunctionType::T1, 3),
            (n(true, false, false, false), JunctionType::T1, 0),
            (n(false, true, false, false), JunctionType::T1, 2),
            (n(true, false, true, false), JunctionType::T2, 3),
            (n(true, false, false, true), JunctionType::T2, 0),
            (n(false, true, true, false), JunctionType::T2, 2),
            (n(false, true, false, true), JunctionType::T2, 1),
            (n(true, false, true, true), JunctionType::T3, 3),
            (n(true, true, true, false), JunctionType::T3, 2),
            (n(true, true, false, true), JunctionType::T3, 0),
            (n(false, true, true, true), JunctionType::T3, 1),
            (n(true, true, true, true), JunctionType::T4, 0),
            (n(false, false, false, false), JunctionType::T0, 0),
        ];

        for (input, junction, direction) in table {
            assert_eq!(classify(input), (junction, direction), "input {input:?}");
        }

        let covered: HashSet<WallNeighbors> = table.iter().map(|(input, _, _)| *input).collect();
        assert_eq!(covered.len(), 16);
    }

    #[test]
    fn test_all_combinations_classified() {
        let outputs: HashSet<(JunctionType, u8)> = WallNeighbors::all().map(classify).collect();
        assert_eq!(WallNeighbors::all().count(), 16);
        // Base x2, T1 x4, T2 x4, T3 x4, T4, T0
        assert_eq!(outputs.len(), 16);
        for (_, direction) in outputs {
            assert!(direction < 4);
        }
    }

    #[test]
    fn test_junction_matches_neighbor_count() {
        for neighbors in WallNeighbors::all() {
            let (junction, _) = classify(neighbors);
            let expected = match neighbors.count() {
                0 => vec![JunctionType::T0],
                1 => vec![JunctionType::T1],
                2 => vec![JunctionType::Base, JunctionType::T2],
                3 => vec![JunctionType::T3],
                _ => vec![JunctionType::T4],
            };
            assert!(expected.contains(&junction), "{neighbors:?} -> {junction:?}");
        }
    }

    #[test]
    fn test_update_wall_skips_non_walls() {
        let mut grid = SparseGrid::new(Tile::Empty);
        grid.set(0, 0, Tile::Floor);
        grid.set(1, 0, Tile::PLACEHOLDER_WALL);

        assert!(!update_wall(&mut grid, 0, 0));
        assert_eq!(*grid.get(0, 0), Tile::Floor);
        assert!(!update_wall(&mut grid, 5, 5));
        assert!(!grid.contains(5, 5));
    }

    #[test]
    fn test_update_wall_reads_neighbors() {
        let mut grid = SparseGrid::new(Tile::Empty);
        for x in -1..=1 {
            grid.set(x, 0, Tile::PLACEHOLDER_WALL);
        }

        assert!(update_wall(&mut grid, 0, 0));
        assert_eq!(
            *grid.get(0, 0),
            Tile::Wall {
                direction: 1,
                junction: JunctionType::Base
            }
        );

        assert!(update_wall(&mut grid, 1, 0));
        assert_eq!(
            *grid.get(1, 0),
            Tile::Wall {
                direction: 3,
                junction: JunctionType::T1
            }
        );
    }
}
