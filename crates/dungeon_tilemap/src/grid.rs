//! Sparse storage over the whole integer plane.
//!
//! Only cells that were explicitly written occupy memory; every other cell
//! reads back as the grid's default value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

/// Integer cell coordinate on the unbounded plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `(dx, dy)` away, or `None` past the edge of the `i32` plane
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cell position paired with the value stored there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<T> {
    pub x: i32,
    pub y: i32,
    pub value: T,
}

impl<T> GridCell<T> {
    pub fn pos(&self) -> GridPos {
        GridPos::new(self.x, self.y)
    }
}

/// Infinite 2D associative store with a shared default for unset cells.
///
/// Rows are keyed by `x`, and each row maps `y` to a value. A row is created
/// the first time one of its cells is written and dropped once its last
/// explicit entry is reset.
#[derive(Debug, Clone)]
pub struct SparseGrid<T> {
    rows: HashMap<i32, HashMap<i32, T>>,
    default: T,
}

impl<T: Clone> SparseGrid<T> {
    pub fn new(default: T) -> Self {
        Self {
            rows: HashMap::new(),
            default,
        }
    }

    /// Value at (x, y), or the default if the cell was never set
    pub fn get(&self, x: i32, y: i32) -> &T {
        self.rows
            .get(&x)
            .and_then(|row| row.get(&y))
            .unwrap_or(&self.default)
    }

    /// Value of the cell `(dx, dy)` away from (x, y). Positions past the
    /// edge of the plane read as the default.
    pub fn get_offset(&self, x: i32, y: i32, dx: i32, dy: i32) -> &T {
        match GridPos::new(x, y).checked_offset(dx, dy) {
            Some(pos) => self.get(pos.x, pos.y),
            None => &self.default,
        }
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) {
        self.rows.entry(x).or_default().insert(y, value);
    }

    /// Remove the explicit entry at (x, y) so it reads as the default again
    pub fn reset(&mut self, x: i32, y: i32) {
        if let Some(row) = self.rows.get_mut(&x) {
            row.remove(&y);
            if row.is_empty() {
                self.rows.remove(&x);
            }
        }
    }

    /// Whether (x, y) holds an explicit entry
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rows.get(&x).is_some_and(|row| row.contains_key(&y))
    }

    /// All `(2 * size + 1)^2` cells of the square centered on (x, y).
    ///
    /// Row-major: `x` is the outer loop, `y` the inner one. Unset cells are
    /// reported with the default value. Near the edge of the `i32` plane the
    /// square is cut off instead of wrapping around.
    pub fn get_square(&self, x: i32, y: i32, size: u32) -> Vec<GridCell<T>> {
        let (xs, ys) = (square_span(x, size), square_span(y, size));
        let capacity = span_len(&xs).checked_mul(span_len(&ys)).unwrap_or_default();

        let mut square = Vec::with_capacity(capacity);
        for i in xs {
            for j in ys.clone() {
                square.push(GridCell {
                    x: i,
                    y: j,
                    value: self.get(i, j).clone(),
                });
            }
        }
        square
    }

    /// 4-connected neighbors in `[west, east, north, south]` order.
    ///
    /// North is `+y`. Neighbors past the edge of the plane are left out.
    pub fn get_neighbors(&self, x: i32, y: i32) -> Vec<GridCell<T>> {
        let pos = GridPos::new(x, y);
        [(-1, 0), (1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(|(dx, dy)| pos.checked_offset(dx, dy))
            .map(|n| GridCell {
                x: n.x,
                y: n.y,
                value: self.get(n.x, n.y).clone(),
            })
            .collect()
    }

    /// Every explicitly set cell. Order is arbitrary but stable while the
    /// grid is not mutated.
    pub fn get_all(&self) -> Vec<GridCell<T>> {
        self.iter()
            .map(|(pos, value)| GridCell {
                x: pos.x,
                y: pos.y,
                value: value.clone(),
            })
            .collect()
    }

    /// Positions of every explicitly set cell
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.iter().map(|(pos, _)| pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &T)> + '_ {
        self.rows.iter().flat_map(|(&x, row)| {
            row.iter().map(move |(&y, value)| (GridPos::new(x, y), value))
        })
    }

    /// Number of explicitly stored cells
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

/// `c - size ..= c + size`, clamped to the `i32` range
fn square_span(c: i32, size: u32) -> RangeInclusive<i32> {
    let c = i64::from(c);
    let size = i64::from(size);
    let lo = i32::try_from(c - size).unwrap_or(i32::MIN);
    let hi = i32::try_from(c + size).unwrap_or(i32::MAX);
    lo..=hi
}

fn span_len(span: &RangeInclusive<i32>) -> usize {
    let len = i64::from(*span.end()) - i64::from(*span.start()) + 1;
    usize::try_from(len).unwrap_or_default()
}

impl<T: Clone + Default> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
