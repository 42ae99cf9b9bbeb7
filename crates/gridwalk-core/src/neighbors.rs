use std::array;

use crate::geom::Cell;
use crate::grid::GridMap;

/// Lazy iterator over the passable orthogonal neighbours of a cell.
///
/// Yields in the fixed order up, down, left, right, skipping cells that are
/// outside the grid or blocked. Returned by [`GridMap::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    grid: &'a GridMap,
    candidates: array::IntoIter<Cell, 4>,
}

impl<'a> Neighbors<'a> {
    pub(crate) fn new(grid: &'a GridMap, center: Cell) -> Self {
        Self {
            grid,
            candidates: center.neighbors_4().into_iter(),
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let grid = self.grid;
        self.candidates.find(|&n| grid.is_passable(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len()))
    }
}
