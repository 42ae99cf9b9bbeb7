//! Text drawing of a grid with exploration and path markers.

use std::fmt;

use gridwalk_core::{Cell, GridMap, Tile};
use gridwalk_paths::{ExplorationSink, SearchResult, StepEvent};

/// Marker for an expanded cell.
pub const VISITED: char = '+';
/// Marker for a cell on the found path.
pub const ON_PATH: char = 'o';

/// Accumulates the markers of one search over a grid.
///
/// For the hybrid chain only the latest attempt is kept: each
/// `AttemptStarted` wipes the board.
pub struct Board<'g> {
    grid: &'g GridMap,
    visited: Vec<bool>,
    path: Vec<bool>,
}

impl<'g> Board<'g> {
    pub fn new(grid: &'g GridMap) -> Self {
        let len = grid.bounds().len();
        Self {
            grid,
            visited: vec![false; len],
            path: vec![false; len],
        }
    }

    fn mark(marks: &mut [bool], grid: &GridMap, c: Cell) {
        if let Some(i) = grid.index(c) {
            marks[i] = true;
        }
    }

    fn glyph(&self, c: Cell) -> Result<char, fmt::Error> {
        let tile = self.grid.tile(c).map_err(|_| fmt::Error)?;
        let i = self.grid.index(c).ok_or(fmt::Error)?;
        Ok(match tile {
            Tile::Empty if self.path[i] => ON_PATH,
            Tile::Empty if self.visited[i] => VISITED,
            t => t.glyph(),
        })
    }
}

impl ExplorationSink for Board<'_> {
    fn on_event(&mut self, event: &StepEvent) {
        match event {
            StepEvent::AttemptStarted(_) => {
                self.visited.fill(false);
                self.path.fill(false);
            }
            StepEvent::Visited(c) => Self::mark(&mut self.visited, self.grid, *c),
            StepEvent::Finished(SearchResult::PathFound(p)) => {
                for &c in p {
                    Self::mark(&mut self.path, self.grid, c);
                }
            }
            _ => {}
        }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                write!(f, "{}", self.glyph(Cell::new(row, col))?)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Whether `event` is one of the status lines printed without `--trace`.
pub fn is_status(event: &StepEvent) -> bool {
    !matches!(event, StepEvent::Visited(_) | StepEvent::Relaxed(_))
}
