//! Error types for grid construction, grid queries and live maze edits.

use thiserror::Error;

use crate::geom::{Bounds, Cell};

/// A maze configuration that cannot describe a valid grid.
///
/// Raised once, when a [`GridMap`](crate::GridMap) or [`Maze`](crate::Maze)
/// is built; no search ever starts from a rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `rows` or `cols` is not a positive integer, or the grid has more than
    /// [`MAX_CELLS`](crate::config::MAX_CELLS) cells.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },

    /// A start, goal or obstacle coordinate lies outside the grid.
    #[error("{what} coordinate [{row}, {col}] is outside the {bounds} grid")]
    OutOfBounds {
        what: &'static str,
        row: i64,
        col: i64,
        bounds: Bounds,
    },

    /// The start or goal sits on an obstacle.
    #[error("{what} {cell} is on an obstacle")]
    OnObstacle { what: &'static str, cell: Cell },

    /// A text-format row differs in width from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRows { row: usize, expected: i64, found: i64 },

    /// A text-format character that is not one of `.#SG*`.
    #[error("invalid glyph {ch:?} at {cell}")]
    InvalidGlyph { ch: char, cell: Cell },

    /// The text format has no start or no goal.
    #[error("maze has no {0}")]
    Missing(&'static str),

    /// The text format has more than one start or goal.
    #[error("second {what} at {cell}")]
    Duplicate { what: &'static str, cell: Cell },

    /// The configuration document could not be parsed.
    #[cfg(feature = "serde")]
    #[error("malformed maze configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A query against a [`GridMap`](crate::GridMap) outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {cell} is outside the {bounds} grid")]
    InvalidCell { cell: Cell, bounds: Bounds },
}

/// A refused edit to a live [`Maze`](crate::Maze). The maze is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("cell {0} is outside the maze")]
    OutOfBounds(Cell),

    /// The target cell already holds the start or the goal.
    #[error("cell {cell} is occupied by the {what}")]
    Occupied { cell: Cell, what: &'static str },

    /// The target cell is an obstacle.
    #[error("cell {0} is an obstacle")]
    Blocked(Cell),

    /// No cell is free to receive a relocated goal.
    #[error("no free cell available")]
    NoFreeCell,
}
