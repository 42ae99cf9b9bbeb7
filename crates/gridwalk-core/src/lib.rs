//! **gridwalk-core**: the maze model searched by `gridwalk-paths`.
//!
//! This crate provides the foundational types of the *gridwalk* workspace:
//! cell geometry, the immutable [`GridMap`] snapshot with its adjacency query,
//! the external [`MazeConfig`] record, and the editable [`Maze`] a host keeps
//! between searches.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod maze;
mod neighbors;

pub use config::{Coord, MAX_CELLS, MazeConfig};
pub use error::{ConfigError, EditError, GridError};
pub use geom::{Bounds, BoundsIter, Cell};
pub use grid::{GridMap, Tile};
pub use maze::Maze;
pub use neighbors::Neighbors;
