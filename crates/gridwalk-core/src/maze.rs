//! Live, editable maze state held by the host between searches.
//!
//! The host toggles obstacles and moves the start or goal on a [`Maze`], then
//! hands each search a fresh [`GridMap`] from [`Maze::snapshot`]. Edits never
//! reach a snapshot that was already taken, and every edit keeps the grid
//! invariants: start and goal stay in bounds and off obstacles.

use rand::{Rng, RngExt};

use crate::config::MazeConfig;
use crate::error::{ConfigError, EditError};
use crate::geom::Cell;
use crate::grid::{GridMap, Tile};

/// Mutable maze with a remembered initial layout.
#[derive(Debug, Clone)]
pub struct Maze {
    initial: GridMap,
    grid: GridMap,
}

impl Maze {
    /// Load a maze from a configuration record.
    pub fn from_config(cfg: &MazeConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_grid(GridMap::from_config(cfg)?))
    }

    /// Start editing from an existing snapshot.
    pub fn from_grid(grid: GridMap) -> Self {
        Self {
            initial: grid.clone(),
            grid,
        }
    }

    /// The current layout.
    #[inline]
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// An independent copy of the current layout for one search.
    pub fn snapshot(&self) -> GridMap {
        self.grid.clone()
    }

    /// Restore the layout the maze was loaded with.
    pub fn reset(&mut self) {
        self.grid = self.initial.clone();
        log::debug!("maze reset to initial layout");
    }

    /// Flip `c` between empty and obstacle. Returns the new tile.
    ///
    /// The start and goal cannot be blocked.
    pub fn toggle_obstacle(&mut self, c: Cell) -> Result<Tile, EditError> {
        let tile = self.tile(c)?;
        let i = self.grid.index(c).ok_or(EditError::OutOfBounds(c))?;
        let next = match tile {
            Tile::Start => return Err(refuse(EditError::Occupied { cell: c, what: "start" })),
            Tile::Goal => return Err(refuse(EditError::Occupied { cell: c, what: "goal" })),
            Tile::Empty => Tile::Obstacle,
            Tile::Obstacle => Tile::Empty,
        };
        self.grid.set_blocked(i, next == Tile::Obstacle);
        log::debug!("toggled {c} to {next:?}");
        Ok(next)
    }

    /// Move the start to `c`, which must be empty.
    pub fn set_start(&mut self, c: Cell) -> Result<(), EditError> {
        match self.tile(c)? {
            Tile::Start => Ok(()),
            Tile::Goal => Err(refuse(EditError::Occupied { cell: c, what: "goal" })),
            Tile::Obstacle => Err(refuse(EditError::Blocked(c))),
            Tile::Empty => {
                self.grid.set_start(c);
                log::debug!("start moved to {c}");
                Ok(())
            }
        }
    }

    /// Move the goal to `c`, which must be empty.
    pub fn set_goal(&mut self, c: Cell) -> Result<(), EditError> {
        match self.tile(c)? {
            Tile::Goal => Ok(()),
            Tile::Start => Err(refuse(EditError::Occupied { cell: c, what: "start" })),
            Tile::Obstacle => Err(refuse(EditError::Blocked(c))),
            Tile::Empty => {
                self.grid.set_goal(c);
                log::debug!("goal moved to {c}");
                Ok(())
            }
        }
    }

    /// Move the goal to a uniformly chosen empty cell. Returns the new goal.
    pub fn relocate_goal(&mut self, rng: &mut impl Rng) -> Result<Cell, EditError> {
        let free: Vec<Cell> = self
            .grid
            .cells()
            .filter(|&c| matches!(self.grid.tile(c), Ok(Tile::Empty)))
            .collect();
        if free.is_empty() {
            return Err(refuse(EditError::NoFreeCell));
        }
        let c = free[rng.random_range(0..free.len())];
        self.grid.set_goal(c);
        log::debug!("goal relocated to {c}");
        Ok(c)
    }

    fn tile(&self, c: Cell) -> Result<Tile, EditError> {
        self.grid
            .tile(c)
            .map_err(|_| refuse(EditError::OutOfBounds(c)))
    }
}

fn refuse(err: EditError) -> EditError {
    log::warn!("maze edit refused: {err}");
    err
}
