//! The [`GridMap`] snapshot searched by the pathfinding engine.
//!
//! A `GridMap` is an owned, immutable value: it is built once per search
//! request (from a [`MazeConfig`], a live [`Maze`](crate::Maze), or ASCII
//! text) and is only ever read while a search runs. Construction enforces the
//! invariants every algorithm relies on, so searches never re-validate.
//!
//! ## Text format
//!
//! [`GridMap::parse`] and the `Display` impl share one layout, one line per
//! row:
//!
//! ```text
//! S..#
//! .#..
//! ...G
//! ```
//!
//! `.` empty, `#` obstacle, `S` start, `G` goal. `*` marks a start that is
//! also the goal.

use std::fmt;

use crate::config::MazeConfig;
use crate::error::{ConfigError, GridError};
use crate::geom::{Bounds, BoundsIter, Cell};
use crate::neighbors::Neighbors;

/// Classification of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Obstacle,
    Start,
    Goal,
}

impl Tile {
    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// The character used by the text format.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }
}

/// Read-only view of passable and blocked cells with one start and one goal.
///
/// Invariants: start and goal are in bounds and not obstacles. Start and goal
/// may coincide; searches treat that as an immediate, zero-step success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    bounds: Bounds,
    blocked: Vec<bool>,
    start: Cell,
    goal: Cell,
}

impl GridMap {
    /// Build a snapshot from an external configuration.
    pub fn from_config(cfg: &MazeConfig) -> Result<Self, ConfigError> {
        let bounds = cfg.bounds()?;
        let start = MazeConfig::cell("start", cfg.start, bounds)?;
        let goal = MazeConfig::cell("goal", cfg.goal, bounds)?;
        let mut blocked = vec![false; bounds.len()];
        for &c in &cfg.obstacles {
            let cell = MazeConfig::cell("obstacle", c, bounds)?;
            if let Some(i) = bounds.index(cell) {
                blocked[i] = true;
            }
        }
        Self::from_parts(bounds, blocked, start, goal)
    }

    /// An obstacle-free grid.
    pub fn open(rows: i32, cols: i32, start: Cell, goal: Cell) -> Result<Self, ConfigError> {
        Self::from_config(&MazeConfig::new(
            i64::from(rows),
            i64::from(cols),
            start,
            goal,
        ))
    }

    /// Assemble a snapshot, checking that start and goal are passable.
    ///
    /// `blocked` is row-major and must have `bounds.len()` entries; start and
    /// goal must already be in bounds.
    pub(crate) fn from_parts(
        bounds: Bounds,
        blocked: Vec<bool>,
        start: Cell,
        goal: Cell,
    ) -> Result<Self, ConfigError> {
        debug_assert_eq!(blocked.len(), bounds.len());
        let grid = Self {
            bounds,
            blocked,
            start,
            goal,
        };
        if !grid.is_passable(start) {
            return Err(ConfigError::OnObstacle {
                what: "start",
                cell: start,
            });
        }
        if !grid.is_passable(goal) {
            return Err(ConfigError::OnObstacle {
                what: "goal",
                cell: goal,
            });
        }
        Ok(grid)
    }

    /// Parse the text format described in the module docs.
    ///
    /// Leading and trailing whitespace of the whole text is ignored; every
    /// line must have the same width.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let text = text.trim();
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let rows = lines.len() as i64;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i64;
        let mut cfg = MazeConfig {
            rows,
            cols,
            start: [-1, -1],
            goal: [-1, -1],
            obstacles: Vec::new(),
        };
        cfg.bounds()?;

        let mut start = None;
        let mut goal = None;
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count() as i64;
            if width != cols {
                return Err(ConfigError::RaggedRows {
                    row,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => cfg.obstacles.push([row as i64, col as i64]),
                    'S' => set_once("start", &mut start, cell)?,
                    'G' => set_once("goal", &mut goal, cell)?,
                    '*' => {
                        set_once("start", &mut start, cell)?;
                        set_once("goal", &mut goal, cell)?;
                    }
                    _ => return Err(ConfigError::InvalidGlyph { ch, cell }),
                }
            }
        }
        let start = start.ok_or(ConfigError::Missing("start"))?;
        let goal = goal.ok_or(ConfigError::Missing("goal"))?;
        cfg.start = [i64::from(start.row), i64::from(start.col)];
        cfg.goal = [i64::from(goal.row), i64::from(goal.col)];
        Self::from_config(&cfg)
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Row-major flat index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        self.bounds.index(c)
    }

    /// Whether `c` is in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| !self.blocked[i])
    }

    /// Classification of `c`. A start that is also the goal reads as
    /// [`Tile::Start`].
    pub fn tile(&self, c: Cell) -> Result<Tile, GridError> {
        let i = self.index(c).ok_or(GridError::InvalidCell {
            cell: c,
            bounds: self.bounds,
        })?;
        Ok(if c == self.start {
            Tile::Start
        } else if c == self.goal {
            Tile::Goal
        } else if self.blocked[i] {
            Tile::Obstacle
        } else {
            Tile::Empty
        })
    }

    /// Passable orthogonal neighbours of `c`, in the order up, down, left,
    /// right.
    ///
    /// Fails with [`GridError::InvalidCell`] when `c` is outside the grid.
    pub fn neighbors(&self, c: Cell) -> Result<Neighbors<'_>, GridError> {
        if !self.contains(c) {
            return Err(GridError::InvalidCell {
                cell: c,
                bounds: self.bounds,
            });
        }
        Ok(Neighbors::new(self, c))
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn cells(&self) -> BoundsIter {
        self.bounds.iter()
    }

    /// Iterator over the obstacle cells, row-major.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| self.bounds.cell(i))
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Export as a configuration record.
    pub fn to_config(&self) -> MazeConfig {
        MazeConfig::new(
            i64::from(self.rows()),
            i64::from(self.cols()),
            self.start,
            self.goal,
        )
        .with_obstacles(self.obstacles())
    }

    pub(crate) fn set_blocked(&mut self, i: usize, blocked: bool) {
        self.blocked[i] = blocked;
    }

    pub(crate) fn set_start(&mut self, c: Cell) {
        self.start = c;
    }

    pub(crate) fn set_goal(&mut self, c: Cell) {
        self.goal = c;
    }

    fn glyph_at(&self, c: Cell) -> char {
        if c == self.start && c == self.goal {
            return '*';
        }
        self.tile(c).map_or('?', Tile::glyph)
    }
}

fn set_once(what: &'static str, slot: &mut Option<Cell>, cell: Cell) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::Duplicate { what, cell });
    }
    *slot = Some(cell);
    Ok(())
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols() {
                write!(f, "{}", self.glyph_at(Cell::new(row, col)))?;
            }
        }
        Ok(())
    }
}
