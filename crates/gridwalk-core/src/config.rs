//! The maze configuration record consumed by [`GridMap::from_config`].
//!
//! The JSON shape is
//!
//! ```json
//! { "rows": 4, "cols": 4, "start": [0, 0], "goal": [3, 3],
//!   "obstacles": [[1, 1], [2, 1]] }
//! ```
//!
//! `obstacles` may be omitted. Values are never clamped: anything that does
//! not describe a valid grid is a [`ConfigError`].
//!
//! [`GridMap::from_config`]: crate::GridMap::from_config

use crate::error::ConfigError;
use crate::geom::{Bounds, Cell};

/// Largest accepted grid, in cells. Keeps the flat per-cell tables small and
/// every accumulated path cost far below `i32::MAX`.
pub const MAX_CELLS: usize = 1 << 24;

/// A `[row, col]` pair as it appears in a configuration document.
pub type Coord = [i64; 2];

/// External description of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct MazeConfig {
    pub rows: i64,
    pub cols: i64,
    pub start: Coord,
    pub goal: Coord,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Coord>,
}

impl Default for MazeConfig {
    /// An empty 4x4 maze from the top-left to the bottom-right corner.
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            start: [0, 0],
            goal: [3, 3],
            obstacles: Vec::new(),
        }
    }
}

impl MazeConfig {
    /// An obstacle-free configuration.
    pub fn new(rows: i64, cols: i64, start: Cell, goal: Cell) -> Self {
        Self {
            rows,
            cols,
            start: coord(start),
            goal: coord(goal),
            obstacles: Vec::new(),
        }
    }

    /// Add obstacles (builder).
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        self.obstacles.extend(obstacles.into_iter().map(coord));
        self
    }

    /// Validated grid bounds.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        let invalid = || ConfigError::InvalidDimensions {
            rows: self.rows,
            cols: self.cols,
        };
        let rows = i32::try_from(self.rows).map_err(|_| invalid())?;
        let cols = i32::try_from(self.cols).map_err(|_| invalid())?;
        if rows <= 0 || cols <= 0 {
            return Err(invalid());
        }
        let cells = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or_else(invalid)?;
        if cells > MAX_CELLS {
            return Err(invalid());
        }
        Ok(Bounds::new(rows, cols))
    }

    /// Convert a configured coordinate into a cell inside `bounds`.
    pub(crate) fn cell(
        what: &'static str,
        [row, col]: Coord,
        bounds: Bounds,
    ) -> Result<Cell, ConfigError> {
        let out_of_bounds = || ConfigError::OutOfBounds {
            what,
            row,
            col,
            bounds,
        };
        let r = i32::try_from(row).map_err(|_| out_of_bounds())?;
        let c = i32::try_from(col).map_err(|_| out_of_bounds())?;
        let cell = Cell::new(r, c);
        if !bounds.contains(cell) {
            return Err(out_of_bounds());
        }
        Ok(cell)
    }

    /// Parse a configuration from a JSON string.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a configuration from a JSON reader.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize to pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[inline]
pub(crate) fn coord(c: Cell) -> Coord {
    [i64::from(c.row), i64::from(c.col)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open_4x4() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.bounds().unwrap(), Bounds::new(4, 4));
        assert_eq!(cfg.start, [0, 0]);
        assert_eq!(cfg.goal, [3, 3]);
        assert!(cfg.obstacles.is_empty());
    }

    #[test]
    fn builder_adds_obstacles() {
        let cfg = MazeConfig::new(3, 5, Cell::new(0, 0), Cell::new(2, 4))
            .with_obstacles([Cell::new(1, 1), Cell::new(1, 2)]);
        assert_eq!(cfg.obstacles, vec![[1, 1], [1, 2]]);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (rows, cols) in [(0, 4), (4, 0), (-1, 3), (3, -7)] {
            let cfg = MazeConfig {
                rows,
                cols,
                ..MazeConfig::default()
            };
            assert!(matches!(
                cfg.bounds(),
                Err(ConfigError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn rejects_dimensions_beyond_i32() {
        let cfg = MazeConfig {
            rows: i64::from(i32::MAX) + 1,
            ..MazeConfig::default()
        };
        assert!(cfg.bounds().is_err());
    }

    #[test]
    fn rejects_grids_over_the_cell_cap() {
        let huge = MazeConfig {
            rows: i64::from(i32::MAX),
            cols: i64::from(i32::MAX),
            ..MazeConfig::default()
        };
        assert!(matches!(
            huge.bounds(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            crate::GridMap::from_config(&huge),
            Err(ConfigError::InvalidDimensions { .. })
        ));

        let side = 1i64 << 12;
        let at_cap = MazeConfig::new(side, side, Cell::new(0, 0), Cell::new(1, 1));
        assert_eq!(at_cap.bounds().unwrap().len(), MAX_CELLS);
        let over = MazeConfig {
            cols: side + 1,
            ..at_cap
        };
        assert!(over.bounds().is_err());
    }

    #[test]
    fn cell_conversion_checks_bounds() {
        let b = Bounds::new(2, 2);
        assert_eq!(MazeConfig::cell("start", [1, 1], b).unwrap(), Cell::new(1, 1));
        let err = MazeConfig::cell("goal", [2, 0], b).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfBounds {
                what: "goal",
                row: 2,
                col: 0,
                ..
            }
        ));
        assert!(MazeConfig::cell("obstacle", [-1, 0], b).is_err());
        assert!(MazeConfig::cell("obstacle", [0, i64::MAX], b).is_err());
    }
}
