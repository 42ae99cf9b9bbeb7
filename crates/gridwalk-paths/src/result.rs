use std::fmt;

use gridwalk_core::Cell;

/// An ordered route from the cell after the start through the goal.
///
/// The start itself is not part of the path, so on a unit-cost grid the path
/// length is also its cost. An empty path is the start-equals-goal route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total step cost. Every step costs 1.
    #[inline]
    pub fn cost(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Whether `c` is on the path.
    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }

    /// Whether the path is a connected walk from `start`: every step moves to
    /// an orthogonally adjacent cell.
    pub fn is_connected_from(&self, start: Cell) -> bool {
        let mut prev = start;
        self.cells.iter().all(|&c| {
            let ok = prev.is_adjacent(c);
            prev = c;
            ok
        })
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Outcome of a search. `NoPath` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    PathFound(Path),
    NoPath,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(p) => Some(p),
            Self::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::PathFound(p) => Some(p),
            Self::NoPath => None,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound(p) => write!(f, "path found, cost {}", p.cost()),
            Self::NoPath => f.write_str("no path"),
        }
    }
}
