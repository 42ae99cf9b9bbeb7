//! Predecessor map and path reconstruction, shared by every algorithm.

use gridwalk_core::{Bounds, Cell};

use crate::result::Path;

/// How a visited cell was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link {
    /// The search started here. Distinct from "never visited", which is the
    /// absence of a link.
    Start,
    /// Reached by one step from this cell.
    From(Cell),
}

/// Flat per-cell backlinks over a grid rectangle.
#[derive(Debug, Clone)]
pub struct Predecessors {
    bounds: Bounds,
    links: Vec<Option<Link>>,
}

impl Predecessors {
    /// An empty map: no cell visited.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            links: vec![None; bounds.len()],
        }
    }

    /// Forget every link.
    pub fn clear(&mut self) {
        for l in self.links.iter_mut() {
            *l = None;
        }
    }

    /// Record `c` as the search root.
    pub fn set_start(&mut self, c: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.links[i] = Some(Link::Start);
        }
    }

    /// Record that `c` was reached from `from`, replacing any earlier link.
    pub fn link(&mut self, c: Cell, from: Cell) {
        if let Some(i) = self.bounds.index(c) {
            self.links[i] = Some(Link::From(from));
        }
    }

    /// The link of `c`, or `None` if it was never reached.
    pub fn get(&self, c: Cell) -> Option<Link> {
        self.bounds.index(c).and_then(|i| self.links[i])
    }

    /// Whether `c` has any link, including the start sentinel.
    pub fn is_reached(&self, c: Cell) -> bool {
        self.get(c).is_some()
    }

    /// Number of cells with a link.
    pub fn reached_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    /// Walk back from `goal` to `start` and return the route between them,
    /// excluding `start` and including `goal`.
    ///
    /// Returns an empty path when `goal` was never reached, when the walk
    /// ends at the start sentinel of a different cell, or when `start ==
    /// goal`.
    pub fn reconstruct(&self, start: Cell, goal: Cell) -> Path {
        let mut cells = Vec::new();
        let mut cur = goal;
        while cur != start {
            // A well-formed map is a tree; more steps than cells means a cycle.
            if cells.len() >= self.links.len() {
                return Path::default();
            }
            match self.get(cur) {
                Some(Link::From(prev)) => {
                    cells.push(cur);
                    cur = prev;
                }
                Some(Link::Start) | None => return Path::default(),
            }
        }
        cells.reverse();
        Path::new(cells)
    }
}
