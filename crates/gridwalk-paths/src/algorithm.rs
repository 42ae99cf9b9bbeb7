//! The five search variants and the strategy selector.
//!
//! Every variant runs the same skeleton (see [`Search`](crate::Search)); they
//! differ only in frontier ordering, whether accumulated cost is tracked, and
//! the priority formula:
//!
//! | Variant | Frontier | Priority |
//! |---|---|---|
//! | BFS | Fifo | none |
//! | DFS | Lifo | none |
//! | UCS | PriorityMin | `g` |
//! | Greedy | PriorityMin | `h` |
//! | A* | PriorityMin | `g + h` |
//!
//! `g` is the accumulated step cost and `h` the [`manhattan`](crate::manhattan)
//! distance to the goal.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::frontier::FrontierKind;

/// A single search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    AStar,
}

impl Algorithm {
    /// All variants in menu order.
    pub const ALL: [Algorithm; 5] = [Self::Bfs, Self::Dfs, Self::AStar, Self::Ucs, Self::Greedy];

    /// Fallback order of the hybrid strategy: complete and optimal searches
    /// first, DFS last.
    pub const HYBRID_ORDER: [Algorithm; 5] =
        [Self::Bfs, Self::AStar, Self::Ucs, Self::Greedy, Self::Dfs];

    /// Frontier ordering used by this variant.
    pub const fn frontier(self) -> FrontierKind {
        match self {
            Self::Bfs => FrontierKind::Fifo,
            Self::Dfs => FrontierKind::Lifo,
            Self::Ucs | Self::Greedy | Self::AStar => FrontierKind::PriorityMin,
        }
    }

    /// Whether a discovered cell may be re-parented when a strictly cheaper
    /// route is found. Other variants keep the first predecessor they record.
    pub const fn tracks_cost(self) -> bool {
        matches!(self, Self::Ucs | Self::AStar)
    }

    /// Whether the priority uses the distance-to-goal heuristic.
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Ucs | Self::AStar)
    }

    /// Frontier priority of a cell reached at accumulated cost `cost` with
    /// heuristic `heuristic`. `None` for the unprioritized frontiers.
    pub const fn priority(self, cost: i32, heuristic: i32) -> Option<i32> {
        match self {
            Self::Bfs | Self::Dfs => None,
            Self::Ucs => Some(cost),
            Self::Greedy => Some(heuristic),
            Self::AStar => Some(cost + heuristic),
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Greedy => "Greedy",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Strategy>()?.algorithm() {
            Some(alg) => Ok(alg),
            None => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// What a caller asks the engine to run: one algorithm or the hybrid chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    AStar,
    Hybrid,
}

impl Strategy {
    /// The single algorithm this strategy runs, or `None` for
    /// [`Strategy::Hybrid`].
    pub const fn algorithm(self) -> Option<Algorithm> {
        match self {
            Self::Bfs => Some(Algorithm::Bfs),
            Self::Dfs => Some(Algorithm::Dfs),
            Self::Ucs => Some(Algorithm::Ucs),
            Self::Greedy => Some(Algorithm::Greedy),
            Self::AStar => Some(Algorithm::AStar),
            Self::Hybrid => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self.algorithm() {
            Some(alg) => alg.name(),
            None => "Hybrid",
        }
    }
}

impl From<Algorithm> for Strategy {
    fn from(alg: Algorithm) -> Self {
        match alg {
            Algorithm::Bfs => Self::Bfs,
            Algorithm::Dfs => Self::Dfs,
            Algorithm::Ucs => Self::Ucs,
            Algorithm::Greedy => Self::Greedy,
            Algorithm::AStar => Self::AStar,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Case-insensitive; accepts short names (`bfs`, `a*`) and long ones
    /// (`breadth-first`, `uniform-cost`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Ok(match key.as_str() {
            "bfs" | "breadth-first" => Self::Bfs,
            "dfs" | "depth-first" => Self::Dfs,
            "ucs" | "uniform-cost" | "dijkstra" => Self::Ucs,
            "greedy" | "best-first" | "greedy-best-first" => Self::Greedy,
            "a*" | "astar" | "a-star" => Self::AStar,
            "hybrid" => Self::Hybrid,
            _ => return Err(ParseStrategyError(s.to_string())),
        })
    }
}

/// Unrecognized algorithm or strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?}")]
pub struct ParseStrategyError(pub String);
