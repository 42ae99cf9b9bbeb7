//! Uninformed and informed search over a [`GridMap`](gridwalk_core::GridMap).
//!
//! Five algorithms share one skeleton, [`Search`], which differs per
//! [`Algorithm`] only in frontier ordering and priority:
//!
//! - **BFS** and **DFS**: FIFO and LIFO frontiers, no priority
//! - **UCS**: accumulated cost
//! - **Greedy best-first**: [`manhattan`] distance to the goal
//! - **A\***: cost plus Manhattan distance
//!
//! A [`HybridSearch`] chains them (BFS, A*, UCS, Greedy, DFS) until one finds
//! a path.
//!
//! Nothing here draws. A search is an iterator of [`StepEvent`]s; hosts
//! animate or record it by pulling events or by passing an
//! [`ExplorationSink`]. [`SearchRequest`] is the one-call entry point.
//!
//! # Guarantees
//!
//! | Algorithm | Finds a path if one exists | Path is shortest |
//! |---|---|---|
//! | BFS | yes | yes |
//! | DFS | yes | no |
//! | UCS | yes | yes |
//! | Greedy | yes | no |
//! | A* | yes | yes |

mod algorithm;
mod distance;
mod event;
mod frontier;
mod hybrid;
mod reconstruct;
mod request;
mod result;
mod search;

pub use algorithm::{Algorithm, ParseStrategyError, Strategy};
pub use distance::manhattan;
pub use event::{ExplorationSink, FnSink, LogSink, NullSink, Relaxation, StepEvent};
pub use frontier::{Entry, Frontier, FrontierKind};
pub use hybrid::{Attempt, HybridSearch};
pub use reconstruct::{Link, Predecessors};
pub use request::{SearchOutcome, SearchRequest, Steps};
pub use result::{Path, SearchResult};
pub use search::{Search, SearchOptions, SearchStats, UNREACHABLE, run};
