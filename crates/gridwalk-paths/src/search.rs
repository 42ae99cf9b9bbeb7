//! The search skeleton shared by all five algorithms, exposed as a lazy
//! iterator of [`StepEvent`]s.
//!
//! Each call to `next()` expands at most one cell, so the caller decides the
//! pacing: drain it in one go with [`Search::run`], or pull one event per
//! animation frame. Dropping a `Search` part-way is always fine; it owns all
//! of its mutable state and only borrows the grid.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use gridwalk_core::{Cell, GridMap};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::event::{ExplorationSink, Relaxation, StepEvent};
use crate::frontier::Frontier;
use crate::reconstruct::Predecessors;
use crate::result::{Path, SearchResult};

/// Sentinel value meaning "no cost recorded" in the cost map.
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-run switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Emit a [`StepEvent::Relaxed`] for every accepted predecessor update.
    pub trace_relaxations: bool,
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and expanded, including start and goal.
    pub expanded: usize,
    /// Frontier pushes, including the start and any re-pushed cells.
    pub pushed: usize,
    /// Largest frontier size reached.
    pub max_frontier: usize,
    /// Length of the returned path, `None` until a path is found.
    pub path_len: Option<usize>,
}

/// One run of `algorithm` over a borrowed grid snapshot.
pub struct Search<'g> {
    grid: &'g GridMap,
    algorithm: Algorithm,
    options: SearchOptions,
    frontier: Frontier,
    preds: Predecessors,
    costs: Vec<i32>,
    closed: Vec<bool>,
    pending: VecDeque<StepEvent>,
    result: Option<SearchResult>,
    stats: SearchStats,
}

impl<'g> Search<'g> {
    /// Prepare a run with default options. Nothing is expanded until the
    /// iterator is advanced.
    pub fn new(grid: &'g GridMap, algorithm: Algorithm) -> Self {
        Self::with_options(grid, algorithm, SearchOptions::default())
    }

    pub fn with_options(grid: &'g GridMap, algorithm: Algorithm, options: SearchOptions) -> Self {
        let len = grid.bounds().len();
        let mut search = Self {
            grid,
            algorithm,
            options,
            frontier: Frontier::new(algorithm.frontier()),
            preds: Predecessors::new(grid.bounds()),
            costs: vec![UNREACHABLE; len],
            closed: vec![false; len],
            pending: VecDeque::new(),
            result: None,
            stats: SearchStats::default(),
        };
        search.seed();
        search
    }

    /// Discard all progress and start over from the same grid. The replayed
    /// stream is identical to the first one.
    pub fn restart(&mut self) {
        self.frontier.clear();
        self.preds.clear();
        for v in self.costs.iter_mut() {
            *v = UNREACHABLE;
        }
        for v in self.closed.iter_mut() {
            *v = false;
        }
        self.pending.clear();
        self.result = None;
        self.stats = SearchStats::default();
        self.seed();
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn grid(&self) -> &'g GridMap {
        self.grid
    }

    /// Whether the outcome is known. Events may still be pending.
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// The outcome, once the search has finished.
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            max_frontier: self.frontier.high_water(),
            ..self.stats
        }
    }

    /// The predecessor map built so far.
    pub fn predecessors(&self) -> &Predecessors {
        &self.preds
    }

    /// Accumulated step cost recorded for `c`, if it has been reached.
    pub fn cost_of(&self, c: Cell) -> Option<i32> {
        let i = self.grid.index(c)?;
        (self.costs[i] != UNREACHABLE).then_some(self.costs[i])
    }

    /// Drive the search to completion, feeding every remaining event to
    /// `sink`, and return the outcome.
    pub fn run<S: ExplorationSink + ?Sized>(&mut self, sink: &mut S) -> SearchResult {
        for event in self.by_ref() {
            sink.on_event(&event);
        }
        self.result.clone().unwrap_or(SearchResult::NoPath)
    }

    fn seed(&mut self) {
        let start = self.grid.start();
        let goal = self.grid.goal();
        log::debug!(
            "{} search on {} grid from {start} to {goal}",
            self.algorithm,
            self.grid.bounds()
        );
        if start == goal {
            self.finish_with(SearchResult::PathFound(Path::default()));
            return;
        }
        let Some(si) = self.grid.index(start) else {
            self.finish_with(SearchResult::NoPath);
            return;
        };
        self.preds.set_start(start);
        self.costs[si] = 0;
        let priority = self.algorithm.priority(0, self.heuristic(start));
        self.frontier.push(start, priority.unwrap_or(0));
        self.stats.pushed += 1;
    }

    fn heuristic(&self, c: Cell) -> i32 {
        if self.algorithm.uses_heuristic() {
            manhattan(c, self.grid.goal())
        } else {
            0
        }
    }

    /// Pop and expand one frontier entry, queueing the events it produces.
    fn advance(&mut self) {
        let Some(entry) = self.frontier.pop() else {
            self.finish();
            return;
        };
        let current = entry.cell;
        let Some(ci) = self.grid.index(current) else {
            return;
        };
        // A cheaper duplicate of this cell was already expanded.
        if self.closed[ci] {
            return;
        }
        self.closed[ci] = true;
        self.stats.expanded += 1;
        log::trace!(
            "{}: expand {current} (priority {})",
            self.algorithm,
            entry.priority
        );

        if current == self.grid.goal() {
            self.finish();
            return;
        }
        if current != self.grid.start() {
            self.pending.push_back(StepEvent::Visited(current));
        }

        let neighbors = match self.grid.neighbors(current) {
            Ok(n) => n,
            Err(err) => {
                log::error!("{}: {err}", self.algorithm);
                return;
            }
        };
        let current_cost = self.costs[ci];
        for next in neighbors {
            let Some(ni) = self.grid.index(next) else {
                continue;
            };
            let cost = current_cost + 1;
            if self.algorithm.tracks_cost() {
                if self.costs[ni] != UNREACHABLE && cost >= self.costs[ni] {
                    continue;
                }
            } else if self.preds.is_reached(next) {
                continue;
            }

            let h = self.heuristic(next);
            let priority = self.algorithm.priority(cost, h);
            self.costs[ni] = cost;
            self.preds.link(next, current);
            self.frontier.push(next, priority.unwrap_or(0));
            self.stats.pushed += 1;

            if self.options.trace_relaxations {
                self.pending.push_back(StepEvent::Relaxed(Relaxation {
                    from: current,
                    to: next,
                    cost,
                    heuristic: self.algorithm.uses_heuristic().then_some(h),
                    priority,
                }));
            }
        }
    }

    fn finish(&mut self) {
        let path = self
            .preds
            .reconstruct(self.grid.start(), self.grid.goal());
        let result = if path.is_empty() {
            SearchResult::NoPath
        } else {
            SearchResult::PathFound(path)
        };
        self.finish_with(result);
    }

    fn finish_with(&mut self, result: SearchResult) {
        self.stats.path_len = result.path().map(Path::len);
        log::debug!(
            "{} finished: {result}; expanded {}, pushed {}, frontier peak {}",
            self.algorithm,
            self.stats.expanded,
            self.stats.pushed,
            self.frontier.high_water()
        );
        self.pending.push_back(StepEvent::Finished(result.clone()));
        self.result = Some(result);
    }
}

impl Iterator for Search<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.result.is_some() {
                return None;
            }
            self.advance();
        }
    }
}

impl FusedIterator for Search<'_> {}

/// Run `algorithm` on `grid` to completion, streaming events into `sink`.
pub fn run<S: ExplorationSink + ?Sized>(
    grid: &GridMap,
    algorithm: Algorithm,
    options: SearchOptions,
    sink: &mut S,
) -> (SearchResult, SearchStats) {
    let mut search = Search::with_options(grid, algorithm, options);
    let result = search.run(sink);
    (result, search.stats())
}
