//! Fallback chain: BFS, A*, UCS, Greedy, DFS, first success wins.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use gridwalk_core::GridMap;

use crate::algorithm::Algorithm;
use crate::event::{ExplorationSink, StepEvent};
use crate::result::SearchResult;
use crate::search::{Search, SearchOptions, SearchStats};

/// Record of one algorithm tried by the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attempt {
    pub algorithm: Algorithm,
    pub found: bool,
    pub stats: SearchStats,
}

/// Runs [`Algorithm::HYBRID_ORDER`] one algorithm at a time, each from
/// scratch on the same grid, until one finds a path.
///
/// The stream wraps every attempt in `AttemptStarted`, forwards the attempt's
/// own exploration events, and closes a failed attempt with `AttemptFailed`.
/// It ends with a single `Finished`: the winner's path, or `NoPath` once all
/// five have failed.
pub struct HybridSearch<'g> {
    grid: &'g GridMap,
    options: SearchOptions,
    next_attempt: usize,
    current: Option<Search<'g>>,
    attempts: Vec<Attempt>,
    pending: VecDeque<StepEvent>,
    winner: Option<Algorithm>,
    result: Option<SearchResult>,
}

impl<'g> HybridSearch<'g> {
    pub fn new(grid: &'g GridMap) -> Self {
        Self::with_options(grid, SearchOptions::default())
    }

    pub fn with_options(grid: &'g GridMap, options: SearchOptions) -> Self {
        Self {
            grid,
            options,
            next_attempt: 0,
            current: None,
            attempts: Vec::with_capacity(Algorithm::HYBRID_ORDER.len()),
            pending: VecDeque::new(),
            winner: None,
            result: None,
        }
    }

    /// Forget every attempt and start the chain over.
    pub fn restart(&mut self) {
        self.next_attempt = 0;
        self.current = None;
        self.attempts.clear();
        self.pending.clear();
        self.winner = None;
        self.result = None;
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// The algorithm that produced the path, if any did.
    pub fn winner(&self) -> Option<Algorithm> {
        self.winner
    }

    /// Completed attempts, in the order they ran.
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Counters summed over every completed attempt. `path_len` is the
    /// winner's.
    pub fn stats(&self) -> SearchStats {
        let mut total = SearchStats::default();
        for a in &self.attempts {
            total.expanded += a.stats.expanded;
            total.pushed += a.stats.pushed;
            total.max_frontier = total.max_frontier.max(a.stats.max_frontier);
            if a.found {
                total.path_len = a.stats.path_len;
            }
        }
        total
    }

    /// Drive the chain to completion, feeding every remaining event to
    /// `sink`.
    pub fn run<S: ExplorationSink + ?Sized>(&mut self, sink: &mut S) -> SearchResult {
        for event in self.by_ref() {
            sink.on_event(&event);
        }
        self.result.clone().unwrap_or(SearchResult::NoPath)
    }

    fn start_next(&mut self) {
        match Algorithm::HYBRID_ORDER.get(self.next_attempt) {
            Some(&alg) => {
                self.next_attempt += 1;
                log::info!("hybrid: trying {alg}");
                self.current = Some(Search::with_options(self.grid, alg, self.options));
                self.pending.push_back(StepEvent::AttemptStarted(alg));
            }
            None => {
                log::info!("hybrid: every algorithm failed");
                self.pending.push_back(StepEvent::Finished(SearchResult::NoPath));
                self.result = Some(SearchResult::NoPath);
            }
        }
    }

    fn close_attempt(&mut self, alg: Algorithm, stats: SearchStats, result: SearchResult) {
        self.current = None;
        self.attempts.push(Attempt {
            algorithm: alg,
            found: result.is_found(),
            stats,
        });
        if result.is_found() {
            log::info!("hybrid: {alg} found a path after {} attempts", self.attempts.len());
            self.winner = Some(alg);
            self.pending.push_back(StepEvent::Finished(result.clone()));
            self.result = Some(result);
        } else {
            log::info!("hybrid: {alg} failed");
            self.pending.push_back(StepEvent::AttemptFailed(alg));
        }
    }
}

impl Iterator for HybridSearch<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.result.is_some() {
                return None;
            }
            let Some(search) = self.current.as_mut() else {
                self.start_next();
                continue;
            };
            match search.next() {
                Some(StepEvent::Finished(result)) => {
                    let alg = search.algorithm();
                    let stats = search.stats();
                    self.close_attempt(alg, stats, result);
                }
                Some(event) => return Some(event),
                None => self.current = None,
            }
        }
    }
}

impl FusedIterator for HybridSearch<'_> {}
