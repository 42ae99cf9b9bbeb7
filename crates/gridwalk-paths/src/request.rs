use gridwalk_core::GridMap;

use crate::algorithm::{Algorithm, Strategy};
use crate::event::{ExplorationSink, StepEvent};
use crate::hybrid::HybridSearch;
use crate::result::SearchResult;
use crate::search::{Search, SearchOptions, SearchStats};

/// What to run and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    pub strategy: Strategy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: SearchOptions,
}

impl SearchRequest {
    pub fn new(strategy: impl Into<Strategy>) -> Self {
        Self {
            strategy: strategy.into(),
            options: SearchOptions::default(),
        }
    }

    /// Enable or disable relaxation events.
    pub fn with_relaxations(mut self, on: bool) -> Self {
        self.options.trace_relaxations = on;
        self
    }

    /// The lazy event stream for this request.
    pub fn steps<'g>(&self, grid: &'g GridMap) -> Steps<'g> {
        match self.strategy.algorithm() {
            Some(alg) => Steps::Single(Search::with_options(grid, alg, self.options)),
            None => Steps::Hybrid(HybridSearch::with_options(grid, self.options)),
        }
    }

    /// Run to completion, feeding events to `sink`. The returned outcome has
    /// no recorded events.
    pub fn stream<S: ExplorationSink + ?Sized>(
        &self,
        grid: &GridMap,
        sink: &mut S,
    ) -> SearchOutcome {
        let mut steps = self.steps(grid);
        let result = steps.run(sink);
        SearchOutcome {
            result,
            events: Vec::new(),
            stats: steps.stats(),
            winner: steps.winner(),
        }
    }

    /// Run to completion and record every event.
    pub fn run(&self, grid: &GridMap) -> SearchOutcome {
        let mut events = Vec::new();
        let outcome = self.stream(grid, &mut events);
        SearchOutcome { events, ..outcome }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new(Strategy::Bfs)
    }
}

/// Everything a finished request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub events: Vec<StepEvent>,
    pub stats: SearchStats,
    /// The algorithm that found the path.
    pub winner: Option<Algorithm>,
}

/// Event stream of either a single algorithm or the hybrid chain.
pub enum Steps<'g> {
    Single(Search<'g>),
    Hybrid(HybridSearch<'g>),
}

impl Steps<'_> {
    pub fn restart(&mut self) {
        match self {
            Self::Single(s) => s.restart(),
            Self::Hybrid(h) => h.restart(),
        }
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            Self::Single(s) => s.result(),
            Self::Hybrid(h) => h.result(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Single(s) => s.stats(),
            Self::Hybrid(h) => h.stats(),
        }
    }

    /// The algorithm that found the path, once one has.
    pub fn winner(&self) -> Option<Algorithm> {
        match self {
            Self::Single(s) => s
                .result()
                .filter(|r| r.is_found())
                .map(|_| s.algorithm()),
            Self::Hybrid(h) => h.winner(),
        }
    }

    pub fn run<S: ExplorationSink + ?Sized>(&mut self, sink: &mut S) -> SearchResult {
        match self {
            Self::Single(s) => s.run(sink),
            Self::Hybrid(h) => h.run(sink),
        }
    }
}

impl Iterator for Steps<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        match self {
            Self::Single(s) => s.next(),
            Self::Hybrid(h) => h.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::Cell;

    fn open4() -> GridMap {
        GridMap::open(4, 4, Cell::new(0, 0), Cell::new(3, 3)).unwrap()
    }

    #[test]
    fn single_strategy_outcome() {
        let g = open4();
        let out = SearchRequest::new(Algorithm::AStar).run(&g);
        assert_eq!(out.winner, Some(Algorithm::AStar));
        assert_eq!(out.result.path().map(|p| p.len()), Some(6));
        assert_eq!(out.stats.path_len, Some(6));
        assert!(out.events.last().is_some_and(StepEvent::is_terminal));
    }

    #[test]
    fn stream_and_run_agree() {
        let g = open4();
        let req = SearchRequest::new(Strategy::Hybrid).with_relaxations(true);
        let mut seen = Vec::new();
        let streamed = req.stream(&g, &mut seen);
        let recorded = req.run(&g);
        assert!(streamed.events.is_empty());
        assert_eq!(seen, recorded.events);
        assert_eq!(streamed.result, recorded.result);
        assert_eq!(recorded.winner, Some(Algorithm::Bfs));
    }

    #[test]
    fn failed_single_run_has_no_winner() {
        let g = GridMap::parse("S#\n#G").unwrap();
        let out = SearchRequest::new(Strategy::Ucs).run(&g);
        assert_eq!(out.result, SearchResult::NoPath);
        assert_eq!(out.winner, None);
        assert_eq!(out.events, vec![StepEvent::Finished(SearchResult::NoPath)]);
    }

    #[test]
    fn steps_restart() {
        let g = open4();
        let mut steps = SearchRequest::new(Strategy::Dfs).steps(&g);
        let first: Vec<_> = steps.by_ref().collect();
        assert!(steps.result().is_some());
        steps.restart();
        assert!(steps.result().is_none());
        let second: Vec<_> = steps.by_ref().collect();
        assert_eq!(first, second);
    }
}
