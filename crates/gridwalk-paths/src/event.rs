//! Step events emitted while a search runs, and the sinks that consume them.
//!
//! The engine never renders. A host animates, logs or records a search by
//! consuming the [`StepEvent`] stream, either by iterating a
//! [`Search`](crate::Search) directly or by passing an [`ExplorationSink`].

use std::fmt;

use gridwalk_core::Cell;

use crate::algorithm::Algorithm;
use crate::result::SearchResult;

/// One accepted predecessor update: `to` is now reached from `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relaxation {
    pub from: Cell,
    pub to: Cell,
    /// Accumulated step cost `g` of `to` along the new route.
    pub cost: i32,
    /// Distance-to-goal estimate `h`, for heuristic variants.
    pub heuristic: Option<i32>,
    /// Frontier priority, for prioritized variants.
    pub priority: Option<i32>,
}

impl fmt::Display for Relaxation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to = self.to;
        match (self.heuristic, self.priority) {
            (Some(h), Some(p)) if p == self.cost + h => {
                write!(f, "f{to} = {} + {h} = {p}", self.cost)
            }
            (Some(h), _) => write!(f, "h{to} = {h}"),
            (None, Some(_)) => write!(f, "g{to} = {}", self.cost),
            (None, None) => write!(f, "reached {to} from {}", self.from),
        }
    }
}

/// An item of the step-event stream.
///
/// A single-algorithm run yields `Visited`/`Relaxed` events followed by
/// exactly one `Finished`. The hybrid chain wraps each attempt in
/// `AttemptStarted` and, on failure, `AttemptFailed`; its stream still ends
/// with one `Finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepEvent {
    AttemptStarted(Algorithm),
    /// A cell other than the start or goal was expanded.
    Visited(Cell),
    /// Only emitted when relaxation tracing is enabled.
    Relaxed(Relaxation),
    AttemptFailed(Algorithm),
    Finished(SearchResult),
}

impl StepEvent {
    /// Whether this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// The expanded cell of a `Visited` event.
    pub fn visited(&self) -> Option<Cell> {
        match self {
            Self::Visited(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttemptStarted(alg) => write!(f, "trying {alg}"),
            Self::Visited(c) => write!(f, "visited {c}"),
            Self::Relaxed(r) => write!(f, "{r}"),
            Self::AttemptFailed(alg) => write!(f, "{alg} failed"),
            Self::Finished(result) => write!(f, "{result}"),
        }
    }
}

/// Receiver of step events.
pub trait ExplorationSink {
    fn on_event(&mut self, event: &StepEvent);
}

impl<S: ExplorationSink + ?Sized> ExplorationSink for &mut S {
    fn on_event(&mut self, event: &StepEvent) {
        (**self).on_event(event);
    }
}

/// Records every event.
impl ExplorationSink for Vec<StepEvent> {
    fn on_event(&mut self, event: &StepEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ExplorationSink for NullSink {
    fn on_event(&mut self, _event: &StepEvent) {}
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&StepEvent)> ExplorationSink for FnSink<F> {
    fn on_event(&mut self, event: &StepEvent) {
        (self.0)(event);
    }
}

/// Forwards events to the `log` facade: attempt transitions and outcomes at
/// `info`, exploration steps at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ExplorationSink for LogSink {
    fn on_event(&mut self, event: &StepEvent) {
        match event {
            StepEvent::Visited(_) | StepEvent::Relaxed(_) => log::trace!("{event}"),
            _ => log::info!("{event}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Path;

    #[test]
    fn status_lines() {
        assert_eq!(StepEvent::AttemptFailed(Algorithm::Bfs).to_string(), "BFS failed");
        assert_eq!(
            StepEvent::AttemptStarted(Algorithm::AStar).to_string(),
            "trying A*"
        );
        assert_eq!(StepEvent::Visited(Cell::new(1, 2)).to_string(), "visited (1, 2)");
        assert_eq!(
            StepEvent::Finished(SearchResult::NoPath).to_string(),
            "no path"
        );
    }

    #[test]
    fn relaxation_annotations() {
        let base = Relaxation {
            from: Cell::new(0, 0),
            to: Cell::new(0, 1),
            cost: 1,
            heuristic: None,
            priority: None,
        };
        assert_eq!(base.to_string(), "reached (0, 1) from (0, 0)");
        let ucs = Relaxation {
            priority: Some(1),
            ..base
        };
        assert_eq!(ucs.to_string(), "g(0, 1) = 1");
        let greedy = Relaxation {
            heuristic: Some(5),
            priority: Some(5),
            ..base
        };
        assert_eq!(greedy.to_string(), "h(0, 1) = 5");
        let astar = Relaxation {
            heuristic: Some(5),
            priority: Some(6),
            ..base
        };
        assert_eq!(astar.to_string(), "f(0, 1) = 1 + 5 = 6");
    }

    #[test]
    fn terminal_and_visited_accessors() {
        let done = StepEvent::Finished(SearchResult::PathFound(Path::default()));
        assert!(done.is_terminal());
        assert_eq!(done.visited(), None);
        let v = StepEvent::Visited(Cell::new(2, 2));
        assert!(!v.is_terminal());
        assert_eq!(v.visited(), Some(Cell::new(2, 2)));
    }

    #[test]
    fn sinks() {
        let mut rec: Vec<StepEvent> = Vec::new();
        rec.on_event(&StepEvent::Visited(Cell::new(0, 1)));
        fn feed<S: ExplorationSink>(mut sink: S) {
            sink.on_event(&StepEvent::Visited(Cell::new(0, 2)));
        }
        feed(&mut rec);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec[1], StepEvent::Visited(Cell::new(0, 2)));

        let mut count = 0;
        let mut sink = FnSink(|_: &StepEvent| count += 1);
        sink.on_event(&StepEvent::Visited(Cell::new(0, 1)));
        sink.on_event(&StepEvent::Visited(Cell::new(0, 2)));
        drop(sink);
        assert_eq!(count, 2);

        NullSink.on_event(&StepEvent::Visited(Cell::new(0, 1)));
        LogSink.on_event(&StepEvent::AttemptStarted(Algorithm::Bfs));
    }
}
