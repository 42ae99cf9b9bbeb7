//! Frontier orderings over discovered-but-unexpanded cells.

use std::collections::{BinaryHeap, VecDeque};

use gridwalk_core::Cell;

/// Ordering policy of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    /// Queue: first pushed, first popped.
    Fifo,
    /// Stack: last pushed, first popped.
    Lifo,
    /// Smallest priority first; equal priorities pop in push order.
    PriorityMin,
}

/// A cell waiting in a frontier with the priority it was pushed with.
///
/// `priority` is carried but ignored by the `Fifo` and `Lifo` orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub cell: Cell,
    pub priority: i32,
}

/// Heap entry ordered by `(priority, seq)` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Ranked {
    priority: i32,
    seq: u64,
    cell: Cell,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (priority, seq) first.
        other
            .priority
            .cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone)]
enum Store {
    Fifo(VecDeque<Entry>),
    Lifo(Vec<Entry>),
    PriorityMin(BinaryHeap<Ranked>),
}

/// The set of cells a search has discovered but not yet expanded.
///
/// All three orderings are deterministic: the pop order depends only on the
/// sequence of pushes.
#[derive(Clone)]
pub struct Frontier {
    store: Store,
    seq: u64,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier with the given ordering.
    pub fn new(kind: FrontierKind) -> Self {
        let store = match kind {
            FrontierKind::Fifo => Store::Fifo(VecDeque::new()),
            FrontierKind::Lifo => Store::Lifo(Vec::new()),
            FrontierKind::PriorityMin => Store::PriorityMin(BinaryHeap::new()),
        };
        Self {
            store,
            seq: 0,
            high_water: 0,
        }
    }

    pub fn kind(&self) -> FrontierKind {
        match self.store {
            Store::Fifo(_) => FrontierKind::Fifo,
            Store::Lifo(_) => FrontierKind::Lifo,
            Store::PriorityMin(_) => FrontierKind::PriorityMin,
        }
    }

    /// Add `cell` with `priority`.
    pub fn push(&mut self, cell: Cell, priority: i32) {
        let entry = Entry { cell, priority };
        match &mut self.store {
            Store::Fifo(q) => q.push_back(entry),
            Store::Lifo(s) => s.push(entry),
            Store::PriorityMin(h) => h.push(Ranked {
                priority,
                seq: self.seq,
                cell,
            }),
        }
        self.seq += 1;
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove the next entry, or `None` when the frontier is empty.
    pub fn pop(&mut self) -> Option<Entry> {
        match &mut self.store {
            Store::Fifo(q) => q.pop_front(),
            Store::Lifo(s) => s.pop(),
            Store::PriorityMin(h) => h.pop().map(|r| Entry {
                cell: r.cell,
                priority: r.priority,
            }),
        }
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(q) => q.len(),
            Store::Lifo(s) => s.len(),
            Store::PriorityMin(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached since creation or the last
    /// [`clear`](Self::clear).
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Remove every entry and reset the insertion sequence.
    pub fn clear(&mut self) {
        match &mut self.store {
            Store::Fifo(q) => q.clear(),
            Store::Lifo(s) => s.clear(),
            Store::PriorityMin(h) => h.clear(),
        }
        self.seq = 0;
        self.high_water = 0;
    }
}
