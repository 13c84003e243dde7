use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::path::Route;

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug)]
struct QueueEntry {
    cost: FloatOrd,
    sequence: u64,
    route: Route,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with the
        // earliest push winning ties.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of candidate routes ordered by accumulated cost.
#[derive(Debug, Default)]
pub struct RouteQueue {
    heap: BinaryHeap<QueueEntry>,
    next_sequence: u64,
}

impl RouteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate route.
    pub fn push(&mut self, route: Route) {
        let entry = QueueEntry {
            cost: FloatOrd(route.cost),
            sequence: self.next_sequence,
            route,
        };
        self.next_sequence += 1;
        self.heap.push(entry);
    }

    /// Remove and return the cheapest route, or `None` when empty.
    pub fn pop_min(&mut self) -> Option<Route> {
        self.heap.pop().map(|entry| entry.route)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
