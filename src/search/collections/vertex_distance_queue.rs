use std::{cmp::Reverse, collections::BinaryHeap};

use radix_heap::RadixHeapMap;

use crate::graphs::{Distance, VertexId};

/// A trait for a priority queue that manages vertices and their distances.
///
/// None of the implementations support decrease key; a vertex is pushed again
/// whenever its distance improves and stale entries are filtered by the
/// caller.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: VertexId, distance: Distance);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<VertexId>;
}

/// Binary heap backed queue. Equal distances pop the smaller vertex id first.
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, VertexId)>>,
}

impl Default for VertexDistanceQueueBinaryHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<VertexId> {
        let Reverse((_distance, vertex)) = self.heap.pop()?;

        Some(vertex)
    }
}

/// Monotone radix heap. Inserted distances must never be smaller than the
/// last popped one, which holds for non-negative edge weights.
pub struct VertexDistanceQueueRadixHeap {
    heap: RadixHeapMap<i64, VertexId>,
}

impl Default for VertexDistanceQueueRadixHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueRadixHeap {
    pub fn new() -> Self {
        VertexDistanceQueueRadixHeap {
            heap: RadixHeapMap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueRadixHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        // max heap, so distances are stored negated
        self.heap.push(-(distance as i64), vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.heap.pop().map(|(_negative_distance, vertex)| vertex)
    }
}
