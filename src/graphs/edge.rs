use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// One direction of a road. Roads are stored as two of these, one per
/// endpoint, carrying the same weight.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct DirectedWeightedEdge {
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl DirectedWeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> DirectedWeightedEdge {
        DirectedWeightedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }

    pub fn reversed(&self) -> DirectedWeightedEdge {
        DirectedWeightedEdge {
            head: self.tail,
            tail: self.head,
            weight: self.weight,
        }
    }

    pub fn unweighted(&self) -> DirectedEdge {
        DirectedEdge {
            tail: self.tail,
            head: self.head,
        }
    }

    pub fn tailless(&self) -> DirectedTaillessWeightedEdge {
        DirectedTaillessWeightedEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

/// Adjacency list entry. The tail is implied by the list that owns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectedTaillessWeightedEdge {
    head: VertexId,
    weight: Weight,
}

impl DirectedTaillessWeightedEdge {
    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: VertexId) -> DirectedWeightedEdge {
        DirectedWeightedEdge::new(tail, self.head, self.weight)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct DirectedEdge {
    tail: VertexId,
    head: VertexId,
}

impl DirectedEdge {
    pub fn new(tail: VertexId, head: VertexId) -> DirectedEdge {
        DirectedEdge { tail, head }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn reversed(&self) -> DirectedEdge {
        DirectedEdge {
            tail: self.head,
            head: self.tail,
        }
    }
}
