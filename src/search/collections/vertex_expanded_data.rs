use fixedbitset::FixedBitSet;

use crate::graphs::VertexId;

/// Tracks the settled vertices of a search.
pub trait VertexExpandedData {
    /// Marks `vertex` as settled and returns whether it already was.
    fn expand(&mut self, vertex: VertexId) -> bool;

    fn is_expanded(&self, vertex: VertexId) -> bool;

    fn clear(&mut self);
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices as usize],
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: VertexId) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded[vertex as usize]
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
    }
}

pub struct VertexExpandedDataBitSet {
    expanded: FixedBitSet,
}

impl VertexExpandedDataBitSet {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexExpandedDataBitSet {
            expanded: FixedBitSet::with_capacity(number_of_vertices as usize),
        }
    }
}

impl VertexExpandedData for VertexExpandedDataBitSet {
    fn expand(&mut self, vertex: VertexId) -> bool {
        self.expanded.put(vertex as usize)
    }

    fn is_expanded(&self, vertex: VertexId) -> bool {
        self.expanded.contains(vertex as usize)
    }

    fn clear(&mut self) {
        self.expanded.clear()
    }
}
