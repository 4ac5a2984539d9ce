use edge::{DirectedEdge, DirectedWeightedEdge};

pub mod edge;
pub mod graph_functions;
pub mod intersection;
pub mod road_map;

pub type VertexId = u32;
pub type Weight = u32;
pub type Distance = u64;
pub type Coordinate = i32;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = DirectedWeightedEdge> + Send + '_>;

    fn get_edge_weight(&self, edge: &DirectedEdge) -> Option<Weight>;
}
