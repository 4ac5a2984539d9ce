use rand::{rngs::StdRng, SeedableRng};
use road_navigator::{
    graphs::{graph_functions::random_road_map, Distance, Graph},
    search::{
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataHashMap, DijkstraDataVec},
            vertex_distance_queue::{
                VertexDistanceQueue, VertexDistanceQueueBinaryHeap, VertexDistanceQueueRadixHeap,
            },
            vertex_expanded_data::{
                VertexExpandedData, VertexExpandedDataBitSet, VertexExpandedDataVec,
            },
        },
        dijkstra::{dijkstra_single_source, single_source, SearchOutcome},
    },
};

#[test]
fn collections_agree_on_distances() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let map = random_road_map(&mut rng, 60, 150, 100);
        let number_of_vertices = map.number_of_vertices();

        let mut vec_data = DijkstraDataVec::new(number_of_vertices);
        let mut bit_set = VertexExpandedDataBitSet::new(number_of_vertices);
        let mut binary_heap = VertexDistanceQueueBinaryHeap::new();

        let mut map_data = DijkstraDataHashMap::new();
        let mut expanded_vec = VertexExpandedDataVec::new(number_of_vertices);
        let mut radix_heap = VertexDistanceQueueRadixHeap::new();

        for source in 0..number_of_vertices {
            vec_data.clear();
            bit_set.clear();
            binary_heap.clear();
            map_data.clear();
            expanded_vec.clear();
            radix_heap.clear();

            let outcome = dijkstra_single_source(
                &map,
                &mut vec_data,
                &mut bit_set,
                &mut binary_heap,
                source,
                None,
            );
            assert_eq!(outcome, SearchOutcome::Completed);
            let outcome = dijkstra_single_source(
                &map,
                &mut map_data,
                &mut expanded_vec,
                &mut radix_heap,
                source,
                None,
            );
            assert_eq!(outcome, SearchOutcome::Completed);

            for vertex in 0..number_of_vertices {
                assert_eq!(vec_data.get_distance(vertex), map_data.get_distance(vertex));
                assert_eq!(
                    vec_data.get_distance(vertex) != Distance::MAX,
                    bit_set.is_expanded(vertex)
                );
            }
        }
    }
}

#[test]
fn source_never_gets_a_predecessor() {
    let mut rng = StdRng::seed_from_u64(5);
    let map = random_road_map(&mut rng, 40, 120, 30);

    for source in 0..map.number_of_vertices() {
        let data = single_source(&map, source);
        assert_eq!(data.get_distance(source), 0);
        assert_eq!(data.get_predecessor(source), None);
    }
}

#[test]
fn paths_start_at_source_and_end_at_target() {
    let mut rng = StdRng::seed_from_u64(9);
    let map = random_road_map(&mut rng, 40, 80, 30);

    let data = single_source(&map, 0);
    for target in 1..map.number_of_vertices() {
        match data.get_path(0, target) {
            Some(path) => {
                assert_eq!(path.vertices.first(), Some(&0));
                assert_eq!(path.vertices.last(), Some(&target));
                assert_eq!(path.distance, data.get_distance(target));
            }
            None => assert_eq!(data.get_distance(target), Distance::MAX),
        }
    }
}

#[test]
fn binary_heap_pops_smaller_vertex_on_ties() {
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    queue.insert(7, 3);
    queue.insert(2, 3);
    queue.insert(9, 1);

    assert_eq!(queue.pop(), Some(9));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(7));
    assert_eq!(queue.pop(), None);
}

#[test]
fn broken_predecessor_chain_has_no_path() {
    let mut data = DijkstraDataVec::new(3);
    data.set_distance(0, 0);
    data.set_distance(2, 5);

    assert_eq!(data.get_path(0, 2), None);

    data.set_predecessor(2, 1);
    data.set_distance(1, 2);
    assert_eq!(data.get_path(0, 2), None);

    data.set_predecessor(1, 0);
    assert_eq!(data.get_path(0, 2).map(|path| path.vertices), Some(vec![0, 1, 2]));
}
