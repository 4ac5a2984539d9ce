use std::process::ExitCode;

use clap::Parser;
use indicatif::ParallelProgressIterator;
use rand::{rngs::StdRng, SeedableRng};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use road_navigator::{
    graphs::graph_functions::{brute_force_shortest_distance, random_road_map},
    search::PathFinding,
    utility::generate_requests,
};

/// Compares navigation results against an exhaustive search over all simple
/// paths on many small random road maps.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random maps
    #[arg(short, long, default_value = "100")]
    maps: u32,
    /// Intersections per map, keep this small
    #[arg(short, long, default_value = "8")]
    intersections: u32,
    /// Roads per map
    #[arg(short, long, default_value = "12")]
    roads: u32,
    /// Requests per map
    #[arg(short, long, default_value = "20")]
    number_of_requests: u32,
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut mismatches = 0;
    for map_index in 0..args.maps {
        let map = random_road_map(&mut rng, args.intersections, args.roads, 20);
        let requests = generate_requests(&map, args.number_of_requests, &mut rng);

        let failed: Vec<_> = requests
            .par_iter()
            .progress_count(requests.len() as u64)
            .filter(|request| {
                let source = map.lookup(request.source.x, request.source.y);
                let target = map.lookup(request.target.x, request.target.y);
                let expected = match (source, target) {
                    (Some(source), Some(target)) if source == target => Some(0),
                    (Some(source), Some(target)) => {
                        brute_force_shortest_distance(&map, source, target)
                    }
                    _ => None,
                };
                map.shortest_path_distance(request) != expected
            })
            .collect();

        for request in &failed {
            log::warn!("map {}: wrong distance for {:?}", map_index, request);
        }
        mismatches += failed.len();
    }

    if mismatches > 0 {
        println!("{} mismatching requests", mismatches);
        return ExitCode::FAILURE;
    }

    println!("all requests match");
    ExitCode::SUCCESS
}
