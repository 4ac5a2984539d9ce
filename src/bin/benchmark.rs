use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use road_navigator::{
    graphs::{graph_functions::random_road_map, Graph},
    utility::{benchmark, generate_requests, get_progressspinner},
};

/// Measures the average query time on a random road map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of intersections on the map
    #[arg(short, long, default_value = "10000")]
    intersections: u32,
    /// Number of roads on the map
    #[arg(short, long, default_value = "30000")]
    roads: u32,
    /// Coordinates are drawn from [-extent, extent]
    #[arg(short, long, default_value = "10000")]
    extent: i32,
    /// Number of navigation requests to time
    #[arg(short, long, default_value = "100")]
    number_of_requests: u32,
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let spinner = get_progressspinner("Generating road map");
    let map = random_road_map(&mut rng, args.intersections, args.roads, args.extent);
    spinner.finish_and_clear();
    println!(
        "road map with {} intersections and {} directed edges",
        map.number_of_vertices(),
        map.number_of_edges()
    );

    let requests = generate_requests(&map, args.number_of_requests, &mut rng);
    println!("Value over {} sequential searches", requests.len());
    let average_duration = benchmark(&map, &requests);
    println!("Average navigation duration is {:?}", average_duration);
}
