use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use rand::Rng;

use crate::{
    graphs::road_map::RoadMap,
    search::{path::NavigationRequest, PathFinding},
};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Random requests between intersections of `map`. Source and target differ
/// whenever the map has at least two intersections.
pub fn generate_requests<R: Rng>(
    map: &RoadMap,
    number_of_requests: u32,
    rng: &mut R,
) -> Vec<NavigationRequest> {
    let intersections: Vec<_> = map
        .intersections()
        .map(|(_, intersection)| intersection)
        .collect();
    if intersections.is_empty() {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            let source = rng.gen_range(0..intersections.len());
            let mut target = source;
            if intersections.len() > 1 {
                target = rng.gen_range(0..intersections.len() - 1);
                if target >= source {
                    target += 1;
                }
            }

            NavigationRequest {
                source: intersections[source],
                target: intersections[target],
            }
        })
        .collect()
}

/// Average time `pathfinder` needs to answer one of `requests`.
pub fn benchmark(pathfinder: &dyn PathFinding, requests: &[NavigationRequest]) -> Duration {
    if requests.is_empty() {
        return Duration::ZERO;
    }

    let bar = get_progressbar_long_jobs("navigating", requests.len() as u64);
    let start = Instant::now();
    for request in requests.iter().progress_with(bar) {
        let _ = pathfinder.shortest_path(request);
    }

    Duration::from_secs_f64(start.elapsed().as_secs_f64() / requests.len() as f64)
}
