//! Basic example of using the tsp_ls library.
//!
//! Reads a point file (first line: point count, then one `x y` pair per
//! line), runs the full improvement pipeline and writes the resulting
//! tours as JSON.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::fs;
use std::time::Instant;
use tsp_ls::{
    construct, Annealing, AnnealingConfig, Point, ThreeOpt, ThreeOptConfig, Tour, TwoOpt,
    TwoOptConfig,
};

fn parse_points(data: &str) -> Result<Vec<Point>, Box<dyn std::error::Error>> {
    let mut lines = data.trim().lines();
    let count: usize = lines.next().ok_or("empty input file")?.trim().parse()?;

    let mut points = Vec::with_capacity(count);
    for line in lines.take(count) {
        let mut parts = line.split_whitespace();
        let x: f64 = parts.next().ok_or("missing x coordinate")?.parse()?;
        let y: f64 = parts.next().ok_or("missing y coordinate")?.parse()?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn save_tour(tour: &Tour, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&tour.points)?;
    fs::write(path, json)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get instance path from command line or use default
    let args: Vec<String> = env::args().collect();
    let instance_path = if args.len() > 1 {
        &args[1]
    } else {
        "data/tsp_574_1"
    };
    let seed: u64 = if args.len() > 2 { args[2].parse()? } else { 42 };

    println!("Loading points from: {}", instance_path);
    let points = parse_points(&fs::read_to_string(instance_path)?)?;
    println!("Loaded {} points", points.len());

    let start_time = Instant::now();

    let mut tour = construct::nearest_neighbor(&points);
    println!("greedy: {:.2}", tour.total_length());
    save_tour(&tour, "greedy.json")?;

    let two_opt = TwoOpt::new(TwoOptConfig::new());
    let outcome = two_opt.optimize(&mut tour);
    println!(
        "2-opt: {:.2} ({:?}, {} sweeps, {} moves)",
        tour.total_length(),
        outcome.termination,
        outcome.sweeps,
        outcome.moves
    );
    save_tour(&tour, "two_opt.json")?;

    // Shake the 2-opt optimum loose, then settle again.
    let annealing = Annealing::new(
        AnnealingConfig::new()
            .with_iterations(200_000)
            .with_initial_temperature(100.0),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let outcome = annealing.optimize(&mut tour, &mut rng);
    println!(
        "annealing: {:.2} ({} of {} steps accepted)",
        tour.total_length(),
        outcome.accepted,
        outcome.iterations
    );
    two_opt.optimize(&mut tour);
    println!("2-opt again: {:.2}", tour.total_length());

    let three_opt = ThreeOpt::new(ThreeOptConfig::new());
    let outcome = three_opt.optimize(&mut tour);
    println!(
        "3-opt: {:.2} ({:?}, {} comparisons)",
        tour.total_length(),
        outcome.termination,
        outcome.comparisons
    );
    save_tour(&tour, "three_opt.json")?;

    println!("Finished in {:.1?}", start_time.elapsed());

    Ok(())
}
