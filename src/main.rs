//! Life CLI - Run toroidal Game of Life experiments.

use life_torus::{
    compute::{CenterOfMassTracker, EquilibriumDetector, LifeEngine},
    schema::{Pattern, Seed, SimulationConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <N> <state_type>", args[0]);
        eprintln!();
        eprintln!("Run Game of Life experiments on an NxN toroidal grid.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  N           Grid side length (positive integer)");
        eprintln!("  state_type  Initial pattern: 0 random, 1 blinker corners");
        eprintln!("              plus centered glider, 2 side glider");
        std::process::exit(1);
    }

    let n: usize = args[1].parse().unwrap_or_else(|_| {
        eprintln!("Invalid grid size: {}", args[1]);
        std::process::exit(1);
    });
    let state_type: i64 = args[2].parse().unwrap_or_else(|_| {
        eprintln!("Invalid state_type: {}", args[2]);
        std::process::exit(1);
    });

    let config = SimulationConfig {
        size: n,
        ..Default::default()
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let rng_seed: u64 = rand::random();
    let pattern = Pattern::from_index(state_type, rng_seed).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let seed = Seed { pattern };

    println!("Game of Life");
    println!("============");
    println!("Grid: {n}x{n} (toroidal)");
    println!("Pattern: {pattern:?}");
    println!("Sweeps: {}", config.sweeps);
    println!();

    // Alive-count series over one run, for the alive-cells plot.
    let mut grid = seed.generate(n).unwrap_or_else(|e| {
        eprintln!("Error seeding grid: {e}");
        std::process::exit(1);
    });
    let mut engine = LifeEngine::new(n);
    let series = engine.run(&mut grid, config.sweeps);
    println!(
        "Alive after {} sweeps: {}",
        series.len(),
        series.last().copied().unwrap_or(0)
    );
    println!(
        "alive_series: {}",
        serde_json::to_string(&series).expect("series serializes")
    );
    println!();

    // Histogram input: steps-to-equilibrium over independent random trials.
    println!(
        "Running {} equilibrium trials ({} sweeps each)...",
        config.trials, config.sweeps
    );
    let detector = EquilibriumDetector::from_config(&config);
    let equilibria = detector.run_experiment(n, config.sweeps, config.trials, rng_seed);
    let mean_step = equilibria.iter().sum::<usize>() as f64 / equilibria.len() as f64;
    println!("Mean steps to equilibrium: {mean_step:.1}");
    println!(
        "equilibrium_steps: {}",
        serde_json::to_string(&equilibria).expect("steps serialize")
    );
    println!();

    // Center-of-mass velocity from a fresh grid of the same pattern.
    let mut grid = seed.generate(n).unwrap_or_else(|e| {
        eprintln!("Error seeding grid: {e}");
        std::process::exit(1);
    });
    let tracker = CenterOfMassTracker::from_config(&config);
    match tracker.estimate_velocity(&mut grid, config.sweeps) {
        Ok(estimate) => {
            println!(
                "com_x: {}",
                serde_json::to_string(&estimate.x_samples).expect("samples serialize")
            );
            println!(
                "com_y: {}",
                serde_json::to_string(&estimate.y_samples).expect("samples serialize")
            );
            println!("{}", estimate.vx);
            println!("{}", estimate.vy);
            println!("{}", estimate.speed);
        }
        Err(e) => eprintln!("Velocity estimate unavailable: {e}"),
    }
}
