//! Gilded Rose driver
//!
//! Runs the standard inventory for the configured number of days and prints
//! the resulting report. Optionally benchmarks a large random inventory.

use inventory::catalog::{random_stock, standard_inventory};
use inventory::{Calendar, Inventory, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SimulationConfig::from_env()?;
    info!(
        days = config.days,
        start = %config.start_date,
        "Gilded Rose inventory starting..."
    );

    let mut inventory =
        Inventory::with_calendar(standard_inventory(), Calendar::new(config.start_date));
    if let Some(last) = inventory.tick_many(config.days) {
        info!(
            "Day {} ({}): {} expired, {} worthless",
            last.day, last.date, last.expired, last.worthless
        );
    }
    println!("{}", inventory.report().to_json()?);

    if config.benchmark_items > 0 {
        run_benchmark(&config);
    }

    Ok(())
}

fn run_benchmark(config: &SimulationConfig) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    info!("Seeding {} benchmark items...", config.benchmark_items);
    let mut inventory = Inventory::with_calendar(
        random_stock(&mut rng, config.benchmark_items),
        Calendar::new(config.start_date),
    );

    let ticks = config.days.max(1);
    info!("Running benchmark ({} ticks)...", ticks);
    let start = std::time::Instant::now();
    for _ in 0..ticks {
        inventory.tick_parallel();
    }
    let elapsed = start.elapsed();

    info!(
        "Benchmark complete: {:?} total, {:?} per tick, {} items",
        elapsed,
        elapsed / ticks,
        inventory.len()
    );
}
