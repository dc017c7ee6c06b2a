//! # Random Ball Configuration Example
//!
//! Builds the generalized Čech complex of a seeded random ball configuration
//! with both construction strategies and prints:
//!
//! - the number of simplices per dimension (f-vector)
//! - the Euler characteristic of the complex
//! - how candidates were certified or rejected
//! - construction time per strategy
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example random_balls -- [n_balls] [seed] [max_dimension]
//! RUST_LOG=gcech=debug cargo run --example random_balls
//! ```

use gcech::prelude::*;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let n_balls: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(666);
    let max_dimension: Option<usize> = args.next().and_then(|s| s.parse().ok());

    println!("=================================================================");
    println!("Generalized Čech Complex - {n_balls} Random Balls (seed = {seed})");
    println!("=================================================================\n");

    #[allow(clippy::cast_precision_loss)]
    let side = (n_balls.max(1) as f64).sqrt() * 1.5;
    let balls = match generate_random_balls_seeded(n_balls, (0.0, side), (0.3, 1.0), seed) {
        Ok(balls) => balls,
        Err(err) => {
            eprintln!("✗ Failed to generate balls: {err}");
            std::process::exit(1);
        }
    };
    let (positions, radii) = split_balls(&balls);

    for strategy in [StrategyKind::Baseline, StrategyKind::WitnessCaching] {
        let options = ConstructionOptions::new()
            .with_strategy(strategy)
            .with_max_dimension(max_dimension);

        let start = Instant::now();
        let complex = match construct_with_options(&positions, &radii, options) {
            Ok(complex) => complex,
            Err(err) => {
                eprintln!("✗ Construction failed: {err}");
                std::process::exit(1);
            }
        };
        let elapsed = start.elapsed();

        let stats = complex.statistics();
        println!("Strategy: {strategy}");
        println!("  built in {elapsed:?}, stopped by {:?}", complex.stop_reason());
        println!("  f-vector: {:?}", complex.f_vector());
        println!("  Euler characteristic: {}", complex.euler_characteristic());
        println!(
            "  candidates: {} ({} duplicate proposals skipped)",
            stats.candidates, stats.duplicates
        );
        println!(
            "  verified: {} by containment, {} by witness reuse, {} by pairwise intersection",
            stats.verified_by_containment,
            stats.verified_by_witness_reuse,
            stats.verified_by_pairwise_intersection
        );
        println!("  rejected: {}\n", stats.rejected);

        if let Some(top) = complex.dimension().and_then(|d| complex.level(d)) {
            let shown: Vec<String> = top.iter().take(5).map(ToString::to_string).collect();
            println!("  top-dimensional simplices: {}", shown.join(" "));
        }
        println!();
    }
}
