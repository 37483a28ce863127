// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `lotto` — command-line front end for the combination generator.
//!
//! A thin external caller: parse arguments, generate, print. Betting,
//! history, and display concerns live outside this crate; this binary only
//! renders combinations one per line.

use clap::Parser;
use lotto_gen::{Generator, StrategyKind, StrategyParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lotto", about = "Generate constrained lottery combinations")]
struct Args {
    /// Pool size: numbers are drawn from 1..=POOL.
    #[arg(long, default_value_t = 45)]
    pool: u32,

    /// How many numbers per combination.
    #[arg(long, default_value_t = 6)]
    pick: usize,

    /// Strategy identifier (random, even_odd_balanced, sequential_included,
    /// prime_combination, ...). Unknown identifiers alias random.
    #[arg(long, default_value = "random")]
    strategy: String,

    /// How many combinations to generate.
    #[arg(long, default_value_t = 1)]
    sets: usize,

    /// Minimum prime count for prime_combination.
    #[arg(long, default_value_t = 2)]
    min_primes: usize,

    /// Seed the random source for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let generator = Generator::new();
    let kind = StrategyKind::from_identifier(&args.strategy);
    let params = StrategyParams {
        min_primes: args.min_primes,
    };

    let mut rng: Box<dyn rand::RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    for _ in 0..args.sets {
        match generator.generate_with(&mut *rng, args.pool, args.pick, kind, params) {
            Ok(generation) => {
                if let Some(fallback) = generation.fallback {
                    println!(
                        "{}  (fallback: {} did not converge)",
                        generation.numbers, fallback.strategy
                    );
                } else {
                    println!("{}", generation.numbers);
                }
            }
            Err(err) => {
                eprintln!("lotto: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
