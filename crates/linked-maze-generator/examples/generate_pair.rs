//! Example generating a linked maze pair and printing both pages.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_pair
//! ```
//!
//! Reproduce a previous run from its printed seed:
//!
//! ```sh
//! cargo run --example generate_pair -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Derive the seed from a phrase and ask for a harder pair:
//!
//! ```sh
//! cargo run --example generate_pair -- --phrase "rainy day" --depth 3
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the search.

use std::process;

use clap::Parser;
use linked_maze_generator::{GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Required sidetrack depth.
    #[arg(long, value_name = "DEPTH", default_value_t = 2)]
    depth: usize,

    /// Maximum mutate-and-solve rounds before giving up.
    #[arg(long, value_name = "COUNT")]
    max_attempts: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };
    let config = GeneratorConfig {
        target_depth: args.depth,
        max_attempts: args.max_attempts,
        ..GeneratorConfig::default()
    };

    println!("Searching...");
    match PuzzleGenerator::new(config).generate_with_seed(seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    if let Some(seed) = puzzle.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }
    println!("{}", puzzle.first);
    println!("{}", puzzle.second);
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
    println!("Stats:");
    println!("  sidetrack depth: {}", puzzle.sidetrack_depth);
    println!("  attempts: {}", puzzle.attempts);
}
