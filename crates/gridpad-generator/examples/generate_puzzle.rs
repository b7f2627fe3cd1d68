//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles, printing the clue layout, the solution,
//! and the seed that reproduces each puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty tier:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert
//! ```
//!
//! Replay a specific puzzle from its 64-hex-character seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```

use std::process;

use clap::Parser;
use gridpad_core::{Difficulty, Position};
use gridpad_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// Difficulty tier (easy, moderate, hard, expert).
    #[arg(long, value_name = "TIER", default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed to replay, as 64 hex characters. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }
    if args.seed.is_some() && args.count > 1 {
        eprintln!("--seed replays a single puzzle; --count must be 1.");
        process::exit(1);
    }

    let generator = PuzzleGenerator::new();
    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        let puzzle = match args.seed {
            Some(seed) => generator.generate_with_seed(args.difficulty, seed),
            None => generator.generate(args.difficulty),
        };
        print_puzzle(&puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!("Difficulty:");
    println!("  {} ({} clues)", puzzle.difficulty, puzzle.clue_count());
    println!();

    println!("Puzzle:");
    print_grid(|pos| {
        if puzzle.mask.is_clue(pos) {
            char::from(b'0' + puzzle.solution.value(pos).value())
        } else {
            '.'
        }
    });
    println!();

    println!("Solution:");
    print_grid(|pos| char::from(b'0' + puzzle.solution.value(pos).value()));
}

fn print_grid(cell: impl Fn(Position) -> char) {
    for row in 0..9 {
        print!(" ");
        for col in 0..9 {
            print!(" {}", cell(Position::new(row, col)));
            if col == 2 || col == 5 {
                print!(" |");
            }
        }
        println!();
        if row == 2 || row == 5 {
            println!("  ------+-------+------");
        }
    }
}
