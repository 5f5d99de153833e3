//! `bench_local.rs`: quick local timing and placement-rate runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc numbers for a handful of word sets on *your* machine.
//! - Each case is generated `--repeats` times with consecutive (wrapping) seeds; we report the
//!   median time and the average share of words that made it into the grid.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - More repeats:                   `cargo run --bin bench_local --release -- -r 500`
//! - Print one grid per case:        `cargo run --bin bench_local --release -- -p`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsearch::direction::EnabledDirections;
use wordsearch::placement;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of generations per case (median time is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 200)]
    num_repeats: u64,

    /// First seed; run i uses seed + i
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Print the grid from the first run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

struct Case {
    name: &'static str,
    words: &'static [&'static str],
    grid_size: usize,
    directions: &'static [&'static str],
}

fn get_cases() -> Vec<Case> {
    const ANIMALS: &[&str] = &[
        "CAT", "DOG", "HORSE", "RABBIT", "MOUSE", "ELEPHANT", "GIRAFFE", "ZEBRA", "MONKEY", "TIGER",
    ];
    const LONG: &[&str] = &[
        "ABBREVIATION", "BACKGROUNDED", "CALCULATIONS", "DISAPPOINTED", "EXAGGERATION",
        "FRIGHTENINGS", "GRANDMOTHERS", "HANDKERCHIEF",
    ];
    vec![
        Case {
            name: "animals 15x15 all",
            words: ANIMALS,
            grid_size: 15,
            directions: &[],
        },
        Case {
            name: "animals 10x10 all",
            words: ANIMALS,
            grid_size: 10,
            directions: &[],
        },
        Case {
            name: "animals 10x10 horizontal",
            words: ANIMALS,
            grid_size: 10,
            directions: &["horizontal"],
        },
        Case {
            name: "long words 12x12 all",
            words: LONG,
            grid_size: 12,
            directions: &[],
        },
        Case {
            name: "long words 20x20 all",
            words: LONG,
            grid_size: 20,
            directions: &[],
        },
    ]
}

/// Seed for run `rep`; wraps past `u64::MAX`.
fn seed_for_run(base: u64, rep: u64) -> u64 {
    base.wrapping_add(rep)
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut summary: Vec<(&'static str, f64, f64)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.name);
        let directions = if case.directions.is_empty() {
            EnabledDirections::all()
        } else {
            EnabledDirections::from_ids(case.directions)?
        };

        let _warmup =
            placement::generate_with_seed(case.words, case.grid_size, &directions, cli.seed)?;

        let mut times = Vec::new();
        let mut placed_share = 0.0;
        for rep in 0..cli.num_repeats {
            let t = Instant::now();
            let seed = seed_for_run(cli.seed, rep);
            let puzzle = placement::generate_with_seed(
                black_box(case.words),
                case.grid_size,
                &directions,
                seed,
            )?;
            times.push(t.elapsed().as_secs_f64());
            placed_share += puzzle.placed_words.len() as f64 / case.words.len() as f64;

            if rep == 0 && cli.print_grid {
                println!("{}\n", puzzle.grid);
            }
        }

        let med = median(times);
        let avg_placed = if cli.num_repeats == 0 {
            0.0
        } else {
            placed_share / cli.num_repeats as f64
        };
        eprintln!(
            "  → median {:.1}µs over {} run(s); {:.1}% of words placed on average",
            med * 1e6,
            cli.num_repeats,
            avg_placed * 100.0
        );
        summary.push((case.name, med, avg_placed));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<28} | {:>12} | {:>8}", "case", "median (µs)", "placed %");
    eprintln!("{:-<28}-+-{:-<12}-+-{:-<8}", "", "", "");
    for (name, med, placed) in &summary {
        eprintln!("{name:<28} | {:>12.1} | {:>8.1}", med * 1e6, placed * 100.0);
    }

    Ok(())
}
