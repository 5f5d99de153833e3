use std::collections::HashSet;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordsearch::direction::EnabledDirections;
use wordsearch::errors::WordSearchError;
use wordsearch::grid::Cell;
use wordsearch::placement::{self, Puzzle, DEFAULT_GRID_SIZE};
use wordsearch::word_list::WordList;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word search puzzle generator
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Words to hide (case-insensitive; duplicates are ignored)
    words: Vec<String>,

    /// Read more words from a file, one per line ('#' starts a comment line)
    #[arg(short = 'f', long)]
    word_file: Option<String>,

    /// Grid width and height
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Allowed direction id (repeatable; default: all eight)
    #[arg(short = 'd', long = "direction", value_name = "ID")]
    directions: Vec<String>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the answer key
    #[arg(short = 'k', long)]
    key: bool,

    /// Print the puzzle as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Entry point of the word search CLI.
///
/// Delegates to [`try_main`], printing any error in detailed form before exiting with code 1.
fn main() -> ExitCode {
    wordsearch::log::init_logger(wordsearch::log::debug_from_env());

    if let Err(e) = try_main() {
        if let Some(ws_err) = e.downcast_ref::<WordSearchError>() {
            eprintln!("Error: {}", ws_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Collect words from the command line and the optional word file.
/// 2. Resolve the allowed directions.
/// 3. Generate the puzzle (seeded if asked).
/// 4. Print the puzzle (text or JSON), plus the key if asked.
/// 5. Report dropped words and timing on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut words = match &cli.word_file {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::new(),
    };
    words.extend(&cli.words);

    let directions = if cli.directions.is_empty() {
        EnabledDirections::all()
    } else {
        EnabledDirections::from_ids(&cli.directions)?
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("using seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let t_gen = Instant::now();
    let puzzle = placement::generate(words.words(), cli.size, &directions, &mut rng)?;
    let gen_secs = t_gen.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        print_puzzle(&puzzle, cli.key);
    }

    if !puzzle.unplaced_words.is_empty() {
        log::warn!(
            "{} word(s) could not be placed: {}",
            puzzle.unplaced_words.len(),
            puzzle.unplaced_words.join(", ")
        );
    }

    eprintln!(
        "Placed {}/{} words in a {}x{} grid in {:.3}s (seed {seed}).",
        puzzle.placed_words.len(),
        words.len(),
        cli.size,
        cli.size,
        gen_secs
    );

    Ok(())
}

fn print_puzzle(puzzle: &Puzzle, with_key: bool) {
    println!("{}", puzzle.grid);
    println!();

    let mut listed: Vec<&str> = puzzle.placed_words.iter().map(|p| p.word.as_str()).collect();
    listed.sort_unstable();
    println!("Find these words ({}):", listed.len());
    for word in listed {
        println!("  {word}");
    }

    if with_key {
        println!();
        println!("Answer key:");
        println!("{}", key_grid(puzzle));
        println!();
        for placed in &puzzle.placed_words {
            let start = placed.positions.first().copied().unwrap_or(Cell::new(0, 0));
            println!("  {:<12} {} {}", placed.word, start, placed.direction.label);
        }
    }
}

/// The grid with every cell that is not part of a placed word blanked out.
fn key_grid(puzzle: &Puzzle) -> String {
    let covered: HashSet<Cell> = puzzle
        .placed_words
        .iter()
        .flat_map(|p| p.positions.iter().copied())
        .collect();

    let size = puzzle.grid.size();
    let mut lines = Vec::with_capacity(size);
    for row in 0..size {
        let line: Vec<String> = (0..size)
            .map(|col| {
                let cell = Cell::new(row, col);
                match puzzle.grid.get(cell) {
                    Some(ch) if covered.contains(&cell) => ch.to_string(),
                    _ => "·".to_string(),
                }
            })
            .collect();
        lines.push(line.join(" "));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_directions_and_seed() {
        let cli = Cli::try_parse_from([
            "wordsearch",
            "cat",
            "dog",
            "-d",
            "horizontal",
            "-d",
            "vertical",
            "--seed",
            "7",
            "-s",
            "12",
            "-k",
        ])
        .unwrap();
        assert_eq!(cli.words, vec!["cat", "dog"]);
        assert_eq!(cli.directions, vec!["horizontal", "vertical"]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.size, 12);
        assert!(cli.key);
        assert!(!cli.json);
    }

    #[test]
    fn test_key_grid_blanks_filler() {
        let dirs = EnabledDirections::from_ids(["horizontal"]).unwrap();
        let puzzle = placement::generate_with_seed(&["CAT"], 3, &dirs, 1).unwrap();
        let key = key_grid(&puzzle);
        let row = puzzle.placed_words[0].positions[0].row;
        assert_eq!(key.lines().nth(row), Some("C A T"));
        assert_eq!(key.matches('·').count(), 6);
    }
}
