//! Wordle Probe - CLI
//!
//! Wordle assistant using positional letter indexing and probe-word
//! exploration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_probe::{
    commands::{
        DEFAULT_MAX_TURNS, SolveConfig, print_exhaustive_statistics, run_assist, run_benchmark,
        run_exhaustive, solve_word,
    },
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    solver::Solver,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_probe",
    about = "Wordle assistant using positional letter indexing and probe-word exploration",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the word list, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: String,

    /// Target word length, in characters
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Override the found-letter count at which exploration stops
    /// (default: length/2 + 1)
    #[arg(long, global = true)]
    probe_threshold: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assist mode (default)
    Assist,

    /// Simulate solving a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },

    /// Benchmark the solver on randomly sampled words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Run the solver against every word in the list
    Exhaustive {
        /// Limit number of words to test
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_from_file(&cli.wordlist, cli.length)
        .with_context(|| format!("failed to read word list '{}'", cli.wordlist))?;
    anyhow::ensure!(
        !words.is_empty(),
        "word list '{}' contains no {}-letter words",
        cli.wordlist,
        cli.length
    );

    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => run_assist_command(&words, cli.length, cli.probe_threshold),
        Commands::Solve {
            word,
            verbose,
            max_turns,
        } => run_solve_command(
            &word,
            verbose,
            max_turns,
            &words,
            cli.length,
            cli.probe_threshold,
        ),
        Commands::Benchmark { count } => {
            let result = run_benchmark(&words, cli.length, count, cli.probe_threshold);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Exhaustive { limit } => {
            let stats = run_exhaustive(&words, cli.length, limit, cli.probe_threshold);
            print_exhaustive_statistics(&stats);
            Ok(())
        }
    }
}

fn run_assist_command(
    words: &[Word],
    length: usize,
    probe_threshold: Option<usize>,
) -> Result<()> {
    let mut solver = Solver::new(words, length);
    if let Some(threshold) = probe_threshold {
        solver = solver.with_probe_threshold(threshold);
    }

    run_assist(&mut solver).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    max_turns: usize,
    words: &[Word],
    length: usize,
    probe_threshold: Option<usize>,
) -> Result<()> {
    let mut config = SolveConfig::new(word.to_string());
    config.max_turns = max_turns;
    config.probe_threshold = probe_threshold;

    let result = solve_word(&config, words, length).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}
