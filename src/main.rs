//! Wordle Engine - CLI
//!
//! Wordle guess recommender with TUI and CLI modes, ranking guesses by the expected
//! number of candidates they eliminate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_engine::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, run_benchmark, run_simple, select_answers,
        solve_word,
    },
    core::Word,
    dictionary::{Dictionary, loader::load_from_file},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_OPENING, Engine},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle guess recommender maximizing expected eliminations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Opening guess
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented prompts)
    Simple {
        /// Turns per game
        #[arg(short, long, default_value = "5")]
        turns: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_turns: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the expected eliminations of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of feedback masks to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Benchmark the engine across dictionary words
    Benchmark {
        /// Number of random words to test (default: every word)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for picking the random words
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_turns: usize,
    },
}

fn load_dictionary(path: &Path) -> Result<Arc<Dictionary>> {
    let dictionary = load_from_file(path)
        .with_context(|| format!("Failed to load dictionary from {}", path.display()))?;
    Ok(Arc::new(dictionary))
}

fn build_engine(dictionary: Arc<Dictionary>, opening: &str) -> Result<Engine> {
    let opening =
        Word::new(opening).with_context(|| format!("Invalid opening guess '{opening}'"))?;
    if !dictionary.contains(&opening) {
        warn!("opening guess {opening} is not in the dictionary");
    }
    Ok(Engine::with_opening(dictionary, opening))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.dictionary)?;
    let mut engine = build_engine(Arc::clone(&dictionary), &cli.opening)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple { turns } => {
            let stdin = io::stdin();
            run_simple(&mut engine, &mut stdin.lock(), &mut io::stdout(), turns)
        }
        Commands::Solve {
            word,
            max_turns,
            verbose,
        } => {
            let config = SolveConfig {
                target: word,
                max_turns,
            };
            let result = solve_word(&config, &mut engine)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &engine, top)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_turns,
        } => run_benchmark_command(&dictionary, &engine, count, seed, max_turns),
    }
}

fn run_benchmark_command(
    dictionary: &Arc<Dictionary>,
    engine: &Engine,
    count: Option<usize>,
    seed: Option<u64>,
    max_turns: usize,
) -> Result<()> {
    let answers = select_answers(dictionary, count, seed);
    println!(
        "Running benchmark on {} words with opening {}...",
        answers.len(),
        engine.first_guess().text().to_uppercase()
    );

    let config = BenchmarkConfig {
        opening: engine.first_guess(),
        max_turns,
        show_progress: true,
    };
    let result = run_benchmark(dictionary, &answers, &config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(engine: Engine) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
