//! Wordle Trie - CLI
//!
//! Narrows a dictionary down to the words consistent with Wordle clues.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use wordle_trie::{
    commands::{
        PlayConfig, SolveConfig, TestAllConfig, filter_candidates, run_play, run_test_all,
        solve_word,
    },
    engine::ConstraintEngine,
    output::{print_candidates, print_solve_result, print_test_all_statistics},
    wordlists::{DictionarySource, EmbeddedDictionary, FileDictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_trie",
    about = "Wordle candidate eliminator backed by a prunable prefix tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length of the puzzle
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// List candidates when at most this many remain
    #[arg(long, global = true, default_value = "20")]
    show: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter guesses and clues as you play
    Play,

    /// Apply GUESS:CLUES pairs in order and print the remaining candidates
    Filter {
        /// Pairs such as crane:BYBBG
        guesses: Vec<String>,
    },

    /// Solve a specific target word by guessing the first candidate each turn
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },

    /// Solve every dictionary word of the chosen length
    TestAll {
        /// Limit number of words to test
        #[arg(long)]
        limit: Option<usize>,

        /// Test this many randomly chosen words
        #[arg(long)]
        sample: Option<usize>,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

/// Resolve the -d flag to a dictionary source
fn dictionary_source(name: &str) -> Box<dyn DictionarySource> {
    match name {
        "embedded" => Box::new(EmbeddedDictionary),
        path => Box::new(FileDictionary::new(path)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = dictionary_source(&cli.dictionary);
    let engine = ConstraintEngine::new(cli.length, &source)
        .with_context(|| format!("loading dictionary '{}'", cli.dictionary))?;
    info!(
        "{} candidate words of length {}",
        engine.candidate_count(),
        cli.length
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine, &*source, cli.show),
        Commands::Filter { guesses } => run_filter_command(engine, &guesses, cli.show),
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => run_solve_command(engine, word, verbose, max_guesses),
        Commands::TestAll {
            limit,
            sample,
            max_guesses,
        } => run_test_all_command(&*source, cli.length, limit, sample, max_guesses),
    }
}

fn run_play_command(
    mut engine: ConstraintEngine,
    source: &dyn DictionarySource,
    show_limit: usize,
) -> Result<()> {
    let config = PlayConfig { show_limit };
    run_play(
        &mut engine,
        source,
        &config,
        io::stdin().lock(),
        io::stdout(),
    )
}

fn run_filter_command(
    mut engine: ConstraintEngine,
    guesses: &[String],
    show_limit: usize,
) -> Result<()> {
    let candidates = filter_candidates(&mut engine, guesses)?;
    print_candidates(&candidates, show_limit);
    Ok(())
}

fn run_solve_command(
    engine: ConstraintEngine,
    word: String,
    verbose: bool,
    max_guesses: usize,
) -> Result<()> {
    let config = SolveConfig {
        target: word,
        max_guesses,
    };
    let result = solve_word(config, engine)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_test_all_command(
    source: &dyn DictionarySource,
    length: usize,
    limit: Option<usize>,
    sample: Option<usize>,
    max_guesses: usize,
) -> Result<()> {
    let words = source.words_of_length(length)?;

    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Elimination Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} words of length {length}", words.len());
    println!();

    let config = TestAllConfig {
        limit,
        sample,
        max_guesses,
        show_progress: true,
    };
    let stats = run_test_all(&words, length, &config)?;
    print_test_all_statistics(&stats);
    Ok(())
}
