//! Test all words - exhaustive engine evaluation
//!
//! Solves every dictionary word of one length (or a subset) and aggregates
//! how many guesses first-candidate play needs.

use super::solve::{SolveConfig, SolveError, SolveOutcome, solve_word};
use crate::engine::ConstraintEngine;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which words to test and how
pub struct TestAllConfig {
    /// Test at most this many targets
    pub limit: Option<usize>,
    /// Pick this many targets at random instead of taking them in order
    pub sample: Option<usize>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl TestAllConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            sample: None,
            max_guesses: 6,
            show_progress: true,
        }
    }
}

impl Default for TestAllConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub outcome: SolveOutcome,
    pub duration: Duration,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub out_of_guesses: usize,
    /// Targets pruned away by their own clues (repeated-letter feedback)
    pub exhausted: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub max_allowed: usize,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_words: Vec<(String, usize)>,
    pub exhausted_words: Vec<String>,
}

/// Choose the targets to test, sorted
#[must_use]
pub fn select_targets(words: &[String], config: &TestAllConfig) -> Vec<String> {
    let mut targets: Vec<String> = match config.sample {
        Some(amount) => words
            .choose_multiple(&mut rand::rng(), amount)
            .cloned()
            .collect(),
        None => words.to_vec(),
    };
    targets.sort();
    targets.truncate(config.limit.unwrap_or(targets.len()));
    targets
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));

    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb
}

/// Solve every selected word of `word_length` letters from `words`
///
/// Targets are solved in parallel, each on its own copy of a freshly built
/// engine.
///
/// # Errors
///
/// Returns an error if the engine cannot be built (zero word length).
pub fn run_test_all(
    words: &[String],
    word_length: usize,
    config: &TestAllConfig,
) -> Result<TestAllStatistics, SolveError> {
    let base = ConstraintEngine::from_words(word_length, words)?;
    let targets: Vec<String> = select_targets(words, config)
        .into_iter()
        .filter(|word| base.is_candidate(word))
        .collect();

    info!("testing {} words of length {word_length}", targets.len());

    let pb = progress_bar(targets.len(), config.show_progress);
    let total_start = Instant::now();

    let results: Vec<WordTestResult> = targets
        .par_iter()
        .map(|target| {
            let word_start = Instant::now();
            let solve_config = SolveConfig {
                target: target.clone(),
                max_guesses: config.max_guesses,
            };
            let result = solve_word(solve_config, base.clone());
            pb.inc(1);

            result.map(|solved| WordTestResult {
                word: target.clone(),
                num_guesses: solved.guesses.len(),
                guesses: solved.guesses.into_iter().map(|step| step.word).collect(),
                outcome: solved.outcome,
                duration: word_start.elapsed(),
            })
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, config.max_guesses, total_start.elapsed()))
}

fn summarize(
    results: &[WordTestResult],
    max_allowed: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&WordTestResult> = results
        .iter()
        .filter(|r| r.outcome == SolveOutcome::Solved)
        .collect();

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in &solved {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.word.clone(), r.num_guesses))
        .collect();
    hardest_words.sort_by(|(a_word, a), (b_word, b)| b.cmp(a).then_with(|| a_word.cmp(b_word)));
    hardest_words.truncate(10);

    let exhausted_words: Vec<String> = results
        .iter()
        .filter(|r| r.outcome == SolveOutcome::Exhausted)
        .map(|r| r.word.clone())
        .collect();

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        out_of_guesses: results
            .iter()
            .filter(|r| r.outcome == SolveOutcome::OutOfGuesses)
            .count(),
        exhausted: exhausted_words.len(),
        guess_distribution,
        max_allowed,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        hardest_words,
        exhausted_words,
    }
}
