//! Display functions for command results

use super::formatters::{clues_to_emoji, create_progress_bar, format_candidates};
use crate::commands::{SolveOutcome, SolveResult, TestAllStatistics};
use colored::Colorize;

/// Print the candidate list with a count header
pub fn print_candidates(candidates: &[String], limit: usize) {
    println!(
        "\n📋 {} candidate{}",
        candidates.len().to_string().bright_yellow().bold(),
        if candidates.len() == 1 { "" } else { "s" }
    );
    if !candidates.is_empty() {
        println!("{}", format_candidates(candidates, limit));
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            clues_to_emoji(&step.clues)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    match result.outcome {
        SolveOutcome::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        ),
        SolveOutcome::OutOfGuesses => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        ),
        SolveOutcome::Exhausted => println!(
            "{}",
            "❌ Every candidate was eliminated (repeated-letter clues exclude the letter)"
                .red()
                .bold()
        ),
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", percent(stats.solved, stats.total_words)).green()
    );
    if stats.out_of_guesses > 0 {
        println!(
            "  Out of guesses:      {} {}",
            stats.out_of_guesses,
            format!("({:.1}%)", percent(stats.out_of_guesses, stats.total_words)).red()
        );
    }
    if stats.exhausted > 0 {
        println!(
            "  Self-eliminated:     {} {}",
            stats.exhausted,
            format!("({:.1}%)", percent(stats.exhausted, stats.total_words)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    if stats.total_words > 0 {
        println!(
            "  Time per word:       {:.2}ms",
            stats.total_time.as_secs_f64() * 1000.0 / stats.total_words as f64
        );
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats
        .guess_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    for guesses in 1..=stats.max_allowed {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses} guesses: {} {count:4} ({:5.1}%)",
            bar.green(),
            percent(count, stats.solved)
        );
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.exhausted_words.is_empty() {
        println!(
            "\n🧩 {}",
            "Eliminated By Their Own Clues".red().bold()
        );
        for word in stats.exhausted_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
