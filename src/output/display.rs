//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, format_millis};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::GuessRecommendation;
use colored::Colorize;
use std::io::{self, Write};

/// Write a turn's recommendation
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_recommendation<W: Write>(
    output: &mut W,
    recommendation: &GuessRecommendation,
) -> io::Result<()> {
    writeln!(
        output,
        "Time to make guess was {}",
        format_millis(recommendation.elapsed_millis())
    )?;
    writeln!(
        output,
        "You should guess {}",
        recommendation.best_guess.text().bright_yellow().bold()
    )?;
    writeln!(
        output,
        "Second best guess should be {}",
        recommendation.second_best_guess.text().yellow()
    )?;
    writeln!(
        output,
        "Number of possibilities is {}",
        recommendation.remaining_candidates
    )?;
    if recommendation.is_solved() {
        writeln!(output, "{}", "Only one word left!".green().bold())?;
    }
    Ok(())
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.guess, step.mask),
            step.mask.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.second_best != step.guess {
                println!("  Runner-up:  {}", step.second_best.text().to_uppercase());
            }
            if i > 0 {
                println!("  Ranked in:  {}", format_millis(step.elapsed.as_millis()));
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ELIMINATION ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(
        result.expected_eliminated,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Eliminates:  [{}] {}",
        bar.green(),
        format!("{:.1} expected", result.expected_eliminated).bright_yellow()
    );
    println!(
        "   Remaining:   {:.1} candidates expected",
        result.expected_remaining
    );
    println!("   Masks:       {} distinct", result.mask_count);
    println!("   Worst case:  {} candidates", result.largest_bucket);

    if !result.top_masks.is_empty() {
        println!("\n📈 {}", "Most likely feedback:".bright_cyan().bold());
        for (mask, count, probability) in &result.top_masks {
            println!(
                "   {} {count:5} ({:5.1}%)",
                mask.to_emoji(),
                probability * 100.0
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turns}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Unsolved:".red().bold());
        let words: Vec<String> = result
            .failures
            .iter()
            .take(20)
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("   {}", words.join(", "));
        if result.failures.len() > 20 {
            println!("   ... and {} more", result.failures.len() - 20);
        }
    }
}
