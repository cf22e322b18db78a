//! Display functions for command results

use super::formatters::{bucket_histogram, likeness_label};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).green());
    println!(
        "Cracking: {}  ({})",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).green());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess,
            likeness_label(step.likeness, step.guess.len())
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let (Some(info), Some(worst)) = (step.information_value, step.worst_case) {
                println!("  Outcomes:   {info}");
                println!("  Worst case: {worst}");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Password accepted in {} guesses", result.steps.len())
                .green()
                .bold()
        );
    } else if result.contradiction {
        println!("{}", "No candidate fits the responses".red().bold());
    } else {
        println!(
            "{}",
            format!("Terminal locked after {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).green());
    println!(
        " {} {} ",
        "LIKENESS ANALYSIS:".bright_green().bold(),
        result.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).green());

    println!("\nAgainst {} candidates:", result.total_candidates);
    if !result.in_pool {
        println!("   {}", "(not a candidate itself)".bright_black());
    }
    println!(
        "   Outcomes:    {}",
        result.score.information_value().to_string().bright_yellow()
    );
    println!("   Worst case:  {}", result.score.worst_case());
    println!("   Entropy:     {:.3} bits", result.entropy);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );

    println!("\nLikeness buckets:");
    for row in bucket_histogram(&result.score, 30) {
        println!("   {}", row.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).green());
    println!(" {} ", "BENCHMARK RESULTS".bright_green().bold());
    println!("{}", "═".repeat(60).green());

    println!("\n{}", "Performance:".bright_green().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!("   Locked out:       {}", format!("{}", result.failed).red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses);
    println!("   Worst case:       {}", result.max_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n{}", "Distribution:".bright_green().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}
