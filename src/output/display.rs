//! Display functions for command results

use super::formatters::{create_progress_bar, distance_label, format_steps, verdict_label};
use crate::commands::{BenchmarkResult, CheckReport, ConundrumReport, LettersReport, NumbersReport};
use crate::solver::Solution;
use colored::Colorize;

fn header(title: &str, subject: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{} {}", title, subject.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());
}

/// Print the best words for a letters draw
pub fn print_letters_report(report: &LettersReport) {
    header("Letters:", report.draw.letters());
    println!(
        "  {} vowels, {} consonants",
        report.vowels, report.consonants
    );

    println!();
    if report.solution.is_empty() {
        println!("{}", "No word fits this draw".red().bold());
    } else {
        println!(
            "{}",
            format!("Best: {} letters", report.solution.best_length)
                .green()
                .bold()
        );
        for word in &report.solution.words {
            println!("  {}", word.bright_white());
        }
    }

    if let Some(all) = &report.all_words {
        println!("\n{} ({})", "All words:".bright_cyan().bold(), all.len());
        let mut length = 0;
        for word in all {
            if word.len() != length {
                length = word.len();
                print!("\n  {length:>2}: ");
            }
            print!("{word} ");
        }
        println!();
    }
}

/// Print the best expression for a numbers draw
pub fn print_numbers_report(report: &NumbersReport) {
    header("Numbers:", &report.draw.to_string());

    let solution = &report.solution;
    println!();
    let summary = format!(
        "{} = {} ({})",
        solution.expression,
        solution.value,
        distance_label(solution.distance)
    );
    if solution.exact {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.yellow().bold());
    }

    for line in format_steps(&report.steps) {
        println!("  {line}");
    }

    println!(
        "\n  {} states explored{}",
        solution.states_explored,
        if solution.complete {
            String::new()
        } else {
            " (search cut short)".red().to_string()
        }
    );
}

/// Print the anagrams of a conundrum
pub fn print_conundrum_report(report: &ConundrumReport) {
    header("Conundrum:", report.scramble.letters());

    println!();
    match report.solution.words.as_slice() {
        [] => println!("{}", "No dictionary word uses every letter".red().bold()),
        [word] => println!("{}", word.green().bold()),
        words => {
            println!(
                "{}",
                format!("Ambiguous: {} answers", words.len()).yellow().bold()
            );
            for word in words {
                println!("  {word}");
            }
        }
    }
}

/// Print a judged answer
pub fn print_check_report(report: &CheckReport) {
    header("Checking:", &report.answer);
    println!("  Round:   {}", report.round);

    let result = &report.result;
    let verdict = verdict_label(&result.verdict);
    if result.is_valid() {
        println!("  Verdict: {}", verdict.green().bold());
    } else {
        println!("  Verdict: {}", verdict.red().bold());
    }
    if let Some(value) = result.achieved {
        println!("  Reaches: {value}");
    }
    println!(
        "  Score:   {}",
        result.score.to_string().bright_yellow().bold()
    );

    let best = match &result.ground_truth {
        Solution::Letters(s) if s.is_empty() => "no word fits".to_string(),
        Solution::Letters(s) => format!("{} ({} letters)", s.words.join(", "), s.best_length),
        Solution::Numbers(s) => format!("{} = {}", s.expression, s.value),
        Solution::Conundrum(s) if s.is_empty() => "no answer".to_string(),
        Solution::Conundrum(s) => s.words.join(", "),
    };
    println!("  Best:    {}", best.bright_white());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Draws solved:     {}", result.total_draws);
    println!(
        "   Exact:            {}",
        format!("{} ({:.1}%)", result.exact, result.exact_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Avg operations:   {:.2}", result.average_operations);
    println!("   States explored:  {}", result.total_states);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Slowest draw:     {:.1?}", result.slowest);
    println!("   Draws/second:     {:.1}", result.draws_per_second);

    println!("\n📈 {}", "Distance from target:".bright_cyan().bold());
    for (&distance, &count) in &result.distance_distribution {
        let pct = (count as f64 / result.total_draws as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {:>8}: {} {count:4} ({pct:5.1}%)", distance_label(distance), bar.green());
    }
}
