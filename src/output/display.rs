//! Display functions for command results

use super::formatters::{format_counts, letter, yield_bar};
use crate::commands::{AnalysisResult, LetterReport, RankResult, ZipfReport};
use colored::Colorize;

/// Print the top of the ranking
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "─".repeat(70).cyan());
    println!(
        " {} {} of {} guesses",
        "TOP".bright_cyan().bold(),
        result.entries.len(),
        result.total_guesses
    );
    println!("{}", "─".repeat(70).cyan());

    for entry in &result.entries {
        let line = format!(
            "{:>4}) {} => Score: {:.2}",
            entry.rank,
            entry.word.to_uppercase().bright_white().bold(),
            entry.score
        );
        match entry.rates {
            Some(rates) => println!(
                "{line} | greenYield: {} | yellowYield: {}",
                format!("{:.2}%", rates.green).green(),
                format!("{:.2}%", rates.yellow).yellow()
            ),
            None => println!("{line}"),
        }
    }
    println!();
}

/// Print the Zipf ranking of one table
pub fn print_zipf_report(report: &ZipfReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ZIPF RANKING:".bright_cyan().bold(),
        report.table.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for entry in &report.entries {
        println!(
            "{:>3}) {} => score: {:.3}, zipf: {:.3}, relFrq: {:.3}",
            entry.rank,
            letter(entry.letter).to_string().bright_white().bold(),
            entry.cumulative_score,
            entry.zipf_weight,
            entry.relative_frequency
        );
    }
    println!();
}

/// Print letter counts per position and overall
pub fn print_letter_report(report: &LetterReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER FREQUENCIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (p, counts) in report.positions.iter().enumerate() {
        println!("\n📍 Position {}:", p + 1);
        println!("   {}", format_counts(counts));
    }

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   {}", format_counts(&report.overall));

    println!("\n🎯 {}", "Overall scores:".bright_cyan().bold());
    let scores: Vec<String> = report
        .overall_scores
        .iter()
        .map(|&(l, s)| format!("{}:{s:.3}", letter(l)))
        .collect();
    println!("   {}\n", scores.join(" "));
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_answers);
    if let Some(score) = result.score {
        println!("   Score:        {}", format!("{score:.2}").bright_yellow());
    } else {
        println!("   Score:        {}", "not in guess list".bright_black());
    }
    println!(
        "   Green yield:  [{}] {}",
        yield_bar(result.rates.green, 30).green(),
        format!("{:.2}%", result.rates.green).bright_yellow()
    );
    println!(
        "   Yellow yield: [{}] {}",
        yield_bar(result.rates.yellow, 30).yellow(),
        format!("{:.2}%", result.rates.yellow).bright_yellow()
    );

    println!("\n📈 {}", "Outcome breakdown:".bright_cyan().bold());
    for line in result.breakdown.lines() {
        println!("   {line}");
    }
    println!();
}
