//! Simple interactive CLI mode
//!
//! Line-based loop for reporting feedback letter by letter and watching the
//! ranking change.

use super::{RankOptions, analyze_word, rank_guesses, zipf_report};
use crate::analysis::{Constraint, FixedLetter, Session, TableId};
use crate::output::{print_analysis_result, print_rank_result, print_zipf_report};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

const DEFAULT_TOP: usize = 10;

/// A command typed at the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Letters confirmed absent
    Grey(String),
    /// Letter confirmed at a position
    Green(FixedLetter),
    Top(usize),
    Analyze(String),
    /// 1-based position, or the overall table
    Zipf(Option<usize>),
    Help,
    Quit,
}

/// Parse one line of input
///
/// # Errors
/// Returns a message describing what was wrong with the input.
pub fn parse_command(input: &str) -> Result<SimpleCommand, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();

    match (head.to_lowercase().as_str(), args.as_slice()) {
        ("quit" | "q" | "exit", []) => Ok(SimpleCommand::Quit),
        ("help" | "h" | "?", []) => Ok(SimpleCommand::Help),
        ("grey" | "gray", letters) if !letters.is_empty() => {
            Ok(SimpleCommand::Grey(letters.concat()))
        }
        ("green", [spec]) => spec
            .parse::<FixedLetter>()
            .map(SimpleCommand::Green)
            .map_err(|e| e.to_string()),
        ("green", [letter, position]) => format!("{letter}{position}")
            .parse::<FixedLetter>()
            .map(SimpleCommand::Green)
            .map_err(|e| e.to_string()),
        ("top", []) => Ok(SimpleCommand::Top(DEFAULT_TOP)),
        ("top", [n]) => n
            .parse()
            .map(SimpleCommand::Top)
            .map_err(|_| format!("'{n}' is not a number")),
        ("analyze" | "a", [word]) => Ok(SimpleCommand::Analyze((*word).to_string())),
        ("zipf", []) => Ok(SimpleCommand::Zipf(None)),
        ("zipf", [position]) => position
            .parse()
            .map(|p| SimpleCommand::Zipf(Some(p)))
            .map_err(|_| format!("'{position}' is not a position")),
        _ => Err(format!("unknown command '{}'", input.trim())),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple(session: &mut Session<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Analyzer - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();
    show_top(session, DEFAULT_TOP);

    loop {
        let input = get_user_input("Command")?;
        if input.is_empty() {
            continue;
        }

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        match command {
            SimpleCommand::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::Grey(letters) => match session.eliminate_letters(&letters) {
                Ok(removed) => {
                    println!("✓ Removed {removed} scores for '{letters}'\n");
                    show_top(session, DEFAULT_TOP);
                }
                Err(e) => println!("❌ {e}\n"),
            },
            SimpleCommand::Green(fixed) => {
                let removed = session.apply(&Constraint::Fixed(fixed));
                println!("✓ Fixed {fixed}, removed {removed} scores\n");
                show_top(session, DEFAULT_TOP);
            }
            SimpleCommand::Top(n) => show_top(session, n),
            SimpleCommand::Analyze(word) => match analyze_word(session, &word) {
                Ok(result) => print_analysis_result(&result),
                Err(e) => println!("❌ {e}\n"),
            },
            SimpleCommand::Zipf(position) => match TableId::from_position(position) {
                Ok(table) => print_zipf_report(&zipf_report(session, table)),
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

fn show_top(session: &mut Session<'_>, limit: usize) {
    let result = rank_guesses(
        session,
        RankOptions {
            limit,
            with_yields: true,
            show_progress: false,
        },
    );
    print_rank_result(&result);
}

fn print_help() {
    println!("Report what the puzzle told you and the ranking updates:\n");
    println!("  {}   letters not in the answer", "grey <letters>".bright_white());
    println!("  {} letter at a position (1-5)", "green <letter> <pos>".bright_white());
    println!("  {}          best guesses", "top [n]".bright_white());
    println!("  {}   yields and outcome odds", "analyze <word>".bright_white());
    println!("  {}       letter ranking of a table", "zipf [pos]".bright_white());
    println!("  {}             exit\n", "quit".bright_white());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
