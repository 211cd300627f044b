//! Wordle Analyzer - CLI
//!
//! Ranks guesses by Zipf-style letter frequency scoring and reports letter
//! tables, match yields and outcome probabilities.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_analyze::{
    analysis::{FixedLetter, TableId},
    commands::{RankOptions, analyze_word, letter_report, rank_guesses, run_simple, zipf_report},
    config::{DEFAULT_ALLOWED_FILE, DEFAULT_ANSWERS_FILE, SessionConfig},
    output::{print_analysis_result, print_letter_report, print_rank_result, print_zipf_report},
};

#[derive(Parser)]
#[command(
    name = "wordle_analyze",
    about = "Rank Wordle guesses by positional letter frequency with Zipf-style scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list
    #[arg(long, global = true, env = "WORDLE_ANSWERS", default_value = DEFAULT_ANSWERS_FILE)]
    answers: PathBuf,

    /// Allowed guess word list (answers are added to it)
    #[arg(long, global = true, env = "WORDLE_ALLOWED", default_value = DEFAULT_ALLOWED_FILE)]
    allowed: PathBuf,

    /// Letters known to be absent, e.g. "soadclint"
    #[arg(long, global = true)]
    absent: Option<String>,

    /// Letter known at a 1-based position, e.g. "e5" (repeatable)
    #[arg(long, global = true)]
    fixed: Vec<FixedLetter>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank guesses, best first (default)
    Rank {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,

        /// Skip green/yellow yield calculation
        #[arg(long)]
        no_yields: bool,
    },

    /// Show the Zipf letter ranking of a table
    Zipf {
        /// 1-based letter position; omit for the overall table
        #[arg(short, long)]
        position: Option<usize>,
    },

    /// Show letter counts and overall scores
    Letters,

    /// Show yields and outcome probabilities for a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Interactive mode: report grey and green letters as you play
    Simple,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig {
        answers_path: cli.answers,
        allowed_path: cli.allowed,
        absent: cli.absent,
        fixed: cli.fixed,
    };

    let corpus = config.load_corpus().context("could not load word lists")?;
    let mut session = config
        .build_session(&corpus)
        .context("could not apply constraints")?;

    // Default to the ranking if no command given
    let command = cli.command.unwrap_or(Commands::Rank {
        limit: 50,
        no_yields: false,
    });

    match command {
        Commands::Rank { limit, no_yields } => {
            let result = rank_guesses(
                &mut session,
                RankOptions {
                    limit,
                    with_yields: !no_yields,
                    show_progress: true,
                },
            );
            print_rank_result(&result);
        }
        Commands::Zipf { position } => {
            let table = TableId::from_position(position)?;
            print_zipf_report(&zipf_report(&session, table));
        }
        Commands::Letters => print_letter_report(&letter_report(&session)),
        Commands::Analyze { word } => {
            let result = analyze_word(&mut session, &word)?;
            print_analysis_result(&result);
        }
        Commands::Simple => run_simple(&mut session)?,
    }

    Ok(())
}
