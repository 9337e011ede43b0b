//! Countdown Solver - CLI
//!
//! Solves letters, numbers and conundrum rounds, and judges answers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown_solver::{
    commands::{
        check_conundrum, check_letters, check_numbers, run_benchmark, solve_conundrum,
        solve_letters, solve_numbers,
    },
    engine::{Engine, EngineConfig},
    output::{
        print_benchmark_result, print_check_report, print_conundrum_report, print_letters_report,
        print_numbers_report,
    },
    solver::{LettersConfig, NumbersConfig, TieBreak, WordIndex},
    wordlists::{
        DICTIONARY,
        loader::{index_from_file, index_from_slice},
    },
};
use log::LevelFilter;
use serde::Serialize;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "countdown",
    about = "Solver and answer checker for Countdown letters, numbers and conundrum rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Shortest word the letters solver reports
    #[arg(long, global = true, default_value = "4")]
    min_length: usize,

    /// Numbers tie-break: fewest-operations (default) or canonical
    #[arg(short, long, global = true, default_value = "fewest-operations")]
    tie_break: String,

    /// Stop the numbers search after this many states
    #[arg(long, global = true)]
    max_states: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the longest words in a letters draw
    Letters {
        /// The nine drawn letters
        letters: String,

        /// List every fitting word, not just the longest
        #[arg(short, long)]
        all: bool,
    },

    /// Find the best expression for a numbers draw
    Numbers {
        /// The drawn numbers
        #[arg(required = true)]
        numbers: Vec<u32>,

        #[arg(short = 'T', long)]
        target: u32,

        /// Accept any one to six positive numbers and any positive target
        #[arg(short, long)]
        custom: bool,
    },

    /// Unscramble a conundrum
    Conundrum {
        scramble: String,

        /// Scramble length for variant rounds
        #[arg(short, long, default_value = "9")]
        length: usize,
    },

    /// Judge a letters-round word
    CheckLetters { letters: String, word: String },

    /// Judge a numbers-round answer (expression or steps)
    CheckNumbers {
        #[arg(required = true)]
        numbers: Vec<u32>,

        #[arg(short = 'T', long)]
        target: u32,

        /// Expression such as "3*5+2" or steps such as "3*5=15, 15+2=17"
        #[arg(short, long)]
        answer: String,

        #[arg(short, long)]
        custom: bool,
    },

    /// Judge a conundrum guess
    CheckConundrum {
        scramble: String,
        word: String,

        #[arg(short, long, default_value = "9")]
        length: usize,
    },

    /// Solve random numbers draws and report timing
    Benchmark {
        /// Number of random draws to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the dictionary based on the -d flag
fn load_index(dictionary: &str) -> Result<WordIndex> {
    match dictionary {
        "embedded" => Ok(index_from_slice(DICTIONARY)),
        path => index_from_file(path).with_context(|| format!("reading word list {path}")),
    }
}

fn emit<T: Serialize>(report: &T, json: bool, print: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print(report);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let conundrum_length = match cli.command {
        Commands::Conundrum { length, .. } | Commands::CheckConundrum { length, .. } => length,
        _ => countdown_solver::core::CONUNDRUM_LENGTH,
    };
    let config = EngineConfig {
        letters: LettersConfig::new(cli.min_length),
        numbers: NumbersConfig::new(TieBreak::from_name(&cli.tie_break), cli.max_states),
        conundrum_length,
        ..EngineConfig::default()
    };

    // The benchmark only needs the numbers solver
    let index = if matches!(cli.command, Commands::Benchmark { .. }) {
        WordIndex::default()
    } else {
        load_index(&cli.dictionary)?
    };
    let engine = Engine::new(Arc::new(index), config);

    match cli.command {
        Commands::Letters { letters, all } => {
            let report = solve_letters(&engine, &letters, all)?;
            emit(&report, cli.json, print_letters_report)
        }
        Commands::Numbers {
            numbers,
            target,
            custom,
        } => {
            let report = solve_numbers(&engine, numbers, target, custom)?;
            emit(&report, cli.json, print_numbers_report)
        }
        Commands::Conundrum { scramble, .. } => {
            let report = solve_conundrum(&engine, &scramble)?;
            emit(&report, cli.json, print_conundrum_report)
        }
        Commands::CheckLetters { letters, word } => {
            let report = check_letters(&engine, &letters, &word)?;
            emit(&report, cli.json, print_check_report)
        }
        Commands::CheckNumbers {
            numbers,
            target,
            answer,
            custom,
        } => {
            let report = check_numbers(&engine, numbers, target, custom, &answer)?;
            emit(&report, cli.json, print_check_report)
        }
        Commands::CheckConundrum { scramble, word, .. } => {
            let report = check_conundrum(&engine, &scramble, &word)?;
            emit(&report, cli.json, print_check_report)
        }
        Commands::Benchmark { count, seed } => {
            if !cli.json {
                println!("Solving {count} random numbers draws...");
            }
            let solver = countdown_solver::solver::NumbersSolver::new(engine.config().numbers);
            let result = run_benchmark(&solver, count, seed)?;
            emit(&result, cli.json, print_benchmark_result)
        }
    }
}
