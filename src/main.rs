//! Genexpr CLI - evolve an expression that evaluates to a target number.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::process::ExitCode;

/// Genexpr - evolutionary search for digit/operator expressions
#[derive(Parser, Debug)]
#[command(name = "genexpr")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the search (the default when no command is given)
    Run(cli::evolve::RunArgs),

    /// Decode, evaluate and score a single genotype
    Inspect {
        /// Symbolic codes, each in 0..=15
        #[arg(required = true)]
        codes: Vec<u8>,

        /// Target value to score against
        #[arg(short, long, default_value = "42")]
        target: f64,
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

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Some(Commands::Run(run)) => cli::evolve::execute(&run),
        None => cli::evolve::execute(&cli::evolve::RunArgs::default()),
        Some(Commands::Inspect { codes, target }) => cli::inspect::execute(codes, target),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
