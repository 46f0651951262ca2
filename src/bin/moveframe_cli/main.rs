// ABOUTME: Moveframe CLI - command-line front end to the planner input engine
// ABOUTME: Normalizes field input, propagates plan rows and builds circuit tables as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moveframe Planner
//!
//! Usage:
//! ```bash
//! # Normalize a rowing pace
//! moveframe-cli normalize --sport rowing --field pace 1305
//!
//! # Check a heart rate against its bounds
//! moveframe-cli range --field pulse 250
//!
//! # Copy row 2 of a plan down to the rows below it
//! moveframe-cli copy-down --rows plan.json --from 2
//!
//! # Build a 2 x 2 x 3 circuit table, then insert one circuit after A
//! moveframe-cli circuit generate --circuits 2 --series 2 --stations 3 > table.json
//! moveframe-cli circuit insert --table table.json --after A --count 1 --series 1 --stations 2
//!
//! # Show the field configuration of a sport
//! moveframe-cli sports --sport ski
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use moveframe_planner::config::PlannerConfig;
use moveframe_planner::engine::{FieldKind, NumericField};
use moveframe_planner::errors::AppResult;
use moveframe_planner::logging::LoggingConfig;
use moveframe_planner::models::SportType;

use helpers::display::print_error;

#[derive(Parser)]
#[command(
    name = "moveframe-cli",
    about = "Moveframe planner input engine",
    long_about = "Normalizes workout field input, propagates individual plan rows and builds circuit tables. All output is JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Normalize a time, pace, pause or reps-time value
    Normalize {
        /// Sport (defaults to MOVEFRAME_DEFAULT_SPORT)
        #[arg(long)]
        sport: Option<SportType>,

        /// Field kind: time, pace, pause or reps-time
        #[arg(long)]
        field: FieldKind,

        /// RUN pace is per kilometer
        #[arg(long)]
        km_pace: bool,

        /// Treat the value as a keystroke in progress
        #[arg(long)]
        live: bool,

        /// Raw input
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },

    /// Check a numeric field against its bounds
    Range {
        /// Field: row-per-minute, reps, pulse or weight
        #[arg(long)]
        field: NumericField,

        /// Raw input
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },

    /// Copy one individual plan row down to every row below it
    CopyDown {
        /// JSON file holding the plan rows
        #[arg(long)]
        rows: PathBuf,

        /// Index of the source row
        #[arg(long)]
        from: usize,
    },

    /// Circuit table commands
    Circuit {
        #[command(subcommand)]
        action: CircuitCommand,
    },

    /// Show sport field configuration
    Sports {
        /// Only this sport
        #[arg(long)]
        sport: Option<SportType>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CircuitCommand {
    /// Build a fresh circuit table
    Generate {
        /// Number of circuits
        #[arg(long)]
        circuits: usize,

        /// Series per circuit
        #[arg(long)]
        series: u32,

        /// Stations per series
        #[arg(long)]
        stations: u32,

        /// Default pause (defaults to MOVEFRAME_PAUSE_STATIONS)
        #[arg(long)]
        pause: Option<String>,
    },

    /// Insert circuits into an existing table
    Insert {
        /// JSON file holding the table
        #[arg(long)]
        table: PathBuf,

        /// Insert after this circuit letter (end of list when omitted)
        #[arg(long)]
        after: Option<String>,

        /// Number of circuits to insert
        #[arg(long)]
        count: usize,

        /// Series of each new circuit
        #[arg(long)]
        series: u32,

        /// Stations of each new circuit
        #[arg(long)]
        stations: u32,

        /// Rebuild every row blank instead of keeping entered values
        #[arg(long)]
        discard_edits: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Logging setup failed: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(&error);
            ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = PlannerConfig::from_env()?;

    match cli.command {
        Command::Normalize {
            sport,
            field,
            km_pace,
            live,
            raw,
        } => commands::normalize::run(
            &config,
            sport.unwrap_or(config.default_sport),
            field,
            km_pace,
            live,
            &raw,
        ),
        Command::Range { field, raw } => commands::range::run(field, &raw),
        Command::CopyDown { rows, from } => commands::plan::copy_down(&rows, from),
        Command::Circuit { action } => match action {
            CircuitCommand::Generate {
                circuits,
                series,
                stations,
                pause,
            } => commands::circuit::generate(
                &config,
                circuits,
                series,
                stations,
                pause.as_deref(),
            ),
            CircuitCommand::Insert {
                table,
                after,
                count,
                series,
                stations,
                discard_edits,
            } => commands::circuit::insert(
                &config,
                &table,
                after.as_deref(),
                count,
                (series, stations),
                discard_edits,
            ),
        },
        Command::Sports { sport } => commands::sports::show(&config, sport),
    }
}
