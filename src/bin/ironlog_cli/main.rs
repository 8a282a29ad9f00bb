// ABOUTME: Ironlog CLI - reconstructs workout sessions from exported entries and prints reports
// ABOUTME: Subcommands for sessions, day groups, weekly progress, muscles, ranking, and full report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
//!
//! Usage:
//! ```bash
//! # List sessions with a 45 minute window
//! ironlog-cli sessions --input entries.json --window 45
//!
//! # Day groups in local time (UTC-5)
//! ironlog-cli days --input entries.json --utc-offset=-300
//!
//! # Last 4 weeks of progress as JSON
//! ironlog-cli weekly --input entries.json --weeks 4 --format json
//!
//! # Muscle group distribution
//! ironlog-cli muscles --input entries.json
//!
//! # Top 5 exercises by volume
//! ironlog-cli top-exercises --input entries.json --limit 5
//!
//! # Everything the dashboard shows, as JSON
//! ironlog-cli report --input entries.json --format json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use commands::OutputFormat;
use ironlog::config::{RuntimeSettings, SettingsOverrides};
use ironlog::intelligence::DashboardAnalyzer;
use ironlog::loader::load_entries;
use ironlog_core::errors::{AppError, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "ironlog-cli",
    about = "Ironlog workout session analytics",
    long_about = "Groups logged exercise entries into workout sessions and prints dashboard roll-ups."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Options shared by every subcommand
#[derive(Args)]
struct InputArgs {
    /// JSON file with an array of entries or {"entries": [...]}
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// Session window in minutes (default: 60 or `IRONLOG_SESSION_WINDOW_MINUTES`)
    #[arg(long, allow_hyphen_values = true)]
    window: Option<String>,

    /// Local offset from UTC in minutes (default: 0 or `IRONLOG_UTC_OFFSET_MINUTES`)
    #[arg(long, allow_negative_numbers = true)]
    utc_offset: Option<i32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List reconstructed sessions
    Sessions {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Group sessions by local calendar date
    Days {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Weekly progress, most recent weeks
    Weekly {
        #[command(flatten)]
        input: InputArgs,

        /// Number of weeks to keep
        #[arg(long)]
        weeks: Option<usize>,
    },

    /// Share of sessions per muscle group
    Muscles {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Exercises ranked by total volume
    TopExercises {
        #[command(flatten)]
        input: InputArgs,

        /// Number of exercises to keep
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Full dashboard report with summary
    Report {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Command {
    fn input(&self) -> &InputArgs {
        match self {
            Self::Sessions { input }
            | Self::Days { input }
            | Self::Weekly { input, .. }
            | Self::Muscles { input }
            | Self::TopExercises { input, .. }
            | Self::Report { input } => input,
        }
    }

    fn overrides(&self, verbose: bool) -> SettingsOverrides {
        let input = self.input();
        let mut overrides = SettingsOverrides {
            window_minutes: input.window.clone(),
            utc_offset_minutes: input.utc_offset,
            verbose,
            ..SettingsOverrides::default()
        };
        match self {
            Self::Weekly { weeks, .. } => overrides.weekly_buckets = *weeks,
            Self::TopExercises { limit, .. } => overrides.top_exercises = *limit,
            _ => {}
        }
        overrides
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, details = %err.details, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.code.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let overrides = cli.command.overrides(cli.verbose);
    overrides
        .logging_config()
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    // Window clamping warns while the config resolves, so logging goes first
    let settings = RuntimeSettings::from_env()?.apply_overrides(&overrides)?;

    let input = cli.command.input();
    info!(path = %input.input.display(), "Loading workout entries");
    let entries = load_entries(&input.input)?;
    let analyzer = DashboardAnalyzer::new(settings.analytics);

    match &cli.command {
        Command::Sessions { .. } => commands::sessions(&analyzer, &entries, input.format),
        Command::Days { .. } => commands::days(&analyzer, &entries, input.format),
        Command::Weekly { .. } => commands::weekly(&analyzer, &entries, input.format),
        Command::Muscles { .. } => commands::muscles(&analyzer, &entries, input.format),
        Command::TopExercises { .. } => {
            commands::top_exercises(&analyzer, &entries, input.format)
        }
        Command::Report { .. } => commands::report(&analyzer, &entries, input.format),
    }
}
