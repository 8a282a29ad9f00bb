// ABOUTME: Report commands for ironlog-cli
// ABOUTME: Runs the analyzer stage a subcommand needs and hands the result to the display helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use clap::ValueEnum;
use ironlog::intelligence::{muscle_distribution, DashboardAnalyzer};
use ironlog_core::errors::AppResult;
use ironlog_core::models::WorkoutEntry;

use crate::helpers::display;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print reconstructed sessions
pub fn sessions(
    analyzer: &DashboardAnalyzer,
    entries: &[WorkoutEntry],
    format: OutputFormat,
) -> AppResult<()> {
    let sessions = analyzer.sessions(entries);
    match format {
        OutputFormat::Json => display::print_json(&sessions),
        OutputFormat::Table => {
            display::display_sessions(&sessions, &analyzer.config().utc_offset());
            Ok(())
        }
    }
}

/// Print day groups ordered by date
pub fn days(
    analyzer: &DashboardAnalyzer,
    entries: &[WorkoutEntry],
    format: OutputFormat,
) -> AppResult<()> {
    let days: Vec<_> = analyzer
        .days(&analyzer.sessions(entries))
        .into_values()
        .collect();
    match format {
        OutputFormat::Json => display::print_json(&days),
        OutputFormat::Table => {
            display::display_days(&days);
            Ok(())
        }
    }
}

/// Print weekly progress
pub fn weekly(
    analyzer: &DashboardAnalyzer,
    entries: &[WorkoutEntry],
    format: OutputFormat,
) -> AppResult<()> {
    let weeks = analyzer.weekly_progress(&analyzer.sessions(entries));
    match format {
        OutputFormat::Json => display::print_json(&weeks),
        OutputFormat::Table => {
            display::display_weekly(&weeks);
            Ok(())
        }
    }
}

/// Print the muscle group distribution
pub fn muscles(
    analyzer: &DashboardAnalyzer,
    entries: &[WorkoutEntry],
    format: OutputFormat,
) -> AppResult<()> {
    let distribution = muscle_distribution(&analyzer.sessions(entries));
    match format {
        OutputFormat::Json => display::print_json(&distribution),
        OutputFormat::Table => {
            display::display_muscles(&distribution);
            Ok(())
        }
    }
}

/// Print the volume ranking
pub fn top_exercises(
    analyzer: &DashboardAnalyzer,
    entries: &[WorkoutEntry],
    format: OutputFormat,
) -> AppResult<()> {
    let ranking = analyzer.top_exercises(&analyzer.sessions(entries));
    match format {
        OutputFormat::Json => display::print_json(&ranking),
        OutputFormat::Table => {
            display::display_top_exercises(&ranking);
            Ok(())
        }
    }
}

/// Print the full dashboard report
pub fn report(
    analyzer: &DashboardAnalyzer,
    entries: &[WorkoutEntry],
    format: OutputFormat,
) -> AppResult<()> {
    let report = analyzer.analyze(entries);
    match format {
        OutputFormat::Json => display::print_json(&report),
        OutputFormat::Table => {
            display::display_summary(&report.summary);
            display::display_sessions(&report.sessions, &analyzer.config().utc_offset());
            display::display_weekly(&report.weekly_progress);
            display::display_muscles(&report.muscle_distribution);
            display::display_top_exercises(&report.top_exercises);
            Ok(())
        }
    }
}
