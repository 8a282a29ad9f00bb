// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
// ABOUTME: Output formatting helpers for ironlog-cli
// ABOUTME: Renders sessions and reports as aligned text tables or pretty JSON

use chrono::{DateTime, FixedOffset, Utc};
use ironlog::intelligence::{
    DashboardSummary, DayGroup, MuscleGroupDistributionEntry, TopExerciseVolumeEntry,
    WeeklyProgressPoint, WorkoutSession,
};
use ironlog_core::errors::AppResult;
use serde::Serialize;

/// Write any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn heading(title: &str, width: usize) {
    println!("\n{title}");
    println!("{}", "=".repeat(width));
}

/// Display sessions, one per line, with start times in the local offset
pub fn display_sessions(sessions: &[WorkoutSession], offset: &FixedOffset) {
    heading("SESSIONS", 96);
    if sessions.is_empty() {
        println!("   No sessions");
        return;
    }
    println!(
        "{:<17} {:>5} {:<38} {:>5} {:>6} {:>10} {:>7} {:>4}",
        start_label(offset),
        "Min",
        "Name",
        "Sets",
        "Reps",
        "Volume",
        "Max",
        "PRs"
    );
    for session in sessions {
        println!(
            "{:<17} {:>5} {:<38} {:>5} {:>6} {:>10.1} {:>7.1} {:>4}",
            local_start(&session.start_time, offset),
            session.duration_minutes,
            session.name,
            session.total_sets,
            session.total_reps,
            session.total_volume,
            session.max_weight,
            session.personal_records
        );
    }
}

/// Display day groups ordered by date
pub fn display_days(days: &[DayGroup]) {
    heading("DAYS", 80);
    if days.is_empty() {
        println!("   No training days");
        return;
    }
    println!(
        "{:<10} {:>8} {:>9} {:>6} {:>10} {:>7} {:>7}  Muscles",
        "Date", "Sessions", "Exercises", "Sets", "Volume", "Max", "AvgW"
    );
    for day in days {
        println!(
            "{:<10} {:>8} {:>9} {:>6} {:>10.1} {:>7.1} {:>7}  {}",
            day.date,
            day.sessions.len(),
            day.unique_exercises,
            day.total_sets,
            day.total_volume,
            day.max_weight,
            day.avg_weight,
            join(day.muscle_groups.iter())
        );
    }
}

/// Display weekly progress buckets
pub fn display_weekly(weeks: &[WeeklyProgressPoint]) {
    heading("WEEKLY PROGRESS", 72);
    if weeks.is_empty() {
        println!("   No weeks");
        return;
    }
    println!(
        "{:<10} {:>8} {:>6} {:>6} {:>10} {:>7} {:>7}",
        "Week of", "Sessions", "Sets", "Reps", "Volume", "Max", "AvgW"
    );
    for week in weeks {
        println!(
            "{:<10} {:>8} {:>6} {:>6} {:>10.1} {:>7.1} {:>7}",
            week.week_start,
            week.sessions,
            week.total_sets,
            week.total_reps,
            week.total_volume,
            week.max_weight,
            week.avg_weight
        );
    }
}

/// Display the muscle group distribution
pub fn display_muscles(distribution: &[MuscleGroupDistributionEntry]) {
    heading("MUSCLE GROUPS", 40);
    if distribution.is_empty() {
        println!("   No muscle groups recorded");
        return;
    }
    for entry in distribution {
        println!(
            "{:<20} {:>6} {:>5}%",
            entry.muscle, entry.count, entry.percentage
        );
    }
}

/// Display the volume ranking
pub fn display_top_exercises(ranking: &[TopExerciseVolumeEntry]) {
    heading("TOP EXERCISES BY VOLUME", 48);
    if ranking.is_empty() {
        println!("   No named exercises");
        return;
    }
    for (rank, entry) in ranking.iter().enumerate() {
        println!("{:>3}. {:<30} {:>12.1}", rank + 1, entry.name, entry.volume);
    }
}

/// Display the headline numbers
pub fn display_summary(summary: &DashboardSummary) {
    heading("SUMMARY", 48);
    println!("   Sessions: {}", summary.total_sessions);
    println!("   Training days: {}", summary.training_days);
    println!("   Sets / reps: {} / {}", summary.total_sets, summary.total_reps);
    println!("   Total volume: {:.1}", summary.total_volume);
    println!("   Avg session: {} min", summary.avg_session_minutes);
    println!("   Avg volume per session: {}", summary.avg_volume_per_session);
    println!("   Heaviest set: {:.1}", summary.heaviest_weight);
    println!(
        "   Most trained: {}",
        summary.most_trained_muscle.as_deref().unwrap_or("-")
    );
}

fn start_label(offset: &FixedOffset) -> String {
    format!("Start (UTC{offset})")
}

fn local_start(time: &DateTime<Utc>, offset: &FixedOffset) -> String {
    time.with_timezone(offset)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
