// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builders for timestamped workout entries with muscles and sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`

use chrono::{DateTime, TimeZone, Utc};
use ironlog_core::models::{ExerciseRef, SetRecord, WorkoutEntry};

/// Instant on a given day of March 2025 (UTC); 2025-03-03 is a Monday
pub fn march(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
}

/// Entry for a named exercise with a primary muscle and the given `(weight, reps)` sets
pub fn lift(
    timestamp: DateTime<Utc>,
    name: &str,
    muscle: &str,
    sets: &[(f64, u32)],
) -> WorkoutEntry {
    WorkoutEntry::new(
        timestamp,
        Some(ExerciseRef::named(name).with_primary_muscle(muscle)),
        sets.iter()
            .map(|&(weight, reps)| SetRecord::new(weight, reps))
            .collect(),
    )
}

/// Entry with no exercise reference and no sets
pub fn bare(timestamp: DateTime<Utc>) -> WorkoutEntry {
    WorkoutEntry::new(timestamp, None, Vec::new())
}

/// A realistic two-week log: push, pull and leg days plus an orphaned entry
pub fn training_log() -> Vec<WorkoutEntry> {
    vec![
        lift(march(3, 7, 0), "Bench Press", "chest", &[(100.0, 5), (100.0, 5)]),
        lift(march(3, 7, 15), "Overhead Press", "shoulders", &[(60.0, 8)]),
        lift(march(3, 7, 30), "Dips", "triceps", &[(0.0, 12), (10.0, 10)]),
        lift(march(3, 7, 45), "Fly", "chest", &[(20.0, 12)]),
        lift(march(4, 18, 0), "Row", "back", &[(80.0, 8), (85.0, 6)]),
        lift(march(4, 18, 20), "Curl", "biceps", &[(20.0, 10)]),
        lift(march(6, 12, 30), "Squat", "quadriceps", &[(140.0, 5), (150.0, 3)]),
        lift(march(6, 12, 50), "Romanian Deadlift", "hamstrings", &[(110.0, 8)]),
        bare(march(6, 13, 10)),
        lift(march(10, 7, 0), "Bench Press", "chest", &[(102.5, 5)]),
        lift(march(12, 18, 0), "Row", "back", &[(85.0, 8)]),
    ]
}
