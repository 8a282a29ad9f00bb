// ABOUTME: Benchmark fixtures generating realistic workout entry logs
// ABOUTME: Deterministic generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Benchmark fixtures generating workout entry logs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog_core::models::{ExerciseRef, SetRecord, WorkoutEntry};

/// Predefined log sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum EntryBatchSize {
    /// About two weeks of training
    Small,
    /// About half a year of training
    Medium,
    /// Several years of training
    Large,
}

impl EntryBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 1_000,
            Self::Large => 10_000,
        }
    }
}

const EXERCISES: [(&str, &str, &[&str]); 8] = [
    ("Bench Press", "chest", &["triceps", "shoulders"]),
    ("Overhead Press", "shoulders", &["triceps"]),
    ("Row", "back", &["biceps"]),
    ("Pulldown", "back", &["biceps"]),
    ("Squat", "quadriceps", &["glutes"]),
    ("Romanian Deadlift", "hamstrings", &["glutes", "back"]),
    ("Curl", "biceps", &[]),
    ("Plank", "core", &[]),
];

/// Entries per session before the generator moves to the next day
const ENTRIES_PER_SESSION: usize = 5;

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Generate a chronological training log of the given size
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_entries(size: EntryBatchSize) -> Vec<WorkoutEntry> {
    let base = base_date();
    (0..size.count())
        .map(|index| {
            let session = index / ENTRIES_PER_SESSION;
            let slot = index % ENTRIES_PER_SESSION;
            let timestamp = base
                + Duration::days(session as i64)
                + Duration::hours(((session * 5) % 12) as i64)
                + Duration::minutes((slot * 12) as i64);

            let (name, primary, others) = EXERCISES[(index * 3 + slot) % EXERCISES.len()];
            let exercise = ExerciseRef::named(name)
                .with_primary_muscle(primary)
                .with_muscles(others.iter().copied());
            let sets = (0..3 + index % 3)
                .map(|set| {
                    let weight = 20.0 + ((index * 7 + set * 5) % 120) as f64;
                    SetRecord::new(weight, 5 + ((index + set) % 8) as u32)
                })
                .collect();

            WorkoutEntry::new(timestamp, Some(exercise), sets)
        })
        .collect()
}

/// The same log in reverse order, to exercise the clusterer's sort
#[must_use]
pub fn generate_shuffled_entries(size: EntryBatchSize) -> Vec<WorkoutEntry> {
    let mut entries = generate_entries(size);
    entries.reverse();
    entries
}
