// ABOUTME: Session finisher: turns raw session accumulators into final aggregate records
// ABOUTME: Computes totals, rounded averages, the record heuristic, identifier, and name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::config::AnalyticsConfig;
use crate::name_set::NameSet;
use crate::session_clustering::SessionAccumulator;
use crate::session_naming::SessionNamer;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Timelike, Utc};
use ironlog_core::constants::sessions::{PERSONAL_RECORD_RATIO, SESSION_ID_PREFIX};
use ironlog_core::models::WorkoutEntry;
use serde::{Deserialize, Serialize};

/// A reconstructed workout session with its final aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Deterministic identifier: `session-{index}-{start millis}`
    pub id: String,
    /// Timestamp of the first entry
    pub start_time: DateTime<Utc>,
    /// Timestamp of the last entry
    pub end_time: DateTime<Utc>,
    /// Whole minutes between first and last entry
    pub duration_minutes: u64,
    /// Entries of the session in chronological order
    pub exercises: Vec<WorkoutEntry>,
    /// Number of sets across all entries
    pub total_sets: usize,
    /// Reps across all sets
    pub total_reps: u64,
    /// Σ weight × reps across all sets (not rounded)
    pub total_volume: f64,
    /// Heaviest single set, zero without sets
    pub max_weight: f64,
    /// `round(total_reps / total_sets)`, zero without sets
    pub avg_reps_per_set: u64,
    /// `round(total_volume / total_reps)`, zero without reps
    pub avg_weight: u64,
    /// Entries with a set at or above the record ratio of `max_weight`
    pub personal_records: usize,
    /// Distinct muscle groups, first-seen order
    pub muscle_groups: NameSet,
    /// Distinct exercise names, first-seen order
    pub exercise_names: NameSet,
    /// Generated label, e.g. "Morning Push Workout - Moderate"
    pub name: String,
}

impl WorkoutSession {
    /// Local calendar date of the session start
    #[must_use]
    pub fn local_date(&self, offset: &FixedOffset) -> NaiveDate {
        self.start_time.with_timezone(offset).date_naive()
    }

    /// Local hour of day (0-23) of the session start
    #[must_use]
    pub fn local_start_hour(&self, offset: &FixedOffset) -> u32 {
        self.start_time.with_timezone(offset).hour()
    }
}

/// Converts accumulators into finished sessions
#[derive(Debug, Clone)]
pub struct SessionFinisher {
    personal_record_ratio: f64,
    utc_offset: FixedOffset,
}

impl Default for SessionFinisher {
    fn default() -> Self {
        Self {
            personal_record_ratio: PERSONAL_RECORD_RATIO,
            utc_offset: Utc.fix(),
        }
    }
}

impl SessionFinisher {
    /// Create a finisher from explicit settings
    #[must_use]
    pub const fn new(personal_record_ratio: f64, utc_offset: FixedOffset) -> Self {
        Self {
            personal_record_ratio,
            utc_offset,
        }
    }

    /// Create a finisher from the analytics configuration
    #[must_use]
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.personal_record_ratio, config.utc_offset())
    }

    /// Produce the final session record for the `index`-th accumulator
    ///
    /// Totals come from the accumulator; the record threshold is taken
    /// against the final session maximum.
    #[must_use]
    pub fn finalize(&self, accumulator: SessionAccumulator, index: usize) -> WorkoutSession {
        let start_time = accumulator.start_time();
        let end_time = accumulator.end_time();
        let total_sets = accumulator.total_sets();
        let total_reps = accumulator.total_reps();
        let total_volume = accumulator.total_volume();
        let max_weight = accumulator.max_weight();
        let (exercises, muscle_groups, exercise_names) = accumulator.into_parts();

        let avg_reps_per_set = if total_sets > 0 {
            (total_reps as f64 / total_sets as f64).round() as u64
        } else {
            0
        };
        let avg_weight = if total_reps > 0 {
            (total_volume / total_reps as f64).round() as u64
        } else {
            0
        };

        let record_threshold = self.personal_record_ratio * max_weight;
        let personal_records = exercises
            .iter()
            .filter(|entry| {
                entry
                    .sets
                    .iter()
                    .any(|set| set.weight() >= record_threshold)
            })
            .count();

        let duration_minutes = (end_time - start_time).num_minutes().max(0) as u64;

        let mut session = WorkoutSession {
            id: format!(
                "{SESSION_ID_PREFIX}-{index}-{}",
                start_time.timestamp_millis()
            ),
            start_time,
            end_time,
            duration_minutes,
            exercises,
            total_sets,
            total_reps,
            total_volume,
            max_weight,
            avg_reps_per_set,
            avg_weight,
            personal_records,
            muscle_groups,
            exercise_names,
            name: String::new(),
        };
        session.name = SessionNamer::name_of(&session, &self.utc_offset);
        session
    }
}
