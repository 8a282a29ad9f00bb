// ABOUTME: Dashboard reports over finished sessions: muscle distribution, volume ranking, summary
// ABOUTME: Ordering ties break by name so output is stable across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::session_finisher::WorkoutSession;
use chrono::FixedOffset;
use ironlog_core::models::SetRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Share of sessions that trained one muscle group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroupDistributionEntry {
    /// Muscle group name
    pub muscle: String,
    /// Number of sessions that trained it
    pub count: usize,
    /// `round(100 × count / total memberships)`
    pub percentage: u32,
}

/// Volume lifted for one exercise across all sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExerciseVolumeEntry {
    /// Exercise name
    pub name: String,
    /// Σ weight × reps over every occurrence
    pub volume: f64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of sessions
    pub total_sessions: usize,
    /// Σ session volume
    pub total_volume: f64,
    /// Σ session sets
    pub total_sets: usize,
    /// Σ session reps
    pub total_reps: u64,
    /// Distinct local dates with at least one session
    pub training_days: usize,
    /// Rounded mean session duration
    pub avg_session_minutes: u64,
    /// Rounded mean session volume
    pub avg_volume_per_session: u64,
    /// Heaviest single set across all sessions
    pub heaviest_weight: f64,
    /// Muscle group trained in the most sessions
    pub most_trained_muscle: Option<String>,
}

/// Count, per muscle group, the sessions that trained it
///
/// Each session counts a muscle at most once. Sorted by count descending.
#[must_use]
pub fn muscle_distribution(sessions: &[WorkoutSession]) -> Vec<MuscleGroupDistributionEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0_usize;
    for session in sessions {
        for muscle in &session.muscle_groups {
            *counts.entry(muscle).or_insert(0) += 1;
            total += 1;
        }
    }

    let mut entries: Vec<MuscleGroupDistributionEntry> = counts
        .into_iter()
        .map(|(muscle, count)| MuscleGroupDistributionEntry {
            muscle: muscle.to_owned(),
            count,
            percentage: percentage(count, total),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.muscle.cmp(&b.muscle)));
    entries
}

/// Rank exercise names by total volume and keep the top `limit`
///
/// Entries without a name are not ranked.
#[must_use]
pub fn top_exercises_by_volume(
    sessions: &[WorkoutSession],
    limit: usize,
) -> Vec<TopExerciseVolumeEntry> {
    let mut volumes: HashMap<&str, f64> = HashMap::new();
    let named_entries = sessions
        .iter()
        .flat_map(|session| session.exercises.iter())
        .filter_map(|entry| entry.exercise_name().map(|name| (name, entry)));
    for (name, entry) in named_entries {
        let volume: f64 = entry.sets.iter().map(SetRecord::volume).sum();
        *volumes.entry(name).or_insert(0.0) += volume;
    }

    let mut ranking: Vec<TopExerciseVolumeEntry> = volumes
        .into_iter()
        .map(|(name, volume)| TopExerciseVolumeEntry {
            name: name.to_owned(),
            volume,
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.volume
            .partial_cmp(&a.volume)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranking.truncate(limit);
    ranking
}

/// Headline numbers across all sessions
#[must_use]
pub fn summary(sessions: &[WorkoutSession], offset: &FixedOffset) -> DashboardSummary {
    if sessions.is_empty() {
        return DashboardSummary::default();
    }

    let count = sessions.len();
    let total_volume: f64 = sessions.iter().map(|s| s.total_volume).sum();
    let total_minutes: u64 = sessions.iter().map(|s| s.duration_minutes).sum();
    let training_days: BTreeSet<_> = sessions.iter().map(|s| s.local_date(offset)).collect();

    DashboardSummary {
        total_sessions: count,
        total_volume,
        total_sets: sessions.iter().map(|s| s.total_sets).sum(),
        total_reps: sessions.iter().map(|s| s.total_reps).sum(),
        training_days: training_days.len(),
        avg_session_minutes: (total_minutes as f64 / count as f64).round() as u64,
        avg_volume_per_session: (total_volume / count as f64).round() as u64,
        heaviest_weight: sessions.iter().map(|s| s.max_weight).fold(0.0, f64::max),
        most_trained_muscle: muscle_distribution(sessions)
            .into_iter()
            .next()
            .map(|entry| entry.muscle),
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round() as u32
}
