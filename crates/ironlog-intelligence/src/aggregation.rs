// ABOUTME: Calendar roll-ups of finished sessions: per local day and per Monday-based week
// ABOUTME: Sums session aggregates and unions exercise and muscle name sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::name_set::NameSet;
use crate::session_finisher::WorkoutSession;
use chrono::{Datelike, Days, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Running sums shared by day and week roll-ups
#[derive(Debug, Clone, Default)]
struct RollUp {
    sessions: usize,
    total_volume: f64,
    total_sets: usize,
    total_reps: u64,
    total_exercises: usize,
    max_weight: f64,
    exercise_names: NameSet,
    muscle_groups: NameSet,
}

impl RollUp {
    fn add(&mut self, session: &WorkoutSession) {
        self.sessions += 1;
        self.total_volume += session.total_volume;
        self.total_sets += session.total_sets;
        self.total_reps += session.total_reps;
        self.total_exercises += session.exercises.len();
        self.max_weight = self.max_weight.max(session.max_weight);
        self.exercise_names.union_with(&session.exercise_names);
        self.muscle_groups.union_with(&session.muscle_groups);
    }

    fn avg_weight(&self) -> u64 {
        if self.total_reps == 0 {
            0
        } else {
            (self.total_volume / self.total_reps as f64).round() as u64
        }
    }
}

/// All sessions that started on one local calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroup {
    /// Local calendar date
    pub date: NaiveDate,
    /// Sessions of the day in chronological order
    pub sessions: Vec<WorkoutSession>,
    /// Σ session volume
    pub total_volume: f64,
    /// Σ session sets
    pub total_sets: usize,
    /// Σ session reps
    pub total_reps: u64,
    /// Σ exercise entries (not deduplicated)
    pub total_exercises: usize,
    /// Heaviest set of the day
    pub max_weight: f64,
    /// Number of distinct exercise names
    pub unique_exercises: usize,
    /// Distinct exercise names
    pub exercise_names: NameSet,
    /// Distinct muscle groups
    pub muscle_groups: NameSet,
    /// `round(total_volume / total_reps)`, zero without reps
    pub avg_weight: u64,
}

impl DayGroup {
    fn from_parts(date: NaiveDate, sessions: Vec<WorkoutSession>, rollup: RollUp) -> Self {
        let avg_weight = rollup.avg_weight();
        Self {
            date,
            sessions,
            total_volume: rollup.total_volume,
            total_sets: rollup.total_sets,
            total_reps: rollup.total_reps,
            total_exercises: rollup.total_exercises,
            max_weight: rollup.max_weight,
            unique_exercises: rollup.exercise_names.len(),
            exercise_names: rollup.exercise_names,
            muscle_groups: rollup.muscle_groups,
            avg_weight,
        }
    }
}

/// Training totals for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgressPoint {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Sessions started during the week
    pub sessions: usize,
    /// Σ session volume
    pub total_volume: f64,
    /// Σ session sets
    pub total_sets: usize,
    /// Σ session reps
    pub total_reps: u64,
    /// Σ exercise entries
    pub total_exercises: usize,
    /// Heaviest set of the week
    pub max_weight: f64,
    /// Number of distinct exercise names
    pub unique_exercises: usize,
    /// Distinct muscle groups
    pub muscle_groups: NameSet,
    /// `round(total_volume / total_reps)`, zero without reps
    pub avg_weight: u64,
}

impl WeeklyProgressPoint {
    fn from_parts(week_start: NaiveDate, rollup: RollUp) -> Self {
        let avg_weight = rollup.avg_weight();
        Self {
            week_start,
            sessions: rollup.sessions,
            total_volume: rollup.total_volume,
            total_sets: rollup.total_sets,
            total_reps: rollup.total_reps,
            total_exercises: rollup.total_exercises,
            max_weight: rollup.max_weight,
            unique_exercises: rollup.exercise_names.len(),
            muscle_groups: rollup.muscle_groups,
            avg_weight,
        }
    }
}

/// Monday of the ISO week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Group sessions by the local date of their start time
///
/// Sessions within a day keep their input order.
#[must_use]
pub fn by_day(sessions: &[WorkoutSession], offset: &FixedOffset) -> BTreeMap<NaiveDate, DayGroup> {
    let mut grouped: BTreeMap<NaiveDate, (Vec<WorkoutSession>, RollUp)> = BTreeMap::new();
    for session in sessions {
        let (members, rollup) = grouped.entry(session.local_date(offset)).or_default();
        rollup.add(session);
        members.push(session.clone());
    }

    debug!(
        sessions = sessions.len(),
        days = grouped.len(),
        "Grouped sessions by day"
    );
    grouped
        .into_iter()
        .map(|(date, (members, rollup))| (date, DayGroup::from_parts(date, members, rollup)))
        .collect()
}

/// Bucket sessions by Monday-based week and keep the `limit` most recent weeks
///
/// Weeks without sessions produce no bucket. The result is ascending by
/// `week_start`.
#[must_use]
pub fn weekly_progress(
    sessions: &[WorkoutSession],
    offset: &FixedOffset,
    limit: usize,
) -> Vec<WeeklyProgressPoint> {
    let mut weeks: BTreeMap<NaiveDate, RollUp> = BTreeMap::new();
    for session in sessions {
        weeks
            .entry(week_start(session.local_date(offset)))
            .or_default()
            .add(session);
    }

    let skip = weeks.len().saturating_sub(limit);
    weeks
        .into_iter()
        .skip(skip)
        .map(|(start, rollup)| WeeklyProgressPoint::from_parts(start, rollup))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_clustering::SessionClusterer;
    use chrono::{DateTime, Offset, TimeZone, Utc};
    use ironlog_core::models::{ExerciseRef, SetRecord, WorkoutEntry};

    fn utc() -> FixedOffset {
        Utc.fix()
    }

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    fn entry(timestamp: DateTime<Utc>, name: &str, weight: f64, reps: u32) -> WorkoutEntry {
        WorkoutEntry::new(
            timestamp,
            Some(ExerciseRef::named(name).with_primary_muscle("chest")),
            vec![SetRecord::new(weight, reps)],
        )
    }

    #[test]
    fn test_week_start_is_monday() {
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(week_start(sunday), monday);
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn test_day_totals_sum_sessions() {
        let entries = vec![
            entry(ts(3, 8), "Bench Press", 100.0, 5),
            entry(ts(3, 18), "Bench Press", 90.0, 5),
            entry(ts(4, 8), "Fly", 20.0, 12),
        ];
        let sessions = SessionClusterer::default().cluster(&entries);
        let days = by_day(&sessions, &utc());

        assert_eq!(days.len(), 2);
        let monday = &days[&NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()];
        assert_eq!(monday.sessions.len(), 2);
        assert!((monday.total_volume - 950.0).abs() < f64::EPSILON);
        assert_eq!(monday.total_exercises, 2);
        assert_eq!(monday.unique_exercises, 1);
        assert_eq!(monday.avg_weight, 95);
        assert!((monday.max_weight - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offset_moves_session_to_next_day() {
        // 23:00 UTC is already the next day at UTC+2
        let entries = vec![entry(ts(3, 23), "Row", 50.0, 10)];
        let sessions = SessionClusterer::default().cluster(&entries);
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let days = by_day(&sessions, &east);
        assert!(days.contains_key(&NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()));
    }

    #[test]
    fn test_weekly_progress_keeps_most_recent_weeks() {
        let entries: Vec<WorkoutEntry> = (0..10)
            .map(|week| {
                let day = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap()
                    + chrono::Duration::weeks(week);
                entry(day, "Squat", 100.0, 5)
            })
            .collect();
        let sessions = SessionClusterer::default().cluster(&entries);
        let weeks = weekly_progress(&sessions, &utc(), 8);

        assert_eq!(weeks.len(), 8);
        assert_eq!(weeks[0].week_start, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert_eq!(weeks[7].week_start, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert!(weeks.windows(2).all(|pair| pair[0].week_start < pair[1].week_start));
    }

    #[test]
    fn test_weekly_progress_skips_empty_weeks() {
        let entries = vec![entry(ts(3, 9), "Squat", 100.0, 5), entry(ts(24, 9), "Squat", 100.0, 5)];
        let sessions = SessionClusterer::default().cluster(&entries);
        let weeks = weekly_progress(&sessions, &utc(), 8);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].sessions, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_roll_ups() {
        assert!(by_day(&[], &utc()).is_empty());
        assert!(weekly_progress(&[], &utc(), 8).is_empty());
    }
}
