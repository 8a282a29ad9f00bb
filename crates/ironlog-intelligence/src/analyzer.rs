// ABOUTME: Dashboard analyzer facade running clustering and every report in one pass
// ABOUTME: Bundles results into a serializable dashboard report for the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::aggregation::{self, DayGroup, WeeklyProgressPoint};
use crate::config::AnalyticsConfig;
use crate::reports::{self, DashboardSummary, MuscleGroupDistributionEntry, TopExerciseVolumeEntry};
use crate::session_clustering::SessionClusterer;
use crate::session_finisher::{SessionFinisher, WorkoutSession};
use chrono::{FixedOffset, NaiveDate};
use ironlog_core::models::WorkoutEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Everything the dashboard renders, computed from one entry list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Sessions in chronological order
    pub sessions: Vec<WorkoutSession>,
    /// Day groups ordered by date
    pub days: Vec<DayGroup>,
    /// Most recent weekly buckets, ascending
    pub weekly_progress: Vec<WeeklyProgressPoint>,
    /// Muscle group distribution, most trained first
    pub muscle_distribution: Vec<MuscleGroupDistributionEntry>,
    /// Exercises ranked by volume
    pub top_exercises: Vec<TopExerciseVolumeEntry>,
    /// Headline numbers
    pub summary: DashboardSummary,
}

/// Runs the analytics pipeline with one configuration
#[derive(Debug, Clone)]
pub struct DashboardAnalyzer {
    config: AnalyticsConfig,
    clusterer: SessionClusterer,
}

impl Default for DashboardAnalyzer {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl DashboardAnalyzer {
    /// Create an analyzer for a validated configuration
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        let clusterer =
            SessionClusterer::with_finisher(config.session_window, SessionFinisher::from_config(&config));
        Self { config, clusterer }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    fn offset(&self) -> FixedOffset {
        self.config.utc_offset()
    }

    /// Reconstruct sessions from raw entries
    #[must_use]
    pub fn sessions(&self, entries: &[WorkoutEntry]) -> Vec<WorkoutSession> {
        self.clusterer.cluster(entries)
    }

    /// Group sessions by local start date
    #[must_use]
    pub fn days(&self, sessions: &[WorkoutSession]) -> BTreeMap<NaiveDate, DayGroup> {
        aggregation::by_day(sessions, &self.offset())
    }

    /// Most recent weekly buckets
    #[must_use]
    pub fn weekly_progress(&self, sessions: &[WorkoutSession]) -> Vec<WeeklyProgressPoint> {
        aggregation::weekly_progress(sessions, &self.offset(), self.config.weekly_bucket_limit)
    }

    /// Exercises ranked by volume
    #[must_use]
    pub fn top_exercises(&self, sessions: &[WorkoutSession]) -> Vec<TopExerciseVolumeEntry> {
        reports::top_exercises_by_volume(sessions, self.config.top_exercise_limit)
    }

    /// Headline numbers
    #[must_use]
    pub fn summary(&self, sessions: &[WorkoutSession]) -> DashboardSummary {
        reports::summary(sessions, &self.offset())
    }

    /// Run the whole pipeline
    #[must_use]
    pub fn analyze(&self, entries: &[WorkoutEntry]) -> DashboardReport {
        let sessions = self.sessions(entries);
        let report = DashboardReport {
            days: self.days(&sessions).into_values().collect(),
            weekly_progress: self.weekly_progress(&sessions),
            muscle_distribution: reports::muscle_distribution(&sessions),
            top_exercises: self.top_exercises(&sessions),
            summary: self.summary(&sessions),
            sessions,
        };

        info!(
            entries = entries.len(),
            sessions = report.sessions.len(),
            days = report.days.len(),
            weeks = report.weekly_progress.len(),
            "Dashboard report computed"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_clustering::SessionWindow;
    use chrono::{TimeZone, Utc};
    use ironlog_core::models::{ExerciseRef, SetRecord};

    #[test]
    fn test_analyze_empty_input() {
        let report = DashboardAnalyzer::default().analyze(&[]);
        assert!(report.sessions.is_empty());
        assert!(report.days.is_empty());
        assert!(report.weekly_progress.is_empty());
        assert!(report.muscle_distribution.is_empty());
        assert!(report.top_exercises.is_empty());
        assert_eq!(report.summary.total_sessions, 0);
    }

    #[test]
    fn test_configured_window_is_used() {
        let entries = vec![
            WorkoutEntry::new(
                Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap(),
                Some(ExerciseRef::named("Press")),
                vec![SetRecord::new(40.0, 10)],
            ),
            WorkoutEntry::new(
                Utc.with_ymd_and_hms(2025, 3, 3, 9, 45, 0).unwrap(),
                Some(ExerciseRef::named("Press")),
                vec![SetRecord::new(40.0, 10)],
            ),
        ];
        let narrow = AnalyticsConfig::default()
            .with_session_window(SessionWindow::from_minutes(30.0).unwrap());
        assert_eq!(DashboardAnalyzer::new(narrow).analyze(&entries).sessions.len(), 2);
        assert_eq!(DashboardAnalyzer::default().analyze(&entries).sessions.len(), 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let entries = vec![WorkoutEntry::new(
            Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap(),
            Some(ExerciseRef::named("Deadlift").with_primary_muscle("back")),
            vec![SetRecord::new(140.0, 3)],
        )];
        let report = DashboardAnalyzer::default().analyze(&entries);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("weeklyProgress").is_some());
        assert!(json.get("topExercises").is_some());
        assert_eq!(json["sessions"][0]["name"], "Morning Back Focus");
        assert_eq!(json["days"][0]["date"], "2025-03-03");
        assert_eq!(json["summary"]["mostTrainedMuscle"], "back");
    }
}
