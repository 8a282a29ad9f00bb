// ABOUTME: Workout session analytics engine for the Ironlog workspace
// ABOUTME: Clustering, session finishing and naming, calendar roll-ups, and dashboard reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Turns a flat list of logged exercise entries into workout sessions and
//! the roll-ups a training dashboard renders. Every stage is a pure,
//! synchronous function over immutable input.
//!
//! ## Pipeline
//!
//! 1. **Clustering** (`session_clustering`): sort entries, split on gaps
//!    larger than the session window
//! 2. **Finishing** (`session_finisher`): compute totals, rounded averages,
//!    the record count, a deterministic id, and a generated name
//! 3. **Roll-ups** (`aggregation`): per local day and per Monday-based week
//! 4. **Reports** (`reports`): muscle distribution, volume ranking, summary
//!
//! ```rust
//! use ironlog_intelligence::{cluster, muscle_distribution};
//!
//! let sessions = cluster(&[], 60.0).unwrap_or_default();
//! assert!(sessions.is_empty());
//! assert!(muscle_distribution(&sessions).is_empty());
//! ```

/// Dashboard facade running the whole pipeline
pub mod analyzer;

/// Day and week roll-ups
pub mod aggregation;

/// Engine configuration with environment overrides
pub mod config;

/// Insertion-ordered string set
pub mod name_set;

/// Distribution, ranking, and summary reports
pub mod reports;

/// Time-gap clustering of entries into sessions
pub mod session_clustering;

/// Final session aggregates
pub mod session_finisher;

/// Session label generation
pub mod session_naming;

pub use aggregation::{by_day, weekly_progress, week_start, DayGroup, WeeklyProgressPoint};
pub use analyzer::{DashboardAnalyzer, DashboardReport};
pub use config::{AnalyticsConfig, ConfigError};
pub use name_set::NameSet;
pub use reports::{
    muscle_distribution, summary, top_exercises_by_volume, DashboardSummary,
    MuscleGroupDistributionEntry, TopExerciseVolumeEntry,
};
pub use session_clustering::{cluster, SessionAccumulator, SessionClusterer, SessionWindow};
pub use session_finisher::{SessionFinisher, WorkoutSession};
pub use session_naming::{DayPart, Intensity, SessionNamer, WorkoutType};
