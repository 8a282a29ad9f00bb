// ABOUTME: Session clustering: groups timestamped workout entries into sessions by time gap
// ABOUTME: Single chronological scan producing accumulators that are finalized afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::name_set::NameSet;
use crate::session_finisher::{SessionFinisher, WorkoutSession};
use chrono::{DateTime, Utc};
use ironlog_core::constants::sessions::{DEFAULT_WINDOW_MINUTES, MILLIS_PER_MINUTE};
use ironlog_core::errors::{AppError, AppResult};
use ironlog_core::models::WorkoutEntry;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maximum allowed gap between consecutive entries of one session
///
/// Always finite and non-negative. A gap exactly equal to the window keeps
/// entries together; only a strictly larger gap starts a new session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SessionWindow {
    minutes: f64,
}

impl SessionWindow {
    /// Build a window from minutes
    ///
    /// Negative values clamp to a zero-width window, which splits every
    /// entry into its own session except entries sharing a timestamp.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `minutes` is NaN or infinite
    pub fn from_minutes(minutes: f64) -> AppResult<Self> {
        if !minutes.is_finite() {
            return Err(AppError::invalid_input(format!(
                "session window must be a finite number of minutes, got {minutes}"
            )));
        }
        if minutes < 0.0 {
            warn!(window.minutes = minutes, "Negative session window clamped to zero");
            return Ok(Self { minutes: 0.0 });
        }
        Ok(Self { minutes })
    }

    /// Parse a window from text such as `"45"` or `"90.5"`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the text is not a finite number
    pub fn parse(text: &str) -> AppResult<Self> {
        let minutes: f64 = text.trim().parse().map_err(|_| {
            AppError::invalid_input(format!("session window is not a number: {text:?}"))
        })?;
        Self::from_minutes(minutes)
    }

    /// Window length in minutes
    #[must_use]
    pub const fn minutes(self) -> f64 {
        self.minutes
    }

    /// Window length in milliseconds
    #[must_use]
    pub fn millis(self) -> f64 {
        self.minutes * MILLIS_PER_MINUTE
    }

    /// Whether a gap of `gap_ms` milliseconds separates two sessions
    #[must_use]
    pub fn splits(self, gap_ms: i64) -> bool {
        gap_ms.unsigned_abs() as f64 > self.millis()
    }
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

impl TryFrom<f64> for SessionWindow {
    type Error = AppError;

    fn try_from(minutes: f64) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<SessionWindow> for f64 {
    fn from(window: SessionWindow) -> Self {
        window.minutes
    }
}

/// Raw state of one session while entries are being assigned to it
///
/// Running totals are updated as each entry is appended. The accumulator
/// only grows during the scan and is handed to [`SessionFinisher`] once the
/// scan has moved past it.
#[derive(Debug, Clone)]
pub struct SessionAccumulator {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    exercises: Vec<WorkoutEntry>,
    total_sets: usize,
    total_reps: u64,
    total_volume: f64,
    max_weight: f64,
    muscle_groups: NameSet,
    exercise_names: NameSet,
}

impl SessionAccumulator {
    /// Start a session seeded with its first entry
    #[must_use]
    pub fn seed(entry: &WorkoutEntry) -> Self {
        let mut accumulator = Self {
            start_time: entry.timestamp,
            end_time: entry.timestamp,
            exercises: Vec::new(),
            total_sets: 0,
            total_reps: 0,
            total_volume: 0.0,
            max_weight: 0.0,
            muscle_groups: NameSet::new(),
            exercise_names: NameSet::new(),
        };
        accumulator.push(entry);
        accumulator
    }

    /// Append an entry and advance the running end time
    pub fn push(&mut self, entry: &WorkoutEntry) {
        self.end_time = entry.timestamp;
        self.total_sets += entry.sets.len();
        self.total_reps += entry.total_reps();
        self.total_volume += entry.total_volume();
        self.max_weight = self.max_weight.max(entry.max_weight());
        self.muscle_groups.extend(entry.muscles());
        if let Some(name) = entry.exercise_name() {
            self.exercise_names.insert(name);
        }
        self.exercises.push(entry.clone());
    }

    /// Timestamp of the first entry
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Timestamp of the most recent entry
    #[must_use]
    pub const fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    /// Entries assigned so far, in chronological order
    #[must_use]
    pub fn exercises(&self) -> &[WorkoutEntry] {
        &self.exercises
    }

    /// Running set count
    #[must_use]
    pub const fn total_sets(&self) -> usize {
        self.total_sets
    }

    /// Running rep count
    #[must_use]
    pub const fn total_reps(&self) -> u64 {
        self.total_reps
    }

    /// Running volume
    #[must_use]
    pub const fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Heaviest set seen so far; never decreases as entries are appended
    #[must_use]
    pub const fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Muscle groups seen so far
    #[must_use]
    pub const fn muscle_groups(&self) -> &NameSet {
        &self.muscle_groups
    }

    /// Exercise names seen so far
    #[must_use]
    pub const fn exercise_names(&self) -> &NameSet {
        &self.exercise_names
    }

    /// Consume the accumulator, handing over its entries and name sets
    #[must_use]
    pub fn into_parts(self) -> (Vec<WorkoutEntry>, NameSet, NameSet) {
        (self.exercises, self.muscle_groups, self.exercise_names)
    }
}

/// Groups flat entry lists into sessions
#[derive(Debug, Clone, Default)]
pub struct SessionClusterer {
    window: SessionWindow,
    finisher: SessionFinisher,
}

impl SessionClusterer {
    /// Create a clusterer with the default finisher
    #[must_use]
    pub fn new(window: SessionWindow) -> Self {
        Self {
            window,
            finisher: SessionFinisher::default(),
        }
    }

    /// Create a clusterer with a specific finisher
    #[must_use]
    pub const fn with_finisher(window: SessionWindow, finisher: SessionFinisher) -> Self {
        Self { window, finisher }
    }

    /// Window used to split sessions
    #[must_use]
    pub const fn window(&self) -> SessionWindow {
        self.window
    }

    /// Scan entries in chronological order and build session accumulators
    ///
    /// The input may be in any order; it is sorted by timestamp first (stable,
    /// so entries sharing a timestamp keep their relative input order).
    #[must_use]
    pub fn accumulate(&self, entries: &[WorkoutEntry]) -> Vec<SessionAccumulator> {
        let mut sorted: Vec<&WorkoutEntry> = entries.iter().collect();
        sorted.sort_by_key(|entry| entry.timestamp);

        let mut sessions = Vec::new();
        let mut current: Option<SessionAccumulator> = None;

        for entry in sorted {
            let joins_current = current.as_ref().is_some_and(|session| {
                let gap_ms = (entry.timestamp - session.end_time()).num_milliseconds();
                !self.window.splits(gap_ms)
            });

            if joins_current {
                if let Some(session) = current.as_mut() {
                    session.push(entry);
                }
            } else if let Some(done) = current.replace(SessionAccumulator::seed(entry)) {
                sessions.push(done);
            }
        }
        sessions.extend(current);

        debug!(
            entries = entries.len(),
            sessions = sessions.len(),
            window_ms = self.window.millis(),
            "Clustered workout entries into sessions"
        );
        sessions
    }

    /// Cluster entries into finished sessions, in chronological order
    #[must_use]
    pub fn cluster(&self, entries: &[WorkoutEntry]) -> Vec<WorkoutSession> {
        self.accumulate(entries)
            .into_iter()
            .enumerate()
            .map(|(index, accumulator)| self.finisher.finalize(accumulator, index))
            .collect()
    }
}

/// Cluster entries with a window given in minutes, using default settings
///
/// # Errors
///
/// Returns `InvalidInput` if `window_minutes` is NaN or infinite
pub fn cluster(entries: &[WorkoutEntry], window_minutes: f64) -> AppResult<Vec<WorkoutSession>> {
    let window = SessionWindow::from_minutes(window_minutes)?;
    Ok(SessionClusterer::new(window).cluster(entries))
}
