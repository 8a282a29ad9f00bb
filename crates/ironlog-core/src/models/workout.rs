// ABOUTME: Workout entry models: logged exercise events with their sets
// ABOUTME: Missing weights, reps, sets and exercise references read as zero/empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One performed set of an exercise
///
/// Upstream records are loosely validated, so both fields are optional.
/// Arithmetic always goes through [`SetRecord::weight`] and
/// [`SetRecord::reps`], which read a missing value as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    /// Load lifted for this set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    /// Repetitions performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reps: Option<u32>,
}

impl SetRecord {
    /// Create a fully specified set
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight: Some(weight),
            reps: Some(reps),
        }
    }

    /// Create a set from possibly-missing upstream values
    #[must_use]
    pub const fn from_parts(weight: Option<f64>, reps: Option<u32>) -> Self {
        Self { weight, reps }
    }

    /// Weight of the set, zero when missing
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Reps of the set, zero when missing
    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps.unwrap_or(0)
    }

    /// Training volume of the set (`weight × reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight() * f64::from(self.reps())
    }
}

/// Reference to the exercise an entry was logged against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRef {
    /// Display name of the exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Main muscle group worked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_muscle_group: Option<String>,
    /// All muscle groups worked (may repeat the primary one)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscle_groups: Vec<String>,
}

impl ExerciseRef {
    /// Create a reference with a name and no muscle information
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the primary muscle group
    #[must_use]
    pub fn with_primary_muscle(mut self, muscle: impl Into<String>) -> Self {
        self.primary_muscle_group = Some(muscle.into());
        self
    }

    /// Append worked muscle groups
    #[must_use]
    pub fn with_muscles<I, S>(mut self, muscles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.muscle_groups.extend(muscles.into_iter().map(Into::into));
        self
    }

    /// Muscle groups in contribution order: primary first, then the list
    ///
    /// Empty strings are skipped; duplicates are left for the caller to fold.
    pub fn muscles(&self) -> impl Iterator<Item = &str> {
        self.primary_muscle_group
            .iter()
            .chain(self.muscle_groups.iter())
            .map(String::as_str)
            .filter(|muscle| !muscle.is_empty())
    }
}

/// One logged exercise performance event
///
/// Entries are supplied by the persistence layer and never mutated by the
/// analytics pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    /// Instant the exercise was logged
    pub timestamp: DateTime<Utc>,
    /// Exercise performed, absent for orphaned records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_ref: Option<ExerciseRef>,
    /// Sets in the order they were performed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sets: Vec<SetRecord>,
}

impl WorkoutEntry {
    /// Create an entry for an exercise with the given sets
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        exercise_ref: Option<ExerciseRef>,
        sets: Vec<SetRecord>,
    ) -> Self {
        Self {
            timestamp,
            exercise_ref,
            sets,
        }
    }

    /// Exercise name, if the entry has a non-empty one
    #[must_use]
    pub fn exercise_name(&self) -> Option<&str> {
        self.exercise_ref
            .as_ref()
            .and_then(|exercise| exercise.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Muscle groups this entry contributes (see [`ExerciseRef::muscles`])
    pub fn muscles(&self) -> impl Iterator<Item = &str> {
        self.exercise_ref.iter().flat_map(ExerciseRef::muscles)
    }

    /// Total reps across all sets
    #[must_use]
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|set| u64::from(set.reps())).sum()
    }

    /// Total volume across all sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetRecord::volume).sum()
    }

    /// Heaviest single set, zero when there are no sets
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.sets
            .iter()
            .map(SetRecord::weight)
            .fold(0.0, f64::max)
    }
}

/// Deserialize `null` the same as a missing list
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SetRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<SetRecord>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
