// ABOUTME: Session name generation from muscle groups, exercise count, and start hour
// ABOUTME: Produces labels such as "Morning Push Workout - Moderate"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::name_set::NameSet;
use crate::session_finisher::WorkoutSession;
use chrono::FixedOffset;
use ironlog_core::constants::naming::{
    AFTERNOON_END_HOUR, HEAVY_EXERCISE_COUNT, LIGHT_EXERCISE_COUNT, MODERATE_EXERCISE_COUNT,
    MORNING_END_HOUR,
};
use serde::{Deserialize, Serialize};
use std::fmt;

const PUSH_MUSCLES: &[&str] = &["chest", "shoulders", "triceps"];
const PULL_MUSCLES: &[&str] = &["back", "biceps"];
const LEG_MUSCLES: &[&str] = &["legs", "quadriceps", "hamstrings", "glutes"];
const ARM_MUSCLES: &[&str] = &["biceps", "triceps"];
const CORE_MUSCLES: &[&str] = &["core", "abs"];

/// Part of the day a session started in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPart {
    /// Before noon
    Morning,
    /// Noon until 17:00
    Afternoon,
    /// 17:00 onwards
    Evening,
}

impl DayPart {
    /// Classify a local hour of day
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour < MORNING_END_HOUR {
            Self::Morning
        } else if hour < AFTERNOON_END_HOUR {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => write!(f, "Morning"),
            Self::Afternoon => write!(f, "Afternoon"),
            Self::Evening => write!(f, "Evening"),
        }
    }
}

/// Workout type inferred from the trained muscle groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Chest, shoulders and triceps together
    Push,
    /// Back and biceps together
    Pull,
    /// Any leg muscle
    Legs,
    /// Chest without back
    ChestFocus,
    /// Back without chest
    BackFocus,
    /// Shoulders in a small session
    ShoulderFocus,
    /// Biceps or triceps in a small session
    ArmFocus,
    /// Core or abs
    CoreTraining,
    /// Four or more muscle groups
    FullBody,
    /// Two or three muscle groups
    UpperBody,
    /// Exactly one other muscle group
    SingleMuscle(String),
    /// No muscle information
    Mixed,
}

impl WorkoutType {
    /// Classify a muscle group set; the first matching rule wins
    #[must_use]
    pub fn classify(muscles: &NameSet) -> Self {
        let size = muscles.len();
        if muscles.contains_all(PUSH_MUSCLES) {
            Self::Push
        } else if muscles.contains_all(PULL_MUSCLES) {
            Self::Pull
        } else if muscles.contains_any(LEG_MUSCLES) {
            Self::Legs
        } else if muscles.contains("chest") && !muscles.contains("back") {
            Self::ChestFocus
        } else if muscles.contains("back") && !muscles.contains("chest") {
            Self::BackFocus
        } else if muscles.contains("shoulders") && size <= 2 {
            Self::ShoulderFocus
        } else if muscles.contains_any(ARM_MUSCLES) && size <= 2 {
            Self::ArmFocus
        } else if muscles.contains_any(CORE_MUSCLES) {
            Self::CoreTraining
        } else if size >= 4 {
            Self::FullBody
        } else if size >= 2 {
            Self::UpperBody
        } else if let Some(muscle) = muscles.first() {
            Self::SingleMuscle(muscle.to_owned())
        } else {
            Self::Mixed
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => write!(f, "Push Workout"),
            Self::Pull => write!(f, "Pull Workout"),
            Self::Legs => write!(f, "Leg Workout"),
            Self::ChestFocus => write!(f, "Chest Focus"),
            Self::BackFocus => write!(f, "Back Focus"),
            Self::ShoulderFocus => write!(f, "Shoulder Focus"),
            Self::ArmFocus => write!(f, "Arm Focus"),
            Self::CoreTraining => write!(f, "Core Training"),
            Self::FullBody => write!(f, "Full Body"),
            Self::UpperBody => write!(f, "Upper Body"),
            Self::SingleMuscle(muscle) => write!(f, "{} Focus", capitalize(muscle)),
            Self::Mixed => write!(f, "Mixed Training"),
        }
    }
}

/// Session intensity by number of exercise entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    /// Six or more entries
    Heavy,
    /// Four or five entries
    Moderate,
    /// Two or three entries
    Light,
    /// A single entry
    Minimal,
}

impl Intensity {
    /// Classify an exercise count
    #[must_use]
    pub const fn from_exercise_count(count: usize) -> Self {
        if count >= HEAVY_EXERCISE_COUNT {
            Self::Heavy
        } else if count >= MODERATE_EXERCISE_COUNT {
            Self::Moderate
        } else if count >= LIGHT_EXERCISE_COUNT {
            Self::Light
        } else {
            Self::Minimal
        }
    }

    /// Label suffix, empty for minimal sessions
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Heavy => " - Heavy",
            Self::Moderate => " - Moderate",
            Self::Light => " - Light",
            Self::Minimal => "",
        }
    }
}

/// Generates human-readable session labels
pub struct SessionNamer;

impl SessionNamer {
    /// Label for a session, reading its start hour in the given offset
    #[must_use]
    pub fn name_of(session: &WorkoutSession, offset: &FixedOffset) -> String {
        Self::name_for(
            &session.muscle_groups,
            session.exercises.len(),
            session.local_start_hour(offset),
        )
    }

    /// Label from raw inputs: `"<day part> <workout type><intensity suffix>"`
    #[must_use]
    pub fn name_for(muscles: &NameSet, exercise_count: usize, start_hour: u32) -> String {
        format!(
            "{} {}{}",
            DayPart::from_hour(start_hour),
            WorkoutType::classify(muscles),
            Intensity::from_exercise_count(exercise_count).suffix()
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
