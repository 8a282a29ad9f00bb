// ABOUTME: Core data models consumed by the analytics engine
// ABOUTME: Re-exports workout entry, exercise reference, and set types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

/// Logged workout entries and their sets
pub mod workout;

pub use workout::{ExerciseRef, SetRecord, WorkoutEntry};
