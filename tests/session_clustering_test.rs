// ABOUTME: Integration tests for session clustering and session finishing
// ABOUTME: Covers window boundaries, aggregate consistency, naming, and order independence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{bare, lift, march, training_log};
use ironlog::intelligence::{cluster, SessionAccumulator, SessionClusterer, SessionWindow};
use ironlog_core::errors::ErrorCode;
use ironlog_core::models::{SetRecord, WorkoutEntry};

#[test]
fn test_gap_larger_than_window_starts_new_session() {
    let entries = vec![
        bare(march(3, 10, 0)),
        bare(march(3, 10, 20)),
        bare(march(3, 13, 0)),
    ];
    let sessions = cluster(&entries, 60.0).unwrap();

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].start_time, march(3, 10, 0));
    assert_eq!(sessions[0].end_time, march(3, 10, 20));
    assert_eq!(sessions[1].start_time, march(3, 13, 0));
    assert_eq!(sessions[1].end_time, march(3, 13, 0));
}

#[test]
fn test_window_boundary_is_inclusive() {
    let window = 30.0;
    let exactly = vec![bare(march(3, 9, 0)), bare(march(3, 9, 30))];
    assert_eq!(cluster(&exactly, window).unwrap().len(), 1);

    let just_over = vec![
        bare(march(3, 9, 0)),
        WorkoutEntry::new(march(3, 9, 30) + Duration::milliseconds(1), None, Vec::new()),
    ];
    assert_eq!(cluster(&just_over, window).unwrap().len(), 2);
}

#[test]
fn test_empty_input_yields_no_sessions() {
    assert!(cluster(&[], 60.0).unwrap().is_empty());
}

#[test]
fn test_non_finite_window_fails_fast() {
    let entries = training_log();
    for window in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = cluster(&entries, window).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_zero_window_merges_only_identical_timestamps() {
    let entries = vec![
        bare(march(3, 9, 0)),
        bare(march(3, 9, 0)),
        bare(march(3, 9, 1)),
    ];
    let sessions = cluster(&entries, 0.0).unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].exercises.len(), 2);

    // negative windows behave like zero
    assert_eq!(cluster(&entries, -15.0).unwrap(), sessions);
}

#[test]
fn test_worked_example_aggregates() {
    let entries = vec![
        lift(march(3, 9, 0), "Bench Press", "chest", &[(100.0, 5)]),
        lift(march(3, 9, 10), "Incline Press", "chest", &[(80.0, 10)]),
    ];
    let session = &cluster(&entries, 60.0).unwrap()[0];

    assert_eq!(session.total_reps, 15);
    assert!((session.total_volume - 1300.0).abs() < f64::EPSILON);
    assert!((session.max_weight - 100.0).abs() < f64::EPSILON);
    assert_eq!(session.avg_reps_per_set, 8);
    assert_eq!(session.avg_weight, 87);
}

#[test]
fn test_aggregates_equal_raw_sums() {
    for session in cluster(&training_log(), 60.0).unwrap() {
        let sets = || session.exercises.iter().flat_map(|entry| entry.sets.iter());
        let reps: u64 = sets().map(|set| u64::from(set.reps())).sum();
        let volume: f64 = sets().map(SetRecord::volume).sum();
        let max = sets().map(SetRecord::weight).fold(0.0, f64::max);

        assert_eq!(session.total_sets, sets().count());
        assert_eq!(session.total_reps, reps);
        assert!((session.total_volume - volume).abs() < f64::EPSILON);
        assert!((session.max_weight - max).abs() < f64::EPSILON);
        assert!(session.start_time <= session.end_time);
        assert!(!session.exercises.is_empty());
    }
}

#[test]
fn test_input_order_does_not_change_sessions() {
    let ordered = training_log();
    let mut reversed = ordered.clone();
    reversed.reverse();
    let mut rotated = ordered.clone();
    rotated.rotate_left(4);

    let expected = cluster(&ordered, 60.0).unwrap();
    assert_eq!(cluster(&reversed, 60.0).unwrap(), expected);
    assert_eq!(cluster(&rotated, 60.0).unwrap(), expected);
}

#[test]
fn test_exercises_are_chronological_within_sessions() {
    let mut entries = training_log();
    entries.reverse();
    for session in cluster(&entries, 60.0).unwrap() {
        assert!(session
            .exercises
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }
}

#[test]
fn test_running_max_never_decreases() {
    let entries = vec![
        lift(march(3, 9, 0), "Squat", "legs", &[(100.0, 5)]),
        lift(march(3, 9, 5), "Squat", "legs", &[(140.0, 3)]),
        lift(march(3, 9, 10), "Squat", "legs", &[(60.0, 10)]),
    ];
    let mut accumulator = SessionAccumulator::seed(&entries[0]);
    let mut seen = accumulator.max_weight();
    for entry in &entries[1..] {
        accumulator.push(entry);
        assert!(accumulator.max_weight() >= seen);
        seen = accumulator.max_weight();
    }

    let session = &cluster(&entries, 60.0).unwrap()[0];
    assert!((session.max_weight - 140.0).abs() < f64::EPSILON);
    assert_eq!(session.personal_records, 1);
}

#[test]
fn test_session_names_follow_muscles_and_time() {
    let sessions = SessionClusterer::new(SessionWindow::default()).cluster(&training_log());
    let names: Vec<&str> = sessions.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "Morning Push Workout - Moderate",
            "Evening Pull Workout - Light",
            "Afternoon Leg Workout - Light",
            "Morning Chest Focus",
            "Evening Back Focus",
        ]
    );
}

#[test]
fn test_identifiers_are_stable_across_runs() {
    let first = cluster(&training_log(), 60.0).unwrap();
    let second = cluster(&training_log(), 60.0).unwrap();
    let ids: Vec<&str> = first.iter().map(|s| s.id.as_str()).collect();

    assert_eq!(
        ids,
        second.iter().map(|s| s.id.as_str()).collect::<Vec<_>>()
    );
    assert!(ids[0].starts_with("session-0-"));
    assert!(ids[4].starts_with("session-4-"));
}

#[test]
fn test_orphaned_entry_counts_toward_session_only() {
    let sessions = cluster(&training_log(), 60.0).unwrap();
    let legs = &sessions[2];

    assert_eq!(legs.exercises.len(), 3);
    assert_eq!(legs.exercise_names.len(), 2);
    assert_eq!(legs.muscle_groups.len(), 2);
    assert_eq!(legs.duration_minutes, 40);
}
