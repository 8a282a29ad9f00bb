// ABOUTME: Integration tests for loading workout entries from JSON files
// ABOUTME: Covers both document shapes, permissive fields, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ironlog::intelligence::cluster;
use ironlog::loader::{load_entries, parse_entries};
use ironlog_core::errors::ErrorCode;
use std::io::Write;
use tempfile::NamedTempFile;

const EXPORT: &str = r#"{
    "entries": [
        {
            "timestamp": "2025-03-03T09:00:00Z",
            "exerciseRef": {
                "name": "Bench Press",
                "primaryMuscleGroup": "chest",
                "muscleGroups": ["chest", "triceps"]
            },
            "sets": [{"weight": 100, "reps": 5}, {"weight": 100, "reps": 5}]
        },
        {
            "timestamp": "2025-03-03T09:20:00+00:00",
            "exerciseRef": {"name": "Overhead Press", "primaryMuscleGroup": "shoulders"},
            "sets": [{"weight": 50}, {"reps": 8}]
        },
        {
            "timestamp": "2025-03-03T09:30:00Z",
            "sets": null
        }
    ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_wrapped_export_from_file() {
    let file = write_temp(EXPORT);
    let entries = load_entries(file.path()).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].exercise_name(), Some("Bench Press"));
    assert_eq!(
        entries[0].muscles().collect::<Vec<_>>(),
        vec!["chest", "chest", "triceps"]
    );
    assert!(entries[2].exercise_ref.is_none());
    assert!(entries[2].sets.is_empty());
}

#[test]
fn test_missing_set_values_count_as_zero() {
    let entries = parse_entries(EXPORT).unwrap();
    let sessions = cluster(&entries, 60.0).unwrap();

    assert_eq!(sessions.len(), 1);
    let session = &sessions[0];
    assert_eq!(session.total_sets, 4);
    assert_eq!(session.total_reps, 18);
    assert!((session.total_volume - 1000.0).abs() < f64::EPSILON);
    assert_eq!(
        session.muscle_groups.iter().collect::<Vec<_>>(),
        vec!["chest", "triceps", "shoulders"]
    );
    assert_eq!(session.name, "Morning Push Workout - Light");
}

#[test]
fn test_bare_array_document() {
    let entries = parse_entries(r#"[{"timestamp": "2025-03-03T09:00:00Z", "sets": []}]"#).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(parse_entries("[]").unwrap().is_empty());
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_entries(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.details.get("path").is_some());
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let file = write_temp("{\"entries\": [");
    let err = load_entries(file.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.details.get("line").is_some());
}

#[test]
fn test_entry_without_timestamp_is_rejected() {
    let err = parse_entries(r#"[{"sets": []}]"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_object_without_entries_is_invalid_format() {
    let err = parse_entries(r#"{"workouts": []}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}
