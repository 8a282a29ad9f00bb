// ABOUTME: Reads workout entries from JSON exports
// ABOUTME: Accepts a bare array of entries or an object with an "entries" array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use ironlog_core::errors::{AppError, AppResult, ErrorCode};
use ironlog_core::models::WorkoutEntry;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse entries from a JSON document
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` for malformed JSON or malformed entries and
/// `INVALID_FORMAT` when the document is neither an array nor an object with
/// an `entries` array
pub fn parse_entries(text: &str) -> AppResult<Vec<WorkoutEntry>> {
    let document: Value = serde_json::from_str(text)?;
    let list = match document {
        Value::Array(_) => document,
        Value::Object(mut object) => object.remove("entries").ok_or_else(|| {
            AppError::new(
                ErrorCode::InvalidFormat,
                "expected an \"entries\" field in the top-level object",
            )
        })?,
        other => {
            return Err(AppError::new(
                ErrorCode::InvalidFormat,
                format!("expected an array of entries, found {}", kind_of(&other)),
            ))
        }
    };
    let entries: Vec<WorkoutEntry> = serde_json::from_value(list)?;
    debug!(entries = entries.len(), "Parsed workout entries");
    Ok(entries)
}

/// Read and parse entries from a file
///
/// # Errors
///
/// Returns `STORAGE_ERROR` if the file cannot be read, otherwise the errors
/// of [`parse_entries`]
pub fn load_entries(path: &Path) -> AppResult<Vec<WorkoutEntry>> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("cannot read {}", path.display()))
            .with_details(serde_json::json!({ "path": path.display().to_string() }))
            .with_source(e)
    })?;
    parse_entries(&text)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
