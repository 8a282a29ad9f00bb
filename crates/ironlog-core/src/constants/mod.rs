// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Session clustering defaults, report limits, and naming thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Session clustering defaults
pub mod sessions {
    /// Default maximum gap between entries of one session, in minutes
    pub const DEFAULT_WINDOW_MINUTES: f64 = 60.0;
    /// Milliseconds per minute
    pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
    /// Fraction of the session max weight a set must reach to count as a record
    pub const PERSONAL_RECORD_RATIO: f64 = 0.9;
    /// Prefix of generated session identifiers
    pub const SESSION_ID_PREFIX: &str = "session";
}

/// Report sizes
pub mod limits {
    /// Number of most recent weekly buckets kept in progress reports
    pub const WEEKLY_PROGRESS_BUCKETS: usize = 8;
    /// Number of exercises kept in the volume ranking
    pub const TOP_EXERCISES: usize = 10;
    /// Largest accepted UTC offset, in minutes (±18h)
    pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;
}

/// Session naming thresholds
pub mod naming {
    /// Sessions starting before this hour are "Morning"
    pub const MORNING_END_HOUR: u32 = 12;
    /// Sessions starting before this hour (and not morning) are "Afternoon"
    pub const AFTERNOON_END_HOUR: u32 = 17;
    /// Exercise count at which a session is "Heavy"
    pub const HEAVY_EXERCISE_COUNT: usize = 6;
    /// Exercise count at which a session is "Moderate"
    pub const MODERATE_EXERCISE_COUNT: usize = 4;
    /// Exercise count at which a session is "Light"
    pub const LIGHT_EXERCISE_COUNT: usize = 2;
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the command-line tool
    pub const IRONLOG_CLI: &str = "ironlog-cli";
}
