// ABOUTME: Analytics engine configuration: session window, local offset, report limits
// ABOUTME: Loads defaults, applies environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Analytics Configuration
//!
//! Every knob of the pipeline lives here. Weeks always start on Monday
//! (ISO-8601) and that is not configurable.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::session_clustering::SessionWindow;
use chrono::{FixedOffset, Offset, Utc};
use ironlog_core::constants::{limits, sessions};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;

/// Environment variable holding the session window in minutes
pub const ENV_SESSION_WINDOW_MINUTES: &str = "IRONLOG_SESSION_WINDOW_MINUTES";
/// Environment variable holding the local UTC offset in minutes
pub const ENV_UTC_OFFSET_MINUTES: &str = "IRONLOG_UTC_OFFSET_MINUTES";
/// Environment variable holding the personal record ratio
pub const ENV_PR_RATIO: &str = "IRONLOG_PR_RATIO";
/// Environment variable holding the number of weekly buckets
pub const ENV_WEEKLY_BUCKETS: &str = "IRONLOG_WEEKLY_BUCKETS";
/// Environment variable holding the size of the top exercise ranking
pub const ENV_TOP_EXERCISES: &str = "IRONLOG_TOP_EXERCISES";

/// Configuration for the session analytics pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Maximum gap between consecutive entries of one session
    pub session_window: SessionWindow,
    /// Offset from UTC used for calendar dates and hour of day
    pub utc_offset_minutes: i32,
    /// A set at or above this fraction of the session max counts as a record
    pub personal_record_ratio: f64,
    /// Number of most recent weeks kept in weekly progress
    pub weekly_bucket_limit: usize,
    /// Number of exercises kept in the volume ranking
    pub top_exercise_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            session_window: SessionWindow::default(),
            utc_offset_minutes: 0,
            personal_record_ratio: sessions::PERSONAL_RECORD_RATIO,
            weekly_bucket_limit: limits::WEEKLY_PROGRESS_BUCKETS,
            top_exercise_limit: limits::TOP_EXERCISES,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Use a different session window
    #[must_use]
    pub fn with_session_window(mut self, window: SessionWindow) -> Self {
        self.session_window = window;
        self
    }

    /// Use a different local UTC offset (minutes east of UTC)
    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Offset used to derive local dates and hours
    ///
    /// Out-of-range offsets fall back to UTC; `validate` rejects them first.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.personal_record_ratio > 0.0 && self.personal_record_ratio <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "personal_record_ratio must be within (0, 1]",
            ));
        }
        if self.utc_offset_minutes.unsigned_abs() > limits::MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(ConfigError::ValueOutOfRange(
                "utc_offset_minutes must be within ±18 hours",
            ));
        }
        if self.weekly_bucket_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "weekly_bucket_limit must be at least 1",
            ));
        }
        if self.top_exercise_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "top_exercise_limit must be at least 1",
            ));
        }
        Ok(())
    }

    fn read_env_var(variable: &'static str) -> Result<Option<String>, ConfigError> {
        match env::var(variable) {
            Ok(val) => Ok(Some(val)),
            Err(VarError::NotPresent) => Ok(None),
            Err(source) => Err(ConfigError::EnvVar { variable, source }),
        }
    }

    fn apply_env_var<T: FromStr>(
        variable: &'static str,
        target: &mut T,
    ) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env_var(variable)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {variable}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = Self::read_env_var(ENV_SESSION_WINDOW_MINUTES)? {
            self.session_window =
                SessionWindow::parse(&val).map_err(|source| ConfigError::Window {
                    variable: ENV_SESSION_WINDOW_MINUTES,
                    source,
                })?;
        }
        Self::apply_env_var(ENV_UTC_OFFSET_MINUTES, &mut self.utc_offset_minutes)?;
        Self::apply_env_var(ENV_PR_RATIO, &mut self.personal_record_ratio)?;
        Self::apply_env_var(ENV_WEEKLY_BUCKETS, &mut self.weekly_bucket_limit)?;
        Self::apply_env_var(ENV_TOP_EXERCISES, &mut self.top_exercise_limit)?;
        Ok(self)
    }
}
