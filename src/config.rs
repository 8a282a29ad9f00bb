// ABOUTME: Runtime settings for the command-line tool: logging first, then engine config
// ABOUTME: Environment values first, then command-line overrides, then validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::logging::LoggingConfig;
use ironlog_core::errors::AppResult;
use ironlog_intelligence::{AnalyticsConfig, SessionWindow};
use tracing::debug;

/// Values given on the command line; `None` keeps the environment value
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Session window in minutes, as typed on the command line
    pub window_minutes: Option<String>,
    /// Local offset from UTC in minutes
    pub utc_offset_minutes: Option<i32>,
    /// Number of weekly buckets
    pub weekly_buckets: Option<usize>,
    /// Size of the volume ranking
    pub top_exercises: Option<usize>,
    /// Debug logging
    pub verbose: bool,
}

impl SettingsOverrides {
    /// Logging configuration from the environment with `-v` applied
    ///
    /// Needs nothing from the engine configuration, so the subscriber can be
    /// installed before `IRONLOG_*` values are read and validated.
    #[must_use]
    pub fn logging_config(&self) -> LoggingConfig {
        let logging = LoggingConfig::from_env();
        if self.verbose {
            logging.verbose()
        } else {
            logging
        }
    }
}

/// Engine settings resolved for one run
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    /// Engine configuration
    pub analytics: AnalyticsConfig,
}

impl RuntimeSettings {
    /// Load settings from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an `IRONLOG_*` variable is invalid
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            analytics: AnalyticsConfig::load()?,
        })
    }

    /// Apply command-line overrides and re-validate
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a window that is not a finite number and
    /// `CONFIG_INVALID` if an override is out of range
    pub fn apply_overrides(mut self, overrides: &SettingsOverrides) -> AppResult<Self> {
        if let Some(minutes) = overrides.window_minutes.as_deref() {
            self.analytics.session_window = SessionWindow::parse(minutes)?;
        }
        if let Some(offset) = overrides.utc_offset_minutes {
            self.analytics.utc_offset_minutes = offset;
        }
        if let Some(buckets) = overrides.weekly_buckets {
            self.analytics.weekly_bucket_limit = buckets;
        }
        if let Some(limit) = overrides.top_exercises {
            self.analytics.top_exercise_limit = limit;
        }
        self.analytics.validate()?;

        debug!(config = ?self.analytics, "Runtime settings resolved");
        Ok(self)
    }
}
