// ABOUTME: Configuration error types for analytics engine validation
// ABOUTME: Defines the error variants and how each maps onto an AppError code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Configuration error types for analytics engine validation.

use ironlog_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., ratio not within (0, 1])
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable is set but not valid unicode
    #[error("Environment variable {variable}: {source}")]
    EnvVar {
        /// Name of the variable
        variable: &'static str,
        /// Underlying access error
        #[source]
        source: env::VarError,
    },

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Session window text that is not a finite number
    #[error("Invalid {variable}: {}", .source.message)]
    Window {
        /// Name of the variable holding the window
        variable: &'static str,
        /// `InvalidInput` raised while parsing the window
        #[source]
        source: AppError,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        // Window text keeps INVALID_INPUT, like the CLI path
        let converted = if matches!(error, ConfigError::Window { .. }) {
            Self::invalid_input(error.to_string())
        } else {
            Self::config(error.to_string())
        };
        converted.with_source(error)
    }
}
