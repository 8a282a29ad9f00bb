// ABOUTME: Core types and constants for the Ironlog workout analytics workspace
// ABOUTME: Foundation crate with error handling, workout entry models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types and constants for the Ironlog
//! workspace. It changes rarely, so the engine and the command-line crate
//! build on top of it without pulling each other in.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Input records (`WorkoutEntry`, `ExerciseRef`, `SetRecord`)
//! - **constants**: Clustering defaults, report limits, naming thresholds

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models consumed by the analytics engine
pub mod models;

/// Application constants organized by domain
pub mod constants;
