// ABOUTME: Main library entry point for the Ironlog workout analytics tool
// ABOUTME: Re-exports the engine and adds logging, runtime settings, and entry loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Reconstructs workout sessions from flat exercise logs and derives the
//! roll-ups a strength-training dashboard shows: sessions with generated
//! names, day groups, weekly progress, muscle distribution, and a volume
//! ranking.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ironlog::config::RuntimeSettings;
//! use ironlog::intelligence::DashboardAnalyzer;
//! use ironlog::loader::load_entries;
//! use ironlog_core::errors::AppResult;
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let settings = RuntimeSettings::from_env()?;
//!     let entries = load_entries(Path::new("entries.json"))?;
//!     let report = DashboardAnalyzer::new(settings.analytics).analyze(&entries);
//!     println!("{} sessions", report.sessions.len());
//!     Ok(())
//! }
//! ```

/// Runtime settings composed from the environment and command line
pub mod config;

/// JSON entry loading
pub mod loader;

/// Structured logging setup
pub mod logging;

/// Re-export of the analytics engine
pub use ironlog_intelligence as intelligence;
