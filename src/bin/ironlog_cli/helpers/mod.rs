// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
// ABOUTME: Helper modules for ironlog-cli
// ABOUTME: Provides table and JSON output formatting

pub mod display;
