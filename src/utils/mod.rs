// ABOUTME: Utility module aggregating small shared helpers
// ABOUTME: Currently hosts text helpers used by tool output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Text casing helpers
pub mod text;
