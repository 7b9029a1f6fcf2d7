// ABOUTME: Module containing all MCP tool implementations organized by category.
// ABOUTME: Each submodule corresponds to a tool category with feature flag support.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `nutrition` - Nutritionix food search, meal nutrition and exercise calories

// Nutrition tools: search_food, get_food_nutrition, get_exercise_nutrition
#[cfg(feature = "tools-nutrition")]
pub mod nutrition;
