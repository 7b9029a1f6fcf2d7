// ABOUTME: External API client modules (Nutritionix)
// ABOUTME: Provides natural-language nutrition and exercise data integration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for external APIs used by the MCP server.

pub mod nutritionix_client;

// Re-export commonly used types
pub use nutritionix_client::{
    BrandedFood, CommonFood, InstantSearchResponse, NaturalExerciseResponse,
    NaturalNutrientsResponse, NutritionixApiError, NutritionixClient, NutritionixOperation,
    ParsedExercise, ParsedFood,
};
