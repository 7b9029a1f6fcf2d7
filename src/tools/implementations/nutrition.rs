// ABOUTME: Nutritionix tools for food search, meal nutrition and exercise calorie lookups.
// ABOUTME: Implements search_food, get_food_nutrition, get_exercise_nutrition as text-producing tools.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Tools
//!
//! - `SearchFoodTool` - instant search over common and branded foods
//! - `GetFoodNutritionTool` - nutrients of foods described in plain language
//! - `GetExerciseNutritionTool` - calories burned by exercises described in plain language
//!
//! Each tool makes exactly one Nutritionix call through a per-call client.
//! A failed call never escapes the tool: it is rendered as an error text result.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::constants::limits::{MAX_SEARCH_RESULTS_PER_SECTION, MISSING_VALUE};
use crate::constants::tools::{GET_EXERCISE_NUTRITION, GET_FOOD_NUTRITION, SEARCH_FOOD};
use crate::errors::AppResult;
use crate::external::{
    InstantSearchResponse, NaturalExerciseResponse, NaturalNutrientsResponse, NutritionixApiError,
    ParsedExercise, ParsedFood,
};
use crate::mcp::schema::JsonSchema;
use crate::tools::context::ToolExecutionContext;
use crate::tools::errors::ToolError;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};
use crate::utils::text::title_case;

// ============================================================================
// Helper functions
// ============================================================================

const QUERY_PARAM: &str = "query";

const SEARCH_FAILURE_PREFIX: &str = "Failed to search foods";
const NUTRITION_FAILURE_PREFIX: &str = "Failed to get nutrition info";
const EXERCISE_FAILURE_PREFIX: &str = "Failed to get exercise data";

/// Extract the required `query` string argument
fn require_query<'a>(tool_name: &str, args: &'a Value) -> Result<&'a str, ToolError> {
    match args.get(QUERY_PARAM) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool_name, QUERY_PARAM)),
        Some(Value::String(query)) => Ok(query),
        Some(_) => Err(ToolError::invalid_parameter(
            tool_name,
            QUERY_PARAM,
            "must be a string",
        )),
    }
}

fn tool_capabilities() -> ToolCapabilities {
    ToolCapabilities::READS_DATA
        | ToolCapabilities::EXTERNAL_API
        | ToolCapabilities::REQUIRES_CREDENTIALS
}

/// Render a scalar as the API sent it, `N/A` when absent
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn display_text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_VALUE)
}

/// Render a failed Nutritionix call as the user-facing message
#[must_use]
pub fn format_api_failure(prefix: &str, error: &NutritionixApiError) -> String {
    match error {
        NutritionixApiError::RequestFailed { status, body, .. } => {
            format!("{prefix}: {status} - {body}")
        }
        NutritionixApiError::Transport { source, .. } => format!("{prefix}: {error} ({source})"),
        NutritionixApiError::Decode { source, .. } => {
            format!("{prefix}: {error} (invalid response body: {source})")
        }
    }
}

// ============================================================================
// Formatters
// ============================================================================

/// Format instant search results (at most five entries per section)
#[must_use]
pub fn format_search_results(response: &InstantSearchResponse) -> String {
    let mut sections = Vec::with_capacity(2);

    if !response.common.is_empty() {
        let lines: Vec<String> = response
            .common
            .iter()
            .take(MAX_SEARCH_RESULTS_PER_SECTION)
            .map(|food| format!("- {}", display_text(food.food_name.as_deref())))
            .collect();
        sections.push(format!("🔸 **Common Foods:**\n{}", lines.join("\n")));
    }

    if !response.branded.is_empty() {
        let lines: Vec<String> = response
            .branded
            .iter()
            .take(MAX_SEARCH_RESULTS_PER_SECTION)
            .map(|food| {
                format!(
                    "- {} - {}",
                    display_text(food.brand_name.as_deref()),
                    display_text(food.food_name.as_deref())
                )
            })
            .collect();
        sections.push(format!("🔹 **Branded Products:**\n{}", lines.join("\n")));
    }

    if sections.is_empty() {
        "No matching food items found.".to_owned()
    } else {
        sections.join("\n\n")
    }
}

fn format_food(food: &ParsedFood) -> String {
    format!(
        "🍽️ {name}\n    Serving: {qty} {unit} ({grams}g)\n    Calories: {calories} kcal\n    Protein: {protein}g\n    Carbs: {carbs}g\n    Fat: {fat}g",
        name = title_case(display_text(food.food_name.as_deref())),
        qty = display_value(food.serving_qty.as_ref()),
        unit = display_value(food.serving_unit.as_ref()),
        grams = display_value(food.serving_weight_grams.as_ref()),
        calories = display_value(food.nf_calories.as_ref()),
        protein = display_value(food.nf_protein.as_ref()),
        carbs = display_value(food.nf_total_carbohydrate.as_ref()),
        fat = display_value(food.nf_total_fat.as_ref()),
    )
}

/// Format every parsed food as one block
#[must_use]
pub fn format_food_nutrition(response: &NaturalNutrientsResponse) -> String {
    if response.foods.is_empty() {
        return "No nutrition data found.".to_owned();
    }
    response
        .foods
        .iter()
        .map(format_food)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_exercise(exercise: &ParsedExercise) -> String {
    format!(
        "🏃 {name}\n    Duration: {duration} min\n    Calories Burned: {calories} kcal\n    MET: {met}",
        name = title_case(display_text(exercise.name.as_deref())),
        duration = display_value(exercise.duration_min.as_ref()),
        calories = display_value(exercise.nf_calories.as_ref()),
        met = display_value(exercise.met.as_ref()),
    )
}

/// Format every parsed exercise as one block
#[must_use]
pub fn format_exercise_nutrition(response: &NaturalExerciseResponse) -> String {
    if response.exercises.is_empty() {
        return "No exercise data found.".to_owned();
    }
    response
        .exercises
        .iter()
        .map(format_exercise)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ============================================================================
// SearchFoodTool
// ============================================================================

/// Tool for searching common and branded foods by name.
pub struct SearchFoodTool;

#[async_trait]
impl McpTool for SearchFoodTool {
    fn name(&self) -> &'static str {
        SEARCH_FOOD
    }

    fn description(&self) -> &'static str {
        "Search for common and branded food items."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::single_string(
            QUERY_PARAM,
            "The food search string (e.g. 'banana', 'egg', 'yogurt')",
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        tool_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let query = require_query(self.name(), &args)?;
        debug!(request_id = ?ctx.request_id, query = %query, "Searching foods");

        let client = ctx.nutritionix_client();
        Ok(match client.search_food_instant(query).await {
            Ok(response) => ToolResult::text(format_search_results(&response)),
            Err(e) => ToolResult::error(format_api_failure(SEARCH_FAILURE_PREFIX, &e)),
        })
    }
}

// ============================================================================
// GetFoodNutritionTool
// ============================================================================

/// Tool for nutrients of foods described in natural language.
pub struct GetFoodNutritionTool;

#[async_trait]
impl McpTool for GetFoodNutritionTool {
    fn name(&self) -> &'static str {
        GET_FOOD_NUTRITION
    }

    fn description(&self) -> &'static str {
        "Get detailed nutritional information from a natural language food query."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::single_string(
            QUERY_PARAM,
            "A sentence or phrase describing the food (e.g. \"1 egg and 2 slices of toast\")",
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        tool_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let query = require_query(self.name(), &args)?;
        debug!(request_id = ?ctx.request_id, query = %query, "Parsing food nutrition");

        let client = ctx.nutritionix_client();
        Ok(match client.get_nutrition_from_natural_query(query).await {
            Ok(response) => ToolResult::text(format_food_nutrition(&response)),
            Err(e) => ToolResult::error(format_api_failure(NUTRITION_FAILURE_PREFIX, &e)),
        })
    }
}

// ============================================================================
// GetExerciseNutritionTool
// ============================================================================

/// Tool for calories burned by exercises described in natural language.
pub struct GetExerciseNutritionTool;

#[async_trait]
impl McpTool for GetExerciseNutritionTool {
    fn name(&self) -> &'static str {
        GET_EXERCISE_NUTRITION
    }

    fn description(&self) -> &'static str {
        "Get estimated exercise calories burned from natural language input. It would be good to provide age, gender, weight in kg and height in cm."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::single_string(
            QUERY_PARAM,
            "Description of exercise (e.g. \"ran 3 miles and biked for 30 minutes\")",
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        tool_capabilities()
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let query = require_query(self.name(), &args)?;
        debug!(request_id = ?ctx.request_id, query = %query, "Parsing exercise calories");

        let client = ctx.nutritionix_client();
        Ok(match client.get_calories_burned(query).await {
            Ok(response) => ToolResult::text(format_exercise_nutrition(&response)),
            Err(e) => ToolResult::error(format_api_failure(EXERCISE_FAILURE_PREFIX, &e)),
        })
    }
}

// ============================================================================
// Module exports
// ============================================================================

/// Create all nutrition tools for registration
#[must_use]
pub fn create_nutrition_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(SearchFoodTool),
        Box::new(GetFoodNutritionTool),
        Box::new(GetExerciseNutritionTool),
    ]
}
