// ABOUTME: Nutritionix v2 API client for food search, nutrient and exercise parsing
// ABOUTME: Issues one request per call and maps non-200 statuses to typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutritionix API Client
//!
//! Thin client over three Nutritionix v2 endpoints:
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | [`NutritionixClient::search_food_instant`] | GET | `/search/instant?query=` |
//! | [`NutritionixClient::get_nutrition_from_natural_query`] | POST | `/natural/nutrients` |
//! | [`NutritionixClient::get_calories_burned`] | POST | `/natural/exercise` |
//!
//! Every request carries the `x-app-id` / `x-app-key` headers from the
//! configured credentials. A response is decoded only when its status is
//! exactly `200 OK`; anything else becomes
//! [`NutritionixApiError::RequestFailed`] carrying the status and body.
//!
//! There is no caching, retry or rate limiting. Each client owns its own
//! connection pool, released when the client is dropped.
//!
//! # Example
//! ```rust,no_run
//! use nutritionix_mcp_server::config::{NutritionixCredentials, ServerConfig};
//! use nutritionix_mcp_server::external::NutritionixClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::new(NutritionixCredentials::new("app-id", "app-key")?);
//! let client = NutritionixClient::new(&config);
//! let foods = client.get_nutrition_from_natural_query("1 egg and 2 slices of toast").await?;
//! println!("{} foods parsed", foods.foods.len());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Instant;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{NutritionixCredentials, ServerConfig};
use crate::constants::nutritionix::{
    NATURAL_EXERCISE_PATH, NATURAL_NUTRIENTS_PATH, SEARCH_INSTANT_PATH, SERVICE_NAME,
};
use crate::errors::AppError;
use crate::logging::AppLogger;

/// The three remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionixOperation {
    /// Instant search over common and branded foods
    SearchInstant,
    /// Natural-language nutrient parsing
    NaturalNutrients,
    /// Natural-language exercise parsing
    NaturalExercise,
}

impl NutritionixOperation {
    /// Endpoint path relative to the API base URL
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SearchInstant => SEARCH_INSTANT_PATH,
            Self::NaturalNutrients => NATURAL_NUTRIENTS_PATH,
            Self::NaturalExercise => NATURAL_EXERCISE_PATH,
        }
    }

    /// HTTP method name
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::SearchInstant => "GET",
            Self::NaturalNutrients | Self::NaturalExercise => "POST",
        }
    }

    /// Fixed human-readable message reported when the call fails
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::SearchInstant => "The search food request failed!",
            Self::NaturalNutrients => "The nutrition from natural language request failed!",
            Self::NaturalExercise => "Failed to get exercises data!",
        }
    }
}

impl fmt::Display for NutritionixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::SearchInstant => "search",
            Self::NaturalNutrients => "nutrients",
            Self::NaturalExercise => "exercise",
        };
        f.write_str(tag)
    }
}

/// Errors returned by [`NutritionixClient`]
#[derive(Debug, thiserror::Error)]
pub enum NutritionixApiError {
    /// The API answered with a status other than `200 OK`
    #[error("{}", .operation.failure_message())]
    RequestFailed {
        /// Operation that failed
        operation: NutritionixOperation,
        /// HTTP status code returned
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("{}", .operation.failure_message())]
    Transport {
        /// Operation that failed
        operation: NutritionixOperation,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// A `200 OK` body could not be decoded
    #[error("{}", .operation.failure_message())]
    Decode {
        /// Operation that failed
        operation: NutritionixOperation,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl NutritionixApiError {
    /// Operation that produced this error
    #[must_use]
    pub const fn operation(&self) -> NutritionixOperation {
        match self {
            Self::RequestFailed { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// HTTP status, when the API responded at all
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

impl From<NutritionixApiError> for AppError {
    fn from(error: NutritionixApiError) -> Self {
        let message = match &error {
            NutritionixApiError::RequestFailed { status, .. } => format!("{error} (HTTP {status})"),
            NutritionixApiError::Transport { source, .. } => format!("{error} ({source})"),
            NutritionixApiError::Decode { source, .. } => {
                format!("{error} (invalid JSON: {source})")
            }
        };

        match error {
            NutritionixApiError::RequestFailed { .. } => {
                Self::external_service(SERVICE_NAME, message)
            }
            NutritionixApiError::Transport { .. } => {
                Self::external_unavailable(SERVICE_NAME, message).with_source(error)
            }
            NutritionixApiError::Decode { .. } => {
                Self::external_service(SERVICE_NAME, message).with_source(error)
            }
        }
    }
}

/// Common (generic) food hit from instant search.
///
/// Accepts either an object with `food_name` or a bare string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CommonFoodRepr")]
pub struct CommonFood {
    /// Food name, e.g. "banana"
    pub food_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommonFoodRepr {
    Name(String),
    Object {
        #[serde(default)]
        food_name: Option<String>,
    },
}

impl From<CommonFoodRepr> for CommonFood {
    fn from(repr: CommonFoodRepr) -> Self {
        match repr {
            CommonFoodRepr::Name(name) => Self {
                food_name: Some(name),
            },
            CommonFoodRepr::Object { food_name } => Self { food_name },
        }
    }
}

/// Branded product hit from instant search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandedFood {
    /// Brand, e.g. "Chiquita"
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Product name
    #[serde(default)]
    pub food_name: Option<String>,
}

/// `GET /search/instant` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstantSearchResponse {
    /// Common foods
    #[serde(default, deserialize_with = "null_as_empty")]
    pub common: Vec<CommonFood>,
    /// Branded products
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branded: Vec<BrandedFood>,
}

/// One food parsed from a natural-language query.
///
/// Numeric fields keep the raw JSON value so they render exactly as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedFood {
    /// Food name
    #[serde(default)]
    pub food_name: Option<String>,
    /// Serving quantity
    #[serde(default)]
    pub serving_qty: Option<Value>,
    /// Serving unit ("large", "slice", ...)
    #[serde(default)]
    pub serving_unit: Option<Value>,
    /// Serving weight in grams
    #[serde(default)]
    pub serving_weight_grams: Option<Value>,
    /// Energy in kcal
    #[serde(default)]
    pub nf_calories: Option<Value>,
    /// Protein in grams
    #[serde(default)]
    pub nf_protein: Option<Value>,
    /// Total carbohydrate in grams
    #[serde(default)]
    pub nf_total_carbohydrate: Option<Value>,
    /// Total fat in grams
    #[serde(default)]
    pub nf_total_fat: Option<Value>,
}

/// `POST /natural/nutrients` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaturalNutrientsResponse {
    /// Parsed foods
    #[serde(default, deserialize_with = "null_as_empty")]
    pub foods: Vec<ParsedFood>,
}

/// One exercise parsed from a natural-language query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedExercise {
    /// Exercise name
    #[serde(default)]
    pub name: Option<String>,
    /// Duration in minutes
    #[serde(default)]
    pub duration_min: Option<Value>,
    /// Calories burned
    #[serde(default)]
    pub nf_calories: Option<Value>,
    /// Metabolic equivalent of task
    #[serde(default)]
    pub met: Option<Value>,
}

/// `POST /natural/exercise` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaturalExerciseResponse {
    /// Parsed exercises
    #[serde(default, deserialize_with = "null_as_empty")]
    pub exercises: Vec<ParsedExercise>,
}

/// Treat an explicit `null` list like an absent one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// POST body shared by the natural-language endpoints
#[derive(Debug, Serialize)]
struct NaturalQuery<'a> {
    query: &'a str,
}

/// Nutritionix v2 API client
pub struct NutritionixClient {
    base_url: String,
    credentials: NutritionixCredentials,
    http_client: reqwest::Client,
}

impl NutritionixClient {
    /// Create a client for the configured base URL and credentials
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, operation: NutritionixOperation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    /// Search common and branded foods by name
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the status is not
    /// `200 OK`, or the body is not a valid search response
    pub async fn search_food_instant(
        &self,
        query: &str,
    ) -> Result<InstantSearchResponse, NutritionixApiError> {
        let operation = NutritionixOperation::SearchInstant;
        let request = self
            .http_client
            .get(self.url(operation))
            .headers(self.credentials.auth_headers())
            .query(&[("query", query)]);

        self.send(operation, request).await
    }

    /// Parse foods and their nutrients from a natural-language description
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the status is not
    /// `200 OK`, or the body is not a valid nutrients response
    pub async fn get_nutrition_from_natural_query(
        &self,
        query: &str,
    ) -> Result<NaturalNutrientsResponse, NutritionixApiError> {
        let operation = NutritionixOperation::NaturalNutrients;
        let request = self
            .http_client
            .post(self.url(operation))
            .headers(self.credentials.json_headers())
            .json(&NaturalQuery { query });

        self.send(operation, request).await
    }

    /// Estimate calories burned from a natural-language exercise description
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the status is not
    /// `200 OK`, or the body is not a valid exercise response
    pub async fn get_calories_burned(
        &self,
        query: &str,
    ) -> Result<NaturalExerciseResponse, NutritionixApiError> {
        let operation = NutritionixOperation::NaturalExercise;
        let request = self
            .http_client
            .post(self.url(operation))
            .headers(self.credentials.json_headers())
            .json(&NaturalQuery { query });

        self.send(operation, request).await
    }

    /// Send one request and decode a `200 OK` body
    async fn send<T: DeserializeOwned>(
        &self,
        operation: NutritionixOperation,
        request: RequestBuilder,
    ) -> Result<T, NutritionixApiError> {
        let start = Instant::now();

        let response = request
            .send()
            .await
            .map_err(|source| NutritionixApiError::Transport { operation, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| NutritionixApiError::Transport { operation, source })?;

        AppLogger::log_api_request(
            operation.method(),
            operation.path(),
            status.as_u16(),
            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        if status != StatusCode::OK {
            warn!(
                operation = %operation,
                status = status.as_u16(),
                "Nutritionix request failed"
            );
            return Err(NutritionixApiError::RequestFailed {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        debug!(operation = %operation, bytes = body.len(), "Decoding Nutritionix response");
        serde_json::from_str(&body)
            .map_err(|source| NutritionixApiError::Decode { operation, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_messages_are_fixed_per_operation() {
        assert_eq!(
            NutritionixOperation::SearchInstant.failure_message(),
            "The search food request failed!"
        );
        assert_eq!(
            NutritionixOperation::NaturalNutrients.failure_message(),
            "The nutrition from natural language request failed!"
        );
        assert_eq!(
            NutritionixOperation::NaturalExercise.failure_message(),
            "Failed to get exercises data!"
        );
    }

    #[test]
    fn test_request_failed_display_is_fixed_message() {
        let error = NutritionixApiError::RequestFailed {
            operation: NutritionixOperation::SearchInstant,
            status: 401,
            body: "unauthorized".to_owned(),
        };
        assert_eq!(error.to_string(), "The search food request failed!");
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.operation(), NutritionixOperation::SearchInstant);
    }

    #[test]
    fn test_request_failed_maps_to_external_service_error() {
        let error = NutritionixApiError::RequestFailed {
            operation: NutritionixOperation::NaturalExercise,
            status: 500,
            body: String::new(),
        };
        let app_error = AppError::from(error);
        assert_eq!(app_error.code, crate::errors::ErrorCode::ExternalServiceError);
        assert!(app_error.message.contains("Failed to get exercises data!"));
        assert!(app_error.message.contains("500"));
    }

    #[test]
    fn test_search_response_tolerates_missing_and_null_lists() {
        let absent: InstantSearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(absent.common.is_empty());
        assert!(absent.branded.is_empty());

        let null: InstantSearchResponse =
            serde_json::from_value(json!({"common": null, "branded": [{"food_name": "x"}]}))
                .unwrap();
        assert!(null.common.is_empty());
        assert_eq!(null.branded.len(), 1);
        assert!(null.branded[0].brand_name.is_none());
    }

    #[test]
    fn test_common_food_accepts_bare_string() {
        let response: InstantSearchResponse =
            serde_json::from_value(json!({"common": ["banana", {"food_name": "apple"}]}))
                .unwrap();
        assert_eq!(response.common[0].food_name.as_deref(), Some("banana"));
        assert_eq!(response.common[1].food_name.as_deref(), Some("apple"));
    }

    #[test]
    fn test_exercise_without_met_decodes() {
        let response: NaturalExerciseResponse = serde_json::from_value(json!({
            "exercises": [{"name": "yoga", "duration_min": 60, "nf_calories": 238.5}]
        }))
        .unwrap();
        assert!(response.exercises[0].met.is_none());
        assert_eq!(response.exercises[0].duration_min, Some(json!(60)));
    }
}
