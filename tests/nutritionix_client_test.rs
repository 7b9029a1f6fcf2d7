// ABOUTME: Integration tests for the Nutritionix HTTP client against a local stand-in server
// ABOUTME: Verifies request shape, authentication headers and status-to-error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::{Endpoint, MockNutritionix, TEST_APP_ID, TEST_APP_KEY};
use nutritionix_mcp_server::errors::{AppError, ErrorCode};
use nutritionix_mcp_server::external::{
    NutritionixApiError, NutritionixClient, NutritionixOperation,
};
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_search_sends_get_with_query_and_auth_headers() {
    let mock = MockNutritionix::start().await;
    mock.reply_json(
        Endpoint::Search,
        200,
        &json!({
            "common": [{"food_name": "greek yogurt"}],
            "branded": [{"brand_name": "Chobani", "food_name": "Plain Greek Yogurt"}]
        }),
    );

    let client = NutritionixClient::new(&mock.config());
    let response = client.search_food_instant("greek yogurt & honey").await.unwrap();

    assert_eq!(response.common.len(), 1);
    assert_eq!(response.branded[0].brand_name.as_deref(), Some("Chobani"));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/v2/search/instant");
    // Reserved characters survive URL encoding
    assert_eq!(
        request.query.get("query").map(String::as_str),
        Some("greek yogurt & honey")
    );
    assert_eq!(request.headers["x-app-id"], TEST_APP_ID);
    assert_eq!(request.headers["x-app-key"], TEST_APP_KEY);
}

#[tokio::test]
async fn test_natural_endpoints_post_json_query_body() {
    let mock = MockNutritionix::start().await;
    let client = NutritionixClient::new(&mock.config());

    client
        .get_nutrition_from_natural_query("1 egg and 2 slices of toast")
        .await
        .unwrap();
    client
        .get_calories_burned("ran 3 miles")
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);

    let nutrients = &requests[0];
    assert_eq!(nutrients.method, "POST");
    assert_eq!(nutrients.path, "/v2/natural/nutrients");
    assert_eq!(nutrients.headers["content-type"], "application/json");
    let body: Value = serde_json::from_str(&nutrients.body).unwrap();
    assert_eq!(body, json!({"query": "1 egg and 2 slices of toast"}));

    let exercise = &requests[1];
    assert_eq!(exercise.path, "/v2/natural/exercise");
    assert_eq!(exercise.headers["x-app-id"], TEST_APP_ID);
    let body: Value = serde_json::from_str(&exercise.body).unwrap();
    assert_eq!(body, json!({"query": "ran 3 miles"}));
}

#[tokio::test]
async fn test_non_200_keeps_status_and_body_with_fixed_message() {
    let mock = MockNutritionix::start().await;
    mock.reply_raw(Endpoint::Nutrients, 404, "We couldn't match any of your foods");

    let client = NutritionixClient::new(&mock.config());
    let error = client
        .get_nutrition_from_natural_query("asdfgh")
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "The nutrition from natural language request failed!"
    );
    match &error {
        NutritionixApiError::RequestFailed {
            operation,
            status,
            body,
        } => {
            assert_eq!(*operation, NutritionixOperation::NaturalNutrients);
            assert_eq!(*status, 404);
            assert_eq!(body, "We couldn't match any of your foods");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_non_200_success_range_is_still_failure() {
    let mock = MockNutritionix::start().await;
    mock.reply_json(Endpoint::Exercise, 201, &json!({"exercises": []}));

    let client = NutritionixClient::new(&mock.config());
    let error = client.get_calories_burned("yoga").await.unwrap_err();

    assert_eq!(error.status(), Some(201));
    assert_eq!(error.to_string(), "Failed to get exercises data!");
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected_by_remote() {
    let mock = MockNutritionix::start().await;
    let client = NutritionixClient::new(&mock.config_with("someone-else", "bad-key"));

    let error = client.search_food_instant("apple").await.unwrap_err();
    assert_eq!(error.status(), Some(401));
    assert_eq!(error.to_string(), "The search food request failed!");
}

#[tokio::test]
async fn test_invalid_json_on_200_is_decode_error() {
    let mock = MockNutritionix::start().await;
    mock.reply_raw(Endpoint::Search, 200, "<html>not json</html>");

    let client = NutritionixClient::new(&mock.config());
    let error = client.search_food_instant("apple").await.unwrap_err();

    assert!(matches!(error, NutritionixApiError::Decode { .. }));
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let mock = MockNutritionix::start().await;
    // Port 9 on loopback is not served by the mock
    let config = mock.config().with_base_url("http://127.0.0.1:9/v2");
    let client = NutritionixClient::new(&config);

    let error = client.search_food_instant("apple").await.unwrap_err();
    assert!(matches!(error, NutritionixApiError::Transport { .. }));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ExternalServiceUnavailable);
}
