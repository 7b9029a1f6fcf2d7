// ABOUTME: Tests for command-line parsing and credential validation
// ABOUTME: Validates header derivation and startup failures for missing credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use clap::Parser;
use nutritionix_mcp_server::cli::Args;
use nutritionix_mcp_server::config::{NutritionixCredentials, ServerConfig};
use nutritionix_mcp_server::constants::nutritionix::DEFAULT_BASE_URL;
use nutritionix_mcp_server::errors::ErrorCode;

fn args_without_env(argv: &[&str]) -> Args {
    let mut args = Args::try_parse_from(argv).unwrap();
    // Values inherited from the developer's environment would mask missing flags
    if !argv.contains(&"--app-id") {
        args.app_id = None;
    }
    if !argv.contains(&"--app-key") {
        args.app_key = None;
    }
    args
}

#[test]
fn test_auth_headers_contain_exactly_two_keys() {
    for (id, key) in [("abc", "def"), ("1234567890", "k-e-y_0"), ("x", "y")] {
        let creds = NutritionixCredentials::new(id, key).unwrap();
        let headers = creds.auth_headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers["x-app-id"], id);
        assert_eq!(headers["x-app-key"], key);
    }
}

#[test]
fn test_json_headers_add_content_type() {
    let creds = NutritionixCredentials::new("id", "key").unwrap();
    let headers = creds.json_headers();

    assert_eq!(headers.len(), 3);
    assert_eq!(headers["content-type"], "application/json");
}

#[test]
fn test_empty_or_blank_credentials_fail() {
    let missing_id = NutritionixCredentials::new("  ", "key").unwrap_err();
    assert_eq!(missing_id.code, ErrorCode::ConfigMissing);
    assert!(missing_id.message.contains("--app-id"));
    assert!(!missing_id.message.contains("--app-key"));

    let missing_key = NutritionixCredentials::new("id", "").unwrap_err();
    assert!(missing_key.message.contains("--app-key"));

    let missing_both = NutritionixCredentials::new("", "").unwrap_err();
    assert!(missing_both.message.contains("--app-id"));
    assert!(missing_both.message.contains("--app-key"));
}

#[test]
fn test_credentials_with_control_characters_are_invalid() {
    let error = NutritionixCredentials::new("id", "bad\nkey").unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_cli_builds_config() {
    let args = Args::try_parse_from([
        "nutritionix-mcp-server",
        "--app-id",
        "my-id",
        "--app-key",
        "my-key",
        "--base-url",
        "http://127.0.0.1:8080/v2/",
    ])
    .unwrap();

    let config = ServerConfig::from_args(args).unwrap();
    assert_eq!(config.credentials.app_id(), "my-id");
    assert_eq!(config.credentials.app_key(), "my-key");
    assert_eq!(config.base_url, "http://127.0.0.1:8080/v2");
}

#[test]
fn test_cli_missing_key_fails_config() {
    let args = args_without_env(&["nutritionix-mcp-server", "--app-id", "my-id"]);

    let error = ServerConfig::from_args(args).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert_eq!(error.message, "The --app-key arg was not provided");
}

#[test]
fn test_cli_missing_both_fails_config() {
    let args = args_without_env(&["nutritionix-mcp-server"]);

    let error = ServerConfig::from_args(args).unwrap_err();
    assert_eq!(error.message, "The --app-id and --app-key args were not provided");
}

#[test]
fn test_default_base_url() {
    let creds = NutritionixCredentials::new("id", "key").unwrap();
    assert_eq!(ServerConfig::new(creds).base_url, DEFAULT_BASE_URL);
}
