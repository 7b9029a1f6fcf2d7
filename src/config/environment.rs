// ABOUTME: Credential and server configuration built once from command-line arguments
// ABOUTME: Validates Nutritionix app id/key and derives the authentication headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server configuration and Nutritionix credentials.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::cli::Args;
use crate::constants::nutritionix::{APP_ID_HEADER, APP_KEY_HEADER, DEFAULT_BASE_URL};
use crate::errors::{AppError, AppResult};

/// Nutritionix application credentials.
///
/// Both values are validated on construction and never change afterwards.
#[derive(Clone)]
pub struct NutritionixCredentials {
    app_id: String,
    app_key: String,
    app_id_header: HeaderValue,
    app_key_header: HeaderValue,
}

impl NutritionixCredentials {
    /// Validate and build a credential pair
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` naming the absent flag(s) when either value is
    /// empty, or `ConfigInvalid` when a value cannot be sent as an HTTP header
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> AppResult<Self> {
        let app_id = app_id.into().trim().to_owned();
        let app_key = app_key.into().trim().to_owned();

        match (app_id.is_empty(), app_key.is_empty()) {
            (true, true) => {
                return Err(AppError::config_missing(
                    "The --app-id and --app-key args were not provided",
                ))
            }
            (true, false) => {
                return Err(AppError::config_missing("The --app-id arg was not provided"))
            }
            (false, true) => {
                return Err(AppError::config_missing("The --app-key arg was not provided"))
            }
            (false, false) => {}
        }

        let app_id_header = HeaderValue::from_str(&app_id).map_err(|e| {
            AppError::config_invalid(format!("--app-id is not a valid header value: {e}"))
        })?;
        let mut app_key_header = HeaderValue::from_str(&app_key).map_err(|e| {
            AppError::config_invalid(format!("--app-key is not a valid header value: {e}"))
        })?;
        app_key_header.set_sensitive(true);

        Ok(Self {
            app_id,
            app_key,
            app_id_header,
            app_key_header,
        })
    }

    /// Application id
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Application key
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Authentication headers sent with every Nutritionix request.
    ///
    /// Contains exactly `x-app-id` and `x-app-key`.
    #[must_use]
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            HeaderName::from_static(APP_ID_HEADER),
            self.app_id_header.clone(),
        );
        headers.insert(
            HeaderName::from_static(APP_KEY_HEADER),
            self.app_key_header.clone(),
        );
        headers
    }

    /// Authentication headers plus `Content-Type: application/json` for POST bodies
    #[must_use]
    pub fn json_headers(&self) -> HeaderMap {
        let mut headers = self.auth_headers();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

impl fmt::Debug for NutritionixCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionixCredentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"[REDACTED]")
            .finish()
    }
}

/// Immutable server configuration shared by every tool call
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Nutritionix credentials
    pub credentials: NutritionixCredentials,
    /// Base URL of the Nutritionix v2 API (no trailing slash)
    pub base_url: String,
}

impl ServerConfig {
    /// Configuration pointing at the production Nutritionix API
    #[must_use]
    pub fn new(credentials: NutritionixCredentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Override the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Build configuration from parsed command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are missing or invalid, or the
    /// base URL is empty
    pub fn from_args(args: Args) -> AppResult<Self> {
        let credentials = NutritionixCredentials::new(
            args.app_id.unwrap_or_default(),
            args.app_key.unwrap_or_default(),
        )?;

        if args.base_url.trim().is_empty() {
            return Err(AppError::config_invalid("--base-url must not be empty"));
        }

        Ok(Self::new(credentials).with_base_url(args.base_url.trim()))
    }

    /// One-line description for startup logs (never includes the key)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutritionix API: {} (app id: {})",
            self.base_url,
            self.credentials.app_id()
        )
    }
}
