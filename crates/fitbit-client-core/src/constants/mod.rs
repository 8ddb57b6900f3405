// ABOUTME: Constants module with domain-separated organization
// ABOUTME: API host, reserved parameter keys, forwarded headers, and the time-series catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants for the Fitbit API client, grouped by domain.

/// Time-series resource paths accepted by the API
pub mod resource_paths;

pub use resource_paths::{is_known_resource_path, RESOURCE_PATHS};

/// Fitbit API endpoint constants
pub mod api {
    /// Default API host all resource paths are relative to
    pub const DEFAULT_API_BASE: &str = "https://api.fitbit.com";
    /// API version prefix segment
    pub const API_VERSION: &str = "1";
    /// Path segment standing for the authenticated user
    pub const SELF_USER_MARKER: &str = "-";
}

/// Reserved request parameter keys
pub mod params {
    /// Logical API method name
    pub const API_METHOD: &str = "api-method";
    /// Requested response format (`json` or `xml`)
    pub const RESPONSE_FORMAT: &str = "response-format";
    /// Encoded Fitbit user id substituting for the authenticated user
    pub const USER_ID: &str = "user-id";
    /// Time-series resource path
    pub const RESOURCE_PATH: &str = "resource-path";
    /// Free-text query forwarded on GET and DELETE requests
    pub const QUERY: &str = "query";
}

/// HTTP headers a method may forward from its parameters
pub mod headers {
    /// Unit system for returned measurements
    pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
    /// Locale for food and activity names
    pub const ACCEPT_LOCALE: &str = "Accept-Locale";
    /// Subscriber endpoint selection for subscriptions
    pub const SUBSCRIBER_ID: &str = "X-Fitbit-Subscriber-Id";
}

/// Response format suffixes
pub mod formats {
    /// JSON response format name
    pub const JSON: &str = "json";
    /// XML response format name
    pub const XML: &str = "xml";
}

/// Environment variable names read by the client configuration
pub mod env_config {
    /// OAuth consumer key
    pub const CONSUMER_KEY: &str = "FITBIT_CONSUMER_KEY";
    /// OAuth consumer secret
    pub const CONSUMER_SECRET: &str = "FITBIT_CONSUMER_SECRET";
    /// API base URL override
    pub const API_BASE: &str = "FITBIT_API_BASE";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FITBIT_HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FITBIT_HTTP_CONNECT_TIMEOUT_SECS";
}

/// Network defaults
pub mod timeouts {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}
