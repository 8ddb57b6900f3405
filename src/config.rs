// ABOUTME: Client configuration loaded from environment variables
// ABOUTME: Consumer credentials, API base URL, and HTTP timeouts with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::api::DEFAULT_API_BASE;
use crate::constants::env_config;
use crate::constants::timeouts::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::http_client;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Fitbit API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// OAuth consumer key
    pub consumer_key: Option<String>,
    /// OAuth consumer secret
    #[serde(skip_serializing)]
    pub consumer_secret: Option<String>,
    /// API base URL, without the version prefix
    pub api_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            consumer_key: None,
            consumer_secret: None,
            api_base_url: DEFAULT_API_BASE.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            consumer_key: env::var(env_config::CONSUMER_KEY).ok(),
            consumer_secret: env::var(env_config::CONSUMER_SECRET).ok(),
            api_base_url: env_var_or(env_config::API_BASE, DEFAULT_API_BASE),
            timeout_secs: parse_secs(env_config::HTTP_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: parse_secs(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }

    /// Hand the HTTP timeouts to the shared client
    ///
    /// Has no effect once the shared client exists or timeouts were already
    /// applied; a warning is logged in that case.
    pub fn apply_http_settings(&self) -> bool {
        http_client::initialize_shared_client(self.timeout_secs, self.connect_timeout_secs)
    }

    /// Whether both consumer credentials are configured
    #[must_use]
    pub fn has_consumer_credentials(&self) -> bool {
        self.consumer_key.is_some() && self.consumer_secret.is_some()
    }
}

fn parse_secs(key: &str, default: u64) -> u64 {
    env::var(key).map_or(default, |raw| parse_secs_value(key, &raw, default))
}

fn parse_secs_value(key: &str, raw: &str, default: u64) -> u64 {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Invalid value '{raw}' for {key}, using default {default}");
        default
    })
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
