// ABOUTME: Main library entry point for the Fitbit OAuth API client
// ABOUTME: Validates API method parameters against a rule table and builds signed requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbit OAuth API Client
//!
//! An OAuth 1.0a client for the Fitbit resource API. Callers name a logical
//! API method (`api-get-water`, `api-log-activity`, ...) and supply string
//! parameters; the client validates them against a declarative rule table,
//! builds the request, and hands it to a signed-request executor.
//!
//! ## Architecture
//!
//! - **Registry**: static rule table, one entry per API method
//! - **Validation**: fail-fast parameter checks producing structured errors
//! - **Request**: path, format suffix, query, body, and header construction
//! - **Client**: validate, build, then execute through an injected executor
//!
//! Validation and building are pure and synchronous; only the executor
//! touches the network.
//!
//! ## Example Usage
//!
//! ```rust
//! use fitbit_oauth_client::registry::MethodRegistry;
//! use fitbit_oauth_client::{request, validation, RequestParameters};
//!
//! let params = RequestParameters::new()
//!     .with("api-method", "api-get-body-fat")
//!     .with("date", "2024-05-01")
//!     .with("response-format", "json");
//!
//! let rule = MethodRegistry::global().lookup("api-get-body-fat");
//! let variant = validation::validate(rule, &params, true)?;
//! if let Some(rule) = rule {
//!     let descriptor = request::build(rule, &params, variant);
//!     assert_eq!(descriptor.path, "/1/user/-/body/log/fat/date/2024-05-01.json");
//! }
//! # Ok::<(), fitbit_oauth_client::errors::ValidationError>(())
//! ```

// Re-export core modules so call sites can use `crate::errors::*` etc.
pub use fitbit_client_core::constants;
pub use fitbit_client_core::errors;
pub use fitbit_client_core::models;

/// API client orchestrating validation, building, and execution
pub mod client;

/// Environment-based client configuration
pub mod config;

/// Signed-request executor capability and OAuth credentials
pub mod executor;

/// Shared HTTP client and the OAuth 1.0a executor
pub mod http_client;

/// Structured logging setup
pub mod logging;

/// Caller-supplied request parameters and query encoding
pub mod params;

/// Method registry and rule table
pub mod registry;

/// Request builder
pub mod request;

/// Parameter validator
pub mod validation;

pub use client::FitbitClient;
pub use config::ClientConfig;
pub use errors::{ClientError, ClientResult, ErrorCode, TransportError, ValidationError};
pub use executor::{AccessToken, HttpResponse, OAuthCredentials, SignedRequestExecutor};
pub use params::RequestParameters;
pub use registry::{MethodRegistry, MethodRule};
pub use request::RequestDescriptor;
