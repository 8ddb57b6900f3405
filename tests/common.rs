// ABOUTME: Shared test utilities for the Fitbit API client integration tests
// ABOUTME: Quiet logging, parameter and credential builders, and a recording fake executor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitbit_oauth_client`

use async_trait::async_trait;
use fitbit_oauth_client::{
    HttpResponse, OAuthCredentials, RequestDescriptor, RequestParameters, SignedRequestExecutor,
    TransportError,
};
use std::fmt;
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Build parameters from key/value pairs
pub fn params(pairs: &[(&str, &str)]) -> RequestParameters {
    pairs.iter().copied().collect()
}

/// Parameters naming `method` plus `pairs`
pub fn method_params(method: &str, pairs: &[(&str, &str)]) -> RequestParameters {
    let mut params = params(pairs);
    params.insert("api-method", method);
    params
}

/// Consumer credentials without a user token
pub fn consumer_credentials() -> OAuthCredentials {
    OAuthCredentials::new("test-consumer-key", "test-consumer-secret")
}

/// Consumer credentials with a user token pair
pub fn token_credentials() -> OAuthCredentials {
    consumer_credentials().with_token("test-token", "test-token-secret")
}

/// One request the fake executor received
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub request: RequestDescriptor,
    pub credentials: OAuthCredentials,
}

/// Error type the failing executor returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeNetworkError(pub String);

impl fmt::Display for FakeNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fake network error: {}", self.0)
    }
}

impl std::error::Error for FakeNetworkError {}

/// Executor that records every call and answers with a canned result
#[derive(Debug, Clone)]
pub struct RecordingExecutor {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    failure: Option<String>,
    response: HttpResponse,
}

impl RecordingExecutor {
    /// Executor answering 200 with a small JSON body
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            response: HttpResponse {
                status: 200,
                headers: std::collections::BTreeMap::new(),
                body: r#"{"ok":true}"#.to_owned(),
            },
        }
    }

    /// Executor answering with `response`
    pub fn responding(response: HttpResponse) -> Self {
        Self {
            response,
            ..Self::ok()
        }
    }

    /// Executor failing every call with `FakeNetworkError(message)`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::ok()
        }
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignedRequestExecutor for RecordingExecutor {
    async fn execute(
        &self,
        url: &str,
        request: &RequestDescriptor,
        credentials: &OAuthCredentials,
    ) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_owned(),
            request: request.clone(),
            credentials: credentials.clone(),
        });
        match &self.failure {
            Some(message) => Err(TransportError::new(FakeNetworkError(message.clone()))),
            None => Ok(self.response.clone()),
        }
    }
}
