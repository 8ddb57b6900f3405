// ABOUTME: Fitbit API client orchestrating validation, request building, and signed execution
// ABOUTME: Rejects invalid calls before any network activity and surfaces executor errors unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ClientConfig;
use crate::constants::api::DEFAULT_API_BASE;
use crate::constants::params::API_METHOD;
use crate::errors::{ClientResult, ValidationError};
use crate::executor::{HttpResponse, OAuthCredentials, SignedRequestExecutor};
use crate::params::RequestParameters;
use crate::registry::MethodRegistry;
use crate::request::{self, RequestDescriptor};
use crate::validation;
use tracing::{error, info, instrument};

/// OAuth-authenticated Fitbit API client
///
/// Holds no per-call state; one client can serve any number of concurrent
/// calls.
pub struct FitbitClient<E> {
    registry: &'static MethodRegistry,
    executor: E,
    api_base_url: String,
}

impl<E: SignedRequestExecutor> FitbitClient<E> {
    /// Client on the process-wide registry and the default API host
    pub fn new(executor: E) -> Self {
        Self::with_registry(MethodRegistry::global(), executor)
    }

    /// Client on a specific registry
    pub fn with_registry(registry: &'static MethodRegistry, executor: E) -> Self {
        Self {
            registry,
            executor,
            api_base_url: DEFAULT_API_BASE.to_owned(),
        }
    }

    /// Client configured from [`ClientConfig`]
    ///
    /// Also applies the configured timeouts to the shared HTTP client.
    pub fn from_config(config: &ClientConfig, executor: E) -> Self {
        config.apply_http_settings();
        Self::new(executor).with_api_base(&config.api_base_url)
    }

    /// Override the API host
    #[must_use]
    pub fn with_api_base(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// API host requests are sent to
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Registry this client resolves methods against
    #[must_use]
    pub const fn registry(&self) -> &'static MethodRegistry {
        self.registry
    }

    /// Validate and build a request without sending it
    ///
    /// `params` gets `api-method` set to `method` (lower-cased).
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] the parameters violate.
    pub fn prepare(
        &self,
        method: &str,
        mut params: RequestParameters,
        has_auth_token: bool,
    ) -> Result<RequestDescriptor, ValidationError> {
        params.insert(API_METHOD, method);
        let rule = self.registry.lookup(method);
        let variant = validation::validate(rule, &params, has_auth_token)?;
        // validate() only succeeds for a known rule
        let Some(rule) = rule else {
            return Err(ValidationError::UnknownMethod {
                method: method.to_lowercase(),
            });
        };
        Ok(request::build(rule, &params, variant))
    }

    /// Call an API method
    ///
    /// # Errors
    ///
    /// `ClientError::Validation` when the call is rejected locally (no request
    /// is sent), `ClientError::Transport` with the executor's error otherwise.
    #[instrument(skip(self, params, credentials), fields(api_method = %method.to_lowercase()))]
    pub async fn call(
        &self,
        method: &str,
        params: RequestParameters,
        credentials: &OAuthCredentials,
    ) -> ClientResult<HttpResponse> {
        let descriptor = self.prepare(method, params, credentials.has_token())?;
        let url = descriptor.absolute_url(&self.api_base_url);

        info!(verb = %descriptor.verb, path = %descriptor.path, "Calling Fitbit API");

        let response = self
            .executor
            .execute(&url, &descriptor, credentials)
            .await
            .inspect_err(|e| error!("Fitbit API transport failure: {e}"))?;

        info!(status = response.status, "Fitbit API responded");
        Ok(response)
    }
}
