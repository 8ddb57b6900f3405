// ABOUTME: Shared HTTP client with connection pooling and the OAuth 1.0a executor built on it
// ABOUTME: Singleton pattern with configurable timeouts initialized at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::timeouts::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

#[cfg(feature = "oauth1-executor")]
pub use oauth1::OAuth1Executor;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before the first request. If not called,
/// the defaults are used (30s timeout, 10s connect timeout). Returns `false`
/// when the call has no effect: timeouts were already set, or the shared
/// client was built before this call.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) -> bool {
    if SHARED_CLIENT.get().is_some() {
        warn!(
            timeout_secs,
            connect_timeout_secs, "Shared HTTP client already built, ignoring timeout configuration"
        );
        return false;
    }
    if CLIENT_TIMEOUTS.set((timeout_secs, connect_timeout_secs)).is_err() {
        warn!(
            timeout_secs,
            connect_timeout_secs, "Shared HTTP client timeouts already configured, ignoring"
        );
        return false;
    }
    true
}

/// Timeouts the shared client is (or will be) built with, `(timeout, connect_timeout)` in seconds
#[must_use]
pub fn configured_timeouts() -> (u64, u64) {
    CLIENT_TIMEOUTS
        .get()
        .copied()
        .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS))
}

/// Get the shared HTTP client
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = configured_timeouts();

        ClientBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

#[cfg(feature = "oauth1-executor")]
mod oauth1 {
    use super::shared_client;
    use crate::config::ClientConfig;
    use crate::errors::TransportError;
    use crate::executor::{HttpResponse, OAuthCredentials, SignedRequestExecutor};
    use crate::models::HttpVerb;
    use crate::request::RequestDescriptor;
    use async_trait::async_trait;
    use reqwest::Client;
    use reqwest_oauth1::{OAuthClientProvider, Secrets};
    use std::collections::BTreeMap;
    use tracing::{debug, error};

    /// Executor signing requests with OAuth 1.0a (HMAC-SHA1) via `reqwest-oauth1`
    #[derive(Debug, Clone)]
    pub struct OAuth1Executor {
        client: Client,
    }

    impl OAuth1Executor {
        /// Executor on the shared HTTP client
        #[must_use]
        pub fn new() -> Self {
            Self {
                client: shared_client().clone(),
            }
        }

        /// Executor on the shared HTTP client, applying the configured timeouts first
        #[must_use]
        pub fn from_config(config: &ClientConfig) -> Self {
            config.apply_http_settings();
            Self::new()
        }

        /// Executor on a caller-provided client
        #[must_use]
        pub const fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    impl Default for OAuth1Executor {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SignedRequestExecutor for OAuth1Executor {
        async fn execute(
            &self,
            url: &str,
            request: &RequestDescriptor,
            credentials: &OAuthCredentials,
        ) -> Result<HttpResponse, TransportError> {
            let mut secrets = Secrets::new(
                credentials.consumer_key.as_str(),
                credentials.consumer_secret.as_str(),
            );
            if let Some(token) = &credentials.token {
                secrets = secrets.token(token.token.as_str(), token.secret.as_str());
            }

            let client = self.client.clone().oauth1(secrets);
            let mut builder = match request.verb {
                HttpVerb::Get => client.get(url),
                HttpVerb::Post => client.post(url),
                HttpVerb::Delete => client.delete(url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if request.verb.carries_body() {
                // Form pairs take part in the signature base string
                let pairs: Vec<(String, String)> =
                    serde_urlencoded::from_str(&request.body).map_err(TransportError::new)?;
                builder = builder.form(&pairs);
            }

            debug!("Sending signed {} request to {url}", request.verb);
            let response = builder.send().await.map_err(|e| {
                error!("Signed request to {url} failed: {e}");
                TransportError::new(e)
            })?;

            let status = response.status().as_u16();
            let headers: BTreeMap<String, String> = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_owned(), v.to_owned()))
                })
                .collect();
            let body = response.text().await.map_err(TransportError::new)?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
