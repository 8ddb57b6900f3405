// ABOUTME: Signed-request executor capability and the OAuth 1.0a credentials it signs with
// ABOUTME: Narrow async contract the client hands each built request to, plus the raw HTTP response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Signed-Request Executor
//!
//! The client never signs or sends requests itself. It hands a
//! [`RequestDescriptor`] and the caller's [`OAuthCredentials`] to a
//! [`SignedRequestExecutor`], which owns signing, transport, timeouts, and
//! any retry policy. Tests inject a fake executor; production code uses
//! `http_client::OAuth1Executor` (feature `oauth1-executor`).

use crate::config::ClientConfig;
use crate::errors::TransportError;
use crate::request::RequestDescriptor;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// User access token pair obtained through the OAuth handshake
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// OAuth token
    pub token: String,
    /// OAuth token secret
    pub secret: String,
}

impl AccessToken {
    /// Create a token pair
    pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &self.token)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// OAuth 1.0a consumer credentials and optional user token pair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthCredentials {
    /// Application consumer key
    pub consumer_key: String,
    /// Application consumer secret
    pub consumer_secret: String,
    /// User token pair, absent for public or `user-id` requests
    pub token: Option<AccessToken>,
}

impl OAuthCredentials {
    /// Consumer-only credentials
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: None,
        }
    }

    /// Consumer credentials from configuration; missing values become empty strings
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.consumer_key.clone().unwrap_or_default(),
            config.consumer_secret.clone().unwrap_or_default(),
        )
    }

    /// Attach a user token pair
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, secret: impl Into<String>) -> Self {
        self.token = Some(AccessToken::new(token, secret));
        self
    }

    /// Whether a full token pair is present
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|t| !t.token.is_empty() && !t.secret.is_empty())
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("token", &self.token)
            .finish()
    }
}

/// Raw HTTP response returned by the executor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response headers
    pub headers: BTreeMap<String, String>,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Capability that signs and sends a built request
#[async_trait]
pub trait SignedRequestExecutor: Send + Sync {
    /// Sign `request` with `credentials` and send it to `url`
    ///
    /// # Errors
    ///
    /// Any failure to sign, send, or read the response. The client returns it
    /// to the caller unchanged.
    async fn execute(
        &self,
        url: &str,
        request: &RequestDescriptor,
        credentials: &OAuthCredentials,
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: SignedRequestExecutor + ?Sized> SignedRequestExecutor for Arc<T> {
    async fn execute(
        &self,
        url: &str,
        request: &RequestDescriptor,
        credentials: &OAuthCredentials,
    ) -> Result<HttpResponse, TransportError> {
        (**self).execute(url, request, credentials).await
    }
}
