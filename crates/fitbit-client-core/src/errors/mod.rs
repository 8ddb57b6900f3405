// ABOUTME: Unified error handling for the Fitbit API client
// ABOUTME: Error codes, the client error wrapper, and re-exports of the domain error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Every failure the client can report is one of two families:
//! - `ValidationError` - the request was rejected locally, no network call was made
//! - `TransportError` - the signed-request executor failed, surfaced unchanged
//!
//! `ClientError` wraps both and `ErrorCode` gives each kind a stable,
//! serializable identifier with an HTTP status for callers that proxy errors.

/// Transport failures reported by the signed-request executor
pub mod transport;
/// Parameter validation failures
pub mod validation;

pub use transport::TransportError;
pub use validation::{UrlVariantRequirement, ValidationError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifiers for every error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Lookup
    UnknownMethod,
    // URL parameters
    MissingUrlParams,
    AmbiguousOrMissingUrlVariant,
    // POST parameters
    MissingRequiredPostParams,
    TooFewExclusiveParams,
    TooManyExclusiveParams,
    MissingOneRequiredParam,
    MissingConditionalParam,
    // Authentication
    AuthRequired,
    AuthOrUserIdRequired,
    // Time series
    UnknownResourcePath,
    // Executor
    TransportError,
}

impl ErrorCode {
    /// HTTP status a proxying service should answer with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::UnknownMethod => 404,
            Self::AuthRequired | Self::AuthOrUserIdRequired => 401,
            Self::TransportError => 502,
            Self::MissingUrlParams
            | Self::AmbiguousOrMissingUrlVariant
            | Self::MissingRequiredPostParams
            | Self::TooFewExclusiveParams
            | Self::TooManyExclusiveParams
            | Self::MissingOneRequiredParam
            | Self::MissingConditionalParam
            | Self::UnknownResourcePath => 400,
        }
    }

    /// Whether the failure happened before any request was sent
    #[must_use]
    pub const fn is_validation(self) -> bool {
        !matches!(self, Self::TransportError)
    }
}

/// Error returned by `FitbitClient::call`
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected before any network activity
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Raised by the signed-request executor
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::Transport(_) => ErrorCode::TransportError,
        }
    }

    /// Borrow the validation error, if this is one
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Transport(_) => None,
        }
    }
}

/// Result alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
