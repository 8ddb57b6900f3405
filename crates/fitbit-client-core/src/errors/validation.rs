// ABOUTME: Structured validation errors raised before any request is sent
// ABOUTME: One variant per rejected rule, carrying the keys involved instead of prose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One URL shape a method accepts and the keys it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVariantRequirement {
    /// Variant name, e.g. `date` or `end-date`
    pub name: String,
    /// Parameter keys that must all be present to select it
    pub required: Vec<String>,
}

/// First rule a request violated
///
/// Validation is fail-fast: exactly one of these is reported per request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Method name is not in the registry
    #[error("unknown API method '{method}'")]
    UnknownMethod {
        /// Method name as supplied (lower-cased)
        method: String,
    },

    /// Required URL parameters are absent
    #[error("{method} is missing URL parameters: {}", .missing.join(", "))]
    MissingUrlParams {
        /// Method name
        method: String,
        /// Exactly the keys that were not supplied
        missing: Vec<String>,
    },

    /// No URL variant had all of its keys supplied
    #[error(
        "{method} requires the parameters of one URL variant: {}",
        format_variants(.variants)
    )]
    AmbiguousOrMissingUrlVariant {
        /// Method name
        method: String,
        /// Every variant in declaration order
        variants: Vec<UrlVariantRequirement>,
    },

    /// Required POST parameters are absent
    #[error("{method} is missing POST parameters: {}", .missing.join(", "))]
    MissingRequiredPostParams {
        /// Method name
        method: String,
        /// Keys that were not supplied
        missing: Vec<String>,
    },

    /// None of the mutually exclusive parameters was supplied
    #[error("{method} requires exactly one of: {}", .expected.join(", "))]
    TooFewExclusiveParams {
        /// Method name
        method: String,
        /// The exclusive set
        expected: Vec<String>,
    },

    /// More than one of the mutually exclusive parameters was supplied
    #[error("{method} accepts only one of: {}", .supplied.join(", "))]
    TooManyExclusiveParams {
        /// Method name
        method: String,
        /// Members of the exclusive set that were supplied
        supplied: Vec<String>,
    },

    /// None of the "at least one" parameters was supplied
    #[error("{method} requires at least one of: {}", .expected.join(", "))]
    MissingOneRequiredParam {
        /// Method name
        method: String,
        /// The candidate set
        expected: Vec<String>,
    },

    /// A parameter was supplied without the parameter it depends on
    #[error("{method}: '{trigger}' requires '{dependency}'")]
    MissingConditionalParam {
        /// Method name
        method: String,
        /// Supplied key that triggers the dependency
        trigger: String,
        /// Key that must accompany it
        dependency: String,
    },

    /// Method needs a user token pair
    #[error("{method} requires an OAuth token and token secret")]
    AuthRequired {
        /// Method name
        method: String,
    },

    /// Method needs a token pair or a `user-id`
    #[error("{method} requires an OAuth token pair or a user-id parameter")]
    AuthOrUserIdRequired {
        /// Method name
        method: String,
    },

    /// Time-series resource path is not in the catalog
    #[error("unknown resource path '{resource_path}'")]
    UnknownResourcePath {
        /// Value supplied for `resource-path`
        resource_path: String,
    },
}

impl ValidationError {
    /// Error code for this kind
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownMethod { .. } => ErrorCode::UnknownMethod,
            Self::MissingUrlParams { .. } => ErrorCode::MissingUrlParams,
            Self::AmbiguousOrMissingUrlVariant { .. } => ErrorCode::AmbiguousOrMissingUrlVariant,
            Self::MissingRequiredPostParams { .. } => ErrorCode::MissingRequiredPostParams,
            Self::TooFewExclusiveParams { .. } => ErrorCode::TooFewExclusiveParams,
            Self::TooManyExclusiveParams { .. } => ErrorCode::TooManyExclusiveParams,
            Self::MissingOneRequiredParam { .. } => ErrorCode::MissingOneRequiredParam,
            Self::MissingConditionalParam { .. } => ErrorCode::MissingConditionalParam,
            Self::AuthRequired { .. } => ErrorCode::AuthRequired,
            Self::AuthOrUserIdRequired { .. } => ErrorCode::AuthOrUserIdRequired,
            Self::UnknownResourcePath { .. } => ErrorCode::UnknownResourcePath,
        }
    }
}

fn format_variants(variants: &[UrlVariantRequirement]) -> String {
    variants
        .iter()
        .map(|v| format!("{} [{}]", v.name, v.required.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
