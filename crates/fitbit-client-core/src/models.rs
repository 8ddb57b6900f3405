// ABOUTME: Shared request models for the Fitbit API client
// ABOUTME: HTTP verbs, response formats, and per-method authentication requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::formats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verb used by an API method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    /// Read a resource
    Get,
    /// Create or update a resource
    Post,
    /// Remove a resource
    Delete,
}

impl HttpVerb {
    /// Canonical upper-case verb name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the request body rather than the query string
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response format requested through the path suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `.json` suffix
    Json,
    /// `.xml` suffix, used whenever JSON is not explicitly requested
    #[default]
    Xml,
}

impl ResponseFormat {
    /// Resolve the `response-format` parameter; anything but `json` means XML
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case(formats::JSON) => Self::Json,
            _ => Self::Xml,
        }
    }

    /// Path extension without the leading dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => formats::JSON,
            Self::Xml => formats::XML,
        }
    }
}

/// How a method expects the caller to be authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthRequirement {
    /// Public data, consumer credentials only
    None,
    /// A user token pair is mandatory
    TokenRequired,
    /// A token pair, or a `user-id` naming whose public data to read
    TokenOrUserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_from_param() {
        assert_eq!(ResponseFormat::from_param(Some("JSON")), ResponseFormat::Json);
        assert_eq!(ResponseFormat::from_param(Some("json")), ResponseFormat::Json);
        assert_eq!(ResponseFormat::from_param(Some("yaml")), ResponseFormat::Xml);
        assert_eq!(ResponseFormat::from_param(None), ResponseFormat::Xml);
    }

    #[test]
    fn test_verb_display() {
        assert_eq!(HttpVerb::Delete.to_string(), "DELETE");
        assert!(HttpVerb::Post.carries_body());
        assert!(!HttpVerb::Get.carries_body());
    }
}
