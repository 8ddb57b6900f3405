// ABOUTME: Request builder turning validated parameters into a concrete HTTP request description
// ABOUTME: Resolves path placeholders, the self-reference segment, format suffix, query, body, and headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::api::{API_VERSION, SELF_USER_MARKER};
use crate::constants::params::{API_METHOD, QUERY, RESPONSE_FORMAT, USER_ID};
use crate::models::{AuthRequirement, HttpVerb, ResponseFormat};
use crate::params::{encode_query, RequestParameters};
use crate::registry::{MethodRule, PathSegment};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Fully specified request, ready for the signed-request executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub verb: HttpVerb,
    /// Path from the API root: version prefix, resource, format suffix, and query string
    pub path: String,
    /// Headers forwarded from the parameters
    pub headers: BTreeMap<String, String>,
    /// Encoded POST body, empty for GET and DELETE
    pub body: String,
}

impl RequestDescriptor {
    /// Join the API base URL and the request path
    #[must_use]
    pub fn absolute_url(&self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path)
    }
}

/// Build the request for already validated parameters
///
/// `variant` must be the value returned by [`crate::validation::validate`]
/// for the same rule and parameters. Identical inputs always produce
/// identical descriptors.
#[must_use]
pub fn build(
    rule: &MethodRule,
    params: &RequestParameters,
    variant: Option<&str>,
) -> RequestDescriptor {
    let substitute_user = rule.auth == AuthRequirement::TokenOrUserId && params.contains(USER_ID);
    let segments = rule.resource_path.segments(variant).unwrap_or_default();

    let mut consumed: BTreeSet<&str> = BTreeSet::from([API_METHOD, RESPONSE_FORMAT]);
    let mut resolved = Vec::with_capacity(segments.len());
    for raw in segments.iter().copied() {
        match PathSegment::parse(raw) {
            PathSegment::Literal(literal) => resolved.push(literal),
            PathSegment::Placeholder(key) => {
                consumed.insert(key);
                resolved.push(params.get(key).unwrap_or_default());
            }
            PathSegment::SelfReference if substitute_user => {
                consumed.insert(USER_ID);
                resolved.push(params.get(USER_ID).unwrap_or(SELF_USER_MARKER));
            }
            PathSegment::SelfReference => resolved.push(SELF_USER_MARKER),
        }
    }

    let format = ResponseFormat::from_param(params.response_format());
    let mut path = format!("/{API_VERSION}/{}.{}", resolved.join("/"), format.extension());

    let headers: BTreeMap<String, String> = rule
        .request_headers
        .iter()
        .filter_map(|name| params.get(name).map(|value| ((*name).to_owned(), value.to_owned())))
        .collect();

    let body = if rule.verb.carries_body() {
        encode_query(params.iter().filter(|(key, _)| {
            !consumed.contains(key) && !rule.request_headers.contains(key)
        }))
    } else {
        if let Some(query) = params.get(QUERY) {
            path.push('?');
            path.push_str(&encode_query([(QUERY, query)]));
        }
        String::new()
    };

    debug!(
        api_method = rule.name,
        verb = %rule.verb,
        path = %path,
        header_count = headers.len(),
        body_length = body.len(),
        "Built API request"
    );

    RequestDescriptor {
        verb: rule.verb,
        path,
        headers,
        body,
    }
}
