// ABOUTME: Caller-supplied request parameters and RFC 3986 query encoding
// ABOUTME: Ordered string mapping that normalizes the api-method and response-format values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::params::{API_METHOD, RESPONSE_FORMAT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters for one API call
///
/// Keys are case-sensitive. Values stored under `api-method` and
/// `response-format` are lower-cased on insert. Iteration is ordered by key,
/// which keeps encoded bodies stable across builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct RequestParameters {
    values: BTreeMap<String, String>,
}

impl RequestParameters {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let mut value = value.into();
        if is_normalized_key(&key) {
            value = value.to_lowercase();
        }
        self.values.insert(key, value)
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether `key` was supplied
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Normalized API method name, if supplied
    #[must_use]
    pub fn api_method(&self) -> Option<&str> {
        self.get(API_METHOD)
    }

    /// Normalized response format, if supplied
    #[must_use]
    pub fn response_format(&self) -> Option<&str> {
        self.get(RESPONSE_FORMAT)
    }

    /// Parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn is_normalized_key(key: &str) -> bool {
    key == API_METHOD || key == RESPONSE_FORMAT
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl From<BTreeMap<String, String>> for RequestParameters {
    fn from(values: BTreeMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<RequestParameters> for BTreeMap<String, String> {
    fn from(params: RequestParameters) -> Self {
        params.values
    }
}

/// Encode pairs as `key=value&...`, percent-encoding per RFC 3986 and sorting by key
pub fn encode_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut encoded: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(k, v)| (urlencoding::encode(k).into_owned(), urlencoding::encode(v).into_owned()))
        .collect();
    encoded.sort();
    encoded
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_method_and_format_values() {
        let params = RequestParameters::new()
            .with("api-method", "API-Get-Water")
            .with("response-format", "JSON")
            .with("date", "Today");
        assert_eq!(params.api_method(), Some("api-get-water"));
        assert_eq!(params.response_format(), Some("json"));
        assert_eq!(params.get("date"), Some("Today"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let params = RequestParameters::new().with("activityId", "90009");
        assert!(params.contains("activityId"));
        assert!(!params.contains("activityid"));
    }

    #[test]
    fn test_encode_query_sorts_and_escapes() {
        let encoded = encode_query([("name", "Banana Bread"), ("calories", "250"), ("a~b", "x/y")]);
        assert_eq!(encoded, "a~b=x%2Fy&calories=250&name=Banana%20Bread");
    }

    #[test]
    fn test_encode_query_empty() {
        assert_eq!(encode_query(std::iter::empty()), "");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let params: RequestParameters =
            serde_json::from_str(r#"{"api-method":"API-GET-BADGES","user-id":"ABC1234"}"#).unwrap();
        assert_eq!(params.api_method(), Some("api-get-badges"));
        assert_eq!(params.get("user-id"), Some("ABC1234"));
    }
}
