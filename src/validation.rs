// ABOUTME: Parameter validator checking caller parameters against a method's rules
// ABOUTME: Fail-fast checks for URL variants, POST clauses, authentication, and resource paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parameter Validation
//!
//! Checks run in a fixed order and the first violation is reported:
//!
//! 1. the method exists
//! 2. URL parameters (flat set, or the first fully supplied variant)
//! 3. POST clauses: `required`, `exclusive`, `one_required`, `required_if`
//! 4. authentication
//! 5. the time-series resource path, for methods whose path embeds it
//!
//! Validation is a pure function of its inputs and is safe to call from any
//! number of threads.

use crate::constants::is_known_resource_path;
use crate::constants::params::{RESOURCE_PATH, USER_ID};
use crate::errors::{UrlVariantRequirement, ValidationError};
use crate::models::{AuthRequirement, HttpVerb};
use crate::params::RequestParameters;
use crate::registry::{MethodRule, PostParameterSpec, UrlParameterSpec};
use tracing::{debug, warn};

/// Validate `params` against `rule`
///
/// `rule` is `None` when the registry did not know the method named by the
/// `api-method` parameter. On success returns the selected URL variant, or
/// `None` for methods with a single URL shape.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(
    rule: Option<&MethodRule>,
    params: &RequestParameters,
    has_auth_token: bool,
) -> Result<Option<&'static str>, ValidationError> {
    let result = run_checks(rule, params, has_auth_token);
    if let Err(err) = &result {
        warn!(
            api_method = params.api_method().unwrap_or_default(),
            code = ?err.code(),
            "Request rejected: {err}"
        );
    }
    result
}

fn run_checks(
    rule: Option<&MethodRule>,
    params: &RequestParameters,
    has_auth_token: bool,
) -> Result<Option<&'static str>, ValidationError> {
    let Some(rule) = rule else {
        return Err(ValidationError::UnknownMethod {
            method: params.api_method().unwrap_or_default().to_owned(),
        });
    };

    let variant = select_url_variant(rule, params)?;

    if rule.verb == HttpVerb::Post {
        if let Some(spec) = &rule.post_params {
            check_post_params(rule.name, spec, params)?;
        }
    }

    check_auth(rule, params, has_auth_token)?;
    check_resource_path(rule, params)?;

    Ok(variant)
}

/// Resolve which URL shape the parameters describe
///
/// Variants are tried in declaration order and the first one whose keys are
/// all present wins, even when a later variant is also satisfied.
///
/// # Errors
///
/// `MissingUrlParams` for flat specs, `AmbiguousOrMissingUrlVariant` when no
/// variant is fully supplied.
pub fn select_url_variant(
    rule: &MethodRule,
    params: &RequestParameters,
) -> Result<Option<&'static str>, ValidationError> {
    match rule.url_params {
        UrlParameterSpec::Flat(required) => {
            let missing = missing_keys(required, params);
            if missing.is_empty() {
                Ok(None)
            } else {
                Err(ValidationError::MissingUrlParams {
                    method: rule.name.to_owned(),
                    missing,
                })
            }
        }
        UrlParameterSpec::Variants(variants) => {
            let selected = variants
                .iter()
                .find(|(_, required)| required.iter().all(|key| params.contains(key)));

            if let Some((name, _)) = selected {
                debug!(api_method = rule.name, variant = name, "Selected URL variant");
                return Ok(Some(*name));
            }

            Err(ValidationError::AmbiguousOrMissingUrlVariant {
                method: rule.name.to_owned(),
                variants: variants
                    .iter()
                    .map(|(name, required)| UrlVariantRequirement {
                        name: (*name).to_owned(),
                        required: to_owned_keys(required.iter().copied()),
                    })
                    .collect(),
            })
        }
    }
}

fn check_post_params(
    method: &str,
    spec: &PostParameterSpec,
    params: &RequestParameters,
) -> Result<(), ValidationError> {
    let missing = missing_keys(spec.required, params);
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequiredPostParams {
            method: method.to_owned(),
            missing,
        });
    }

    if !spec.exclusive.is_empty() {
        let supplied = present_keys(spec.exclusive, params);
        if supplied.is_empty() {
            return Err(ValidationError::TooFewExclusiveParams {
                method: method.to_owned(),
                expected: to_owned_keys(spec.exclusive.iter().copied()),
            });
        }
        if supplied.len() > 1 {
            return Err(ValidationError::TooManyExclusiveParams {
                method: method.to_owned(),
                supplied,
            });
        }
    }

    if !spec.one_required.is_empty() && present_keys(spec.one_required, params).is_empty() {
        return Err(ValidationError::MissingOneRequiredParam {
            method: method.to_owned(),
            expected: to_owned_keys(spec.one_required.iter().copied()),
        });
    }

    for (trigger, dependency) in spec.required_if {
        if params.contains(trigger) && !params.contains(dependency) {
            return Err(ValidationError::MissingConditionalParam {
                method: method.to_owned(),
                trigger: (*trigger).to_owned(),
                dependency: (*dependency).to_owned(),
            });
        }
    }

    Ok(())
}

fn check_auth(
    rule: &MethodRule,
    params: &RequestParameters,
    has_auth_token: bool,
) -> Result<(), ValidationError> {
    match rule.auth {
        AuthRequirement::None => Ok(()),
        AuthRequirement::TokenRequired if has_auth_token => Ok(()),
        AuthRequirement::TokenRequired => Err(ValidationError::AuthRequired {
            method: rule.name.to_owned(),
        }),
        AuthRequirement::TokenOrUserId if has_auth_token || params.contains(USER_ID) => Ok(()),
        AuthRequirement::TokenOrUserId => Err(ValidationError::AuthOrUserIdRequired {
            method: rule.name.to_owned(),
        }),
    }
}

fn check_resource_path(rule: &MethodRule, params: &RequestParameters) -> Result<(), ValidationError> {
    if !rule.resource_path.has_placeholder(RESOURCE_PATH) {
        return Ok(());
    }
    // URL validation already guaranteed presence for every shape embedding it
    let value = params.get(RESOURCE_PATH).unwrap_or_default();
    if is_known_resource_path(value) {
        Ok(())
    } else {
        Err(ValidationError::UnknownResourcePath {
            resource_path: value.to_owned(),
        })
    }
}

fn missing_keys(keys: &[&str], params: &RequestParameters) -> Vec<String> {
    to_owned_keys(keys.iter().copied().filter(|key| !params.contains(key)))
}

fn present_keys(keys: &[&str], params: &RequestParameters) -> Vec<String> {
    to_owned_keys(keys.iter().copied().filter(|key| params.contains(key)))
}

fn to_owned_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    keys.map(str::to_owned).collect()
}
