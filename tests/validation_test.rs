// ABOUTME: Tests for the parameter validator's fail-fast rule checks
// ABOUTME: Covers URL variants, POST clauses, authentication fallback, and resource-path validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::method_params;
use fitbit_oauth_client::errors::{ErrorCode, UrlVariantRequirement, ValidationError};
use fitbit_oauth_client::registry::{MethodRegistry, UrlParameterSpec};
use fitbit_oauth_client::validation::validate;

fn check(
    method: &str,
    pairs: &[(&str, &str)],
    has_token: bool,
) -> Result<Option<&'static str>, ValidationError> {
    common::init_test_logging();
    let params = method_params(method, pairs);
    validate(MethodRegistry::global().lookup(method), &params, has_token)
}

fn activity_base() -> Vec<(&'static str, &'static str)> {
    vec![
        ("startTime", "12:20"),
        ("durationMillis", "600000"),
        ("date", "2024-05-01"),
    ]
}

#[test]
fn test_unknown_method() {
    let err = check("api-get-everything", &[], true).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownMethod {
            method: "api-get-everything".to_owned()
        }
    );
    assert_eq!(err.code(), ErrorCode::UnknownMethod);
}

#[test]
fn test_flat_url_params_report_exactly_the_missing_keys() {
    for rule in MethodRegistry::global().rules() {
        let UrlParameterSpec::Flat(keys) = rule.url_params else {
            continue;
        };
        for omitted in keys {
            let pairs: Vec<(&str, &str)> = keys
                .iter()
                .filter(|key| *key != omitted)
                .map(|key| (*key, "x"))
                .collect();
            let err = check(rule.name, &pairs, true).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingUrlParams {
                    method: rule.name.to_owned(),
                    missing: vec![(*omitted).to_owned()],
                },
                "{}",
                rule.name
            );
        }
    }
}

#[test]
fn test_missing_url_params_lists_all_absent_keys() {
    let err = check("api-devices-delete-alarm", &[], true).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingUrlParams {
            method: "api-devices-delete-alarm".to_owned(),
            missing: vec!["device-id".to_owned(), "alarm-id".to_owned()],
        }
    );
}

#[test]
fn test_variant_selection() {
    assert_eq!(
        check("api-get-body-fat", &[("date", "2024-05-01")], true).unwrap(),
        Some("date")
    );
    assert_eq!(
        check(
            "api-get-body-fat",
            &[("base-date", "2024-05-01"), ("end-date", "2024-05-31")],
            true
        )
        .unwrap(),
        Some("end-date")
    );
    assert_eq!(
        check(
            "api-get-body-fat",
            &[("base-date", "2024-05-01"), ("period", "7d")],
            true
        )
        .unwrap(),
        Some("period")
    );
}

#[test]
fn test_variant_ties_resolve_in_declaration_order() {
    let selected = check(
        "api-get-body-weight",
        &[
            ("date", "2024-05-01"),
            ("base-date", "2024-05-01"),
            ("end-date", "2024-05-31"),
            ("period", "1m"),
        ],
        true,
    )
    .unwrap();
    assert_eq!(selected, Some("date"));

    let selected = check(
        "api-get-body-weight",
        &[
            ("base-date", "2024-05-01"),
            ("end-date", "2024-05-31"),
            ("period", "1m"),
        ],
        true,
    )
    .unwrap();
    assert_eq!(selected, Some("end-date"));
}

#[test]
fn test_no_variant_satisfied_lists_every_variant() {
    let err = check("api-get-body-fat", &[("base-date", "2024-05-01")], true).unwrap_err();
    let ValidationError::AmbiguousOrMissingUrlVariant { method, variants } = err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(method, "api-get-body-fat");
    assert_eq!(variants.len(), 3);
    assert_eq!(
        variants[1],
        UrlVariantRequirement {
            name: "end-date".to_owned(),
            required: vec!["base-date".to_owned(), "end-date".to_owned()],
        }
    );
}

#[test]
fn test_flat_methods_select_no_variant() {
    assert_eq!(
        check("api-get-water", &[("date", "2024-05-01")], true).unwrap(),
        None
    );
}

#[test]
fn test_missing_required_post_params() {
    let err = check("api-log-activity", &[("activityId", "90009")], true).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRequiredPostParams {
            method: "api-log-activity".to_owned(),
            missing: vec![
                "startTime".to_owned(),
                "durationMillis".to_owned(),
                "date".to_owned()
            ],
        }
    );
}

#[test]
fn test_exclusive_clause() {
    let mut both = activity_base();
    both.extend([("activityId", "90009"), ("activityName", "Rowing")]);
    let err = check("api-log-activity", &both, true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooManyExclusiveParams);
    assert_eq!(
        err,
        ValidationError::TooManyExclusiveParams {
            method: "api-log-activity".to_owned(),
            supplied: vec!["activityId".to_owned(), "activityName".to_owned()],
        }
    );

    let err = check("api-log-activity", &activity_base(), true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooFewExclusiveParams);

    let mut one = activity_base();
    one.push(("activityId", "90009"));
    assert_eq!(check("api-log-activity", &one, true).unwrap(), None);
}

#[test]
fn test_required_if_clause() {
    let mut named = activity_base();
    named.push(("activityName", "Rowing"));
    let err = check("api-log-activity", &named, true).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingConditionalParam {
            method: "api-log-activity".to_owned(),
            trigger: "activityName".to_owned(),
            dependency: "manualCalories".to_owned(),
        }
    );

    named.push(("manualCalories", "300"));
    assert!(check("api-log-activity", &named, true).is_ok());
}

#[test]
fn test_one_required_clause() {
    let err = check("api-log-body-measurements", &[("date", "2024-05-01")], true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingOneRequiredParam);

    assert!(check(
        "api-log-body-measurements",
        &[("date", "2024-05-01"), ("waist", "80")],
        true
    )
    .is_ok());
}

#[test]
fn test_post_clauses_checked_in_order() {
    // exclusive is violated too, but required is reported first
    let err = check("api-log-food", &[("foodId", "1"), ("foodName", "Pie")], true).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingRequiredPostParams);
}

#[test]
fn test_token_required() {
    let err = check("api-get-water", &[("date", "2024-05-01")], false).unwrap_err();
    assert_eq!(
        err,
        ValidationError::AuthRequired {
            method: "api-get-water".to_owned()
        }
    );

    // user-id does not stand in for a token on token-only methods
    let err = check(
        "api-get-water",
        &[("date", "2024-05-01"), ("user-id", "ABC1234")],
        false,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AuthRequired);
}

#[test]
fn test_token_or_user_id() {
    let err = check("api-get-badges", &[], false).unwrap_err();
    assert_eq!(
        err,
        ValidationError::AuthOrUserIdRequired {
            method: "api-get-badges".to_owned()
        }
    );

    assert!(check("api-get-badges", &[("user-id", "ABC1234")], false).is_ok());
    assert!(check("api-get-badges", &[], true).is_ok());
}

#[test]
fn test_public_methods_need_no_token() {
    assert!(check("api-search-foods", &[("query", "banana")], false).is_ok());
    assert!(check("api-get-food-units", &[], false).is_ok());
}

#[test]
fn test_url_params_checked_before_auth() {
    let err = check("api-get-water", &[], false).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingUrlParams);
}

#[test]
fn test_unknown_resource_path() {
    let err = check(
        "api-get-time-series",
        &[
            ("resource-path", "not/a/real/path"),
            ("base-date", "today"),
            ("period", "7d"),
        ],
        true,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownResourcePath {
            resource_path: "not/a/real/path".to_owned()
        }
    );

    assert_eq!(
        check(
            "api-get-time-series",
            &[
                ("resource-path", "activities/steps"),
                ("base-date", "today"),
                ("period", "7d"),
            ],
            true,
        )
        .unwrap(),
        Some("period")
    );
}

#[test]
fn test_resource_path_checked_after_auth() {
    let err = check(
        "api-get-time-series",
        &[
            ("resource-path", "not/a/real/path"),
            ("base-date", "today"),
            ("period", "7d"),
        ],
        false,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AuthOrUserIdRequired);
}

#[test]
fn test_intraday_resource_path_is_validated() {
    let err = check(
        "api-get-intraday-time-series",
        &[
            ("resource-path", "activities/teleports"),
            ("date", "today"),
            ("detail-level", "15min"),
        ],
        true,
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownResourcePath);
}
