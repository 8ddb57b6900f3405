// ABOUTME: Tests for the Fitbit API client call flow over a recording executor
// ABOUTME: Checks URL construction, local rejection without network activity, and transport error propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    consumer_credentials, params, token_credentials, FakeNetworkError, RecordingExecutor,
};
use fitbit_oauth_client::models::HttpVerb;
use fitbit_oauth_client::{
    ClientConfig, ClientError, ErrorCode, FitbitClient, HttpResponse, RequestParameters,
    ValidationError,
};
use std::sync::Arc;

fn client() -> (FitbitClient<Arc<RecordingExecutor>>, Arc<RecordingExecutor>) {
    common::init_test_logging();
    let executor = Arc::new(RecordingExecutor::ok());
    (FitbitClient::new(Arc::clone(&executor)), executor)
}

#[tokio::test]
async fn test_successful_call_sends_signed_request() {
    let (client, executor) = client();

    let response = client
        .call(
            "api-get-body-fat",
            params(&[("date", "2024-05-01"), ("response-format", "json")]),
            &token_credentials(),
        )
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.body, r#"{"ok":true}"#);

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].url,
        "https://api.fitbit.com/1/user/-/body/log/fat/date/2024-05-01.json"
    );
    assert_eq!(calls[0].request.verb, HttpVerb::Get);
    assert!(calls[0].credentials.has_token());
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let (client, executor) = client();

    let err = client
        .call("api-get-badges", RequestParameters::new(), &consumer_credentials())
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::AuthOrUserIdRequired);
    assert_eq!(err.code().http_status(), 401);
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::AuthOrUserIdRequired { .. })
    ));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let (client, executor) = client();

    let err = client
        .call("api-get-moon-phase", RequestParameters::new(), &token_credentials())
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::UnknownMethod);
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_user_id_call_without_token() {
    let (client, executor) = client();

    client
        .call(
            "api-get-user-info",
            params(&[("user-id", "ABC1234")]),
            &consumer_credentials(),
        )
        .await
        .unwrap();

    let calls = executor.calls();
    assert_eq!(calls[0].url, "https://api.fitbit.com/1/user/ABC1234/profile.xml");
    assert!(!calls[0].credentials.has_token());
}

#[tokio::test]
async fn test_empty_token_pair_counts_as_missing() {
    let (client, _executor) = client();

    let err = client
        .call(
            "api-get-water",
            params(&[("date", "2024-05-01")]),
            &consumer_credentials().with_token("", ""),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    common::init_test_logging();
    let client = FitbitClient::new(RecordingExecutor::failing("connection reset"));

    let err = client
        .call(
            "api-get-devices",
            RequestParameters::new(),
            &token_credentials(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::TransportError);
    let ClientError::Transport(transport) = err else {
        panic!("expected a transport error");
    };
    assert_eq!(
        transport.downcast_ref::<FakeNetworkError>(),
        Some(&FakeNetworkError("connection reset".to_owned()))
    );
}

#[tokio::test]
async fn test_non_success_status_is_returned_as_is() {
    common::init_test_logging();
    let executor = RecordingExecutor::responding(HttpResponse {
        status: 409,
        body: "conflict".to_owned(),
        ..HttpResponse::default()
    });
    let client = FitbitClient::new(executor);

    let response = client
        .call(
            "api-add-subscription",
            params(&[("subscription-id", "sub-1")]),
            &token_credentials(),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 409);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_method_names_are_case_insensitive() {
    let (client, executor) = client();

    client
        .call("API-GET-DEVICES", RequestParameters::new(), &token_credentials())
        .await
        .unwrap();

    assert_eq!(
        executor.calls()[0].url,
        "https://api.fitbit.com/1/user/-/devices.xml"
    );
}

#[tokio::test]
async fn test_custom_api_base() {
    common::init_test_logging();
    let executor = Arc::new(RecordingExecutor::ok());
    let config = ClientConfig {
        api_base_url: "http://localhost:8080/".to_owned(),
        ..ClientConfig::default()
    };
    let client = FitbitClient::from_config(&config, Arc::clone(&executor));
    assert_eq!(client.api_base_url(), "http://localhost:8080/");

    client
        .call("api-get-food-units", RequestParameters::new(), &consumer_credentials())
        .await
        .unwrap();

    assert_eq!(executor.calls()[0].url, "http://localhost:8080/1/foods/units.xml");
}

#[tokio::test]
async fn test_post_call_carries_body_and_headers() {
    let (client, executor) = client();

    client
        .call(
            "api-log-body-weight",
            params(&[
                ("weight", "72.5"),
                ("date", "2024-05-01"),
                ("Accept-Language", "en_US"),
            ]),
            &token_credentials(),
        )
        .await
        .unwrap();

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].request.verb, HttpVerb::Post);
    assert_eq!(calls[0].request.body, "date=2024-05-01&weight=72.5");
    assert_eq!(
        calls[0].request.headers.get("Accept-Language").map(String::as_str),
        Some("en_US")
    );
}

#[test]
fn test_prepare_builds_without_sending() {
    let (client, executor) = client();

    let request = client
        .prepare("api-get-sleep", params(&[("date", "2024-05-01")]), true)
        .unwrap();

    assert_eq!(request.path, "/1/user/-/sleep/date/2024-05-01.xml");
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let (client, executor) = client();
    let client = Arc::new(client);

    let handles: Vec<_> = ["2024-05-01", "2024-05-02", "2024-05-03"]
        .into_iter()
        .map(|date| {
            let client = Arc::clone(&client);
            tokio::spawn(async move {
                client
                    .call(
                        "api-get-water",
                        params(&[("date", date)]),
                        &token_credentials(),
                    )
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut urls: Vec<_> = executor.calls().into_iter().map(|c| c.url).collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            "https://api.fitbit.com/1/user/-/foods/log/water/date/2024-05-01.xml",
            "https://api.fitbit.com/1/user/-/foods/log/water/date/2024-05-02.xml",
            "https://api.fitbit.com/1/user/-/foods/log/water/date/2024-05-03.xml",
        ]
    );
}
