//! HTTP executor behaviour against a mock server.

mod common;

use common::LogCapture;

use http::Method;
use idverify_sdk::request::executor::{Executor, HttpExecutor};
use idverify_sdk::request::response::ResponseBody;
use idverify_sdk::request::{Payload, Request, RequestBuilder};
use idverify_sdk::SdkError;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn request(server: &MockServer, http_method: Method, endpoint: &str) -> Request {
    RequestBuilder::new()
        .with_base_url(server.uri())
        .with_endpoint(endpoint)
        .with_method(http_method)
        .with_signer(common::test_signer())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_receipt_is_hoisted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "receipt": { "receipt_id": "abc" },
            "other": 1,
        })))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .execute(&request(&server, Method::GET, "/profile"), false)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.receipt(), Some(&json!({ "receipt_id": "abc" })));
    assert_eq!(response.json().unwrap()["other"], 1);
}

#[tokio::test]
async fn test_no_receipt_without_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .execute(&request(&server, Method::GET, "/list"), false)
        .await
        .unwrap();

    assert!(response.receipt().is_none());
    assert_eq!(response.json(), Some(&json!([1, 2, 3])));
}

#[tokio::test]
async fn test_buffer_flag_wins_over_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"receipt\": 1}", "application/json"))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .execute(&request(&server, Method::GET, "/raw"), true)
        .await
        .unwrap();

    assert_eq!(
        response.body(),
        &ResponseBody::Bytes(b"{\"receipt\": 1}".to_vec())
    );
    assert!(response.receipt().is_none());
}

#[tokio::test]
async fn test_text_body_is_still_parsed_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"a\": true}", "text/plain"))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .execute(&request(&server, Method::GET, "/text"), false)
        .await
        .unwrap();

    assert_eq!(response.json(), Some(&json!({ "a": true })));
}

#[tokio::test]
async fn test_empty_body_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();
    let response = executor
        .execute(&request(&server, Method::DELETE, "/thing"), false)
        .await
        .unwrap();

    assert_eq!(response.status_code(), 204);
    assert_eq!(response.body(), &ResponseBody::Empty);
}

#[tokio::test]
async fn test_status_text_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();

    let err = executor
        .execute(&request(&server, Method::GET, "/missing"), false)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Not Found");

    let err = executor
        .execute(&request(&server, Method::GET, "/broken"), false)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Http { status: 500, .. }));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_post_sends_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/things"))
        .and(body_json(json!({ "name": "thing" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let request = RequestBuilder::new()
        .with_base_url(server.uri())
        .with_endpoint("/things")
        .with_method(Method::POST)
        .with_payload(Payload::new(json!({ "name": "thing" })))
        .with_signer(common::test_signer())
        .build()
        .unwrap();

    let executor = HttpExecutor::new().unwrap();
    executor.execute(&request, false).await.unwrap();
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let request = RequestBuilder::new()
        .with_base_url("http://127.0.0.1:1")
        .with_endpoint("/unreachable")
        .with_signer(common::test_signer())
        .build()
        .unwrap();

    let executor = HttpExecutor::new().unwrap();
    let err = executor.execute(&request, false).await.unwrap_err();

    assert!(matches!(err, SdkError::Transport(_)));
    assert!(err.status().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn test_failures_are_logged() {
    let logs = LogCapture::default();
    let _guard = logs.install();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rejected"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new().unwrap();
    let err = executor
        .execute(&request(&server, Method::GET, "/rejected"), false)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(logs
        .contents()
        .contains("Error getting data from Connect API: Bad Request"));

    let unreachable = RequestBuilder::new()
        .with_base_url("http://127.0.0.1:1")
        .with_endpoint("/unreachable")
        .with_signer(common::test_signer())
        .build()
        .unwrap();
    let err = executor.execute(&unreachable, false).await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));

    let contents = logs.contents();
    let failures: Vec<_> = contents
        .lines()
        .filter(|line| line.contains("ERROR") && line.contains("Error getting data from Connect API: "))
        .collect();
    assert_eq!(failures.len(), 2, "{contents}");
}
