mod common;

use axum::http::{Method, StatusCode};
use common::{parse_response_body, TestSetup, SCENARIO_ID, SDK_ID};
use idverify_sdk::profile::fixtures;
use idverify_sdk::profile::proto::{Attribute, ContentType};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn test_index_returns_identifiers() {
    let setup = TestSetup::new().await;

    let response = setup.send_get_request("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["clientSdkId"], SDK_ID);
    assert_eq!(body["scenarioId"], SCENARIO_ID);
}

#[tokio::test]
async fn test_health() {
    let setup = TestSetup::new().await;

    let response = setup.send_get_request("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["semver"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_dynamic_share_returns_share_url() {
    let setup = TestSetup::new().await;
    Mock::given(method("POST"))
        .and(path(format!("/qrcodes/apps/{SDK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "qrcode": "https://code.example/abc",
            "ref_id": "ref-1",
        })))
        .expect(1)
        .mount(&setup.upstream)
        .await;

    let response = setup.send_get_request("/dynamic-share").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["shareUrl"], "https://code.example/abc");
    assert_eq!(body["refId"], "ref-1");

    let requests = setup.upstream.received_requests().await.unwrap();
    let scenario: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(scenario["callback_endpoint"], "https://localhost:9443/profile");
    assert_eq!(scenario["extensions"][0]["type"], "LOCATION_CONSTRAINT");
}

#[tokio::test]
async fn test_create_session() {
    let setup = TestSetup::new().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(query_param("sdkId", SDK_ID))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "session_id": "session-1",
            "client_session_token": "token-1",
            "client_session_token_ttl": 600,
        })))
        .mount(&setup.upstream)
        .await;

    let response = setup.send_request(Method::POST, "/sessions").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(
        body,
        json!({
            "sessionId": "session-1",
            "clientSessionToken": "token-1",
            "clientSessionTokenTtl": 600,
        })
    );
}

#[tokio::test]
async fn test_create_session_upstream_rejection() {
    let setup = TestSetup::new().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "code": "INVALID" })))
        .mount(&setup.upstream)
        .await;

    let response = setup.send_request(Method::POST, "/sessions").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = parse_response_body(response).await;
    assert_eq!(body["allowRetry"], false);
    assert_eq!(body["error"]["code"], "upstream_error");
    assert_eq!(body["error"]["message"], "Bad Request");
}

#[tokio::test]
async fn test_create_session_invalid_upstream_response() {
    let setup = TestSetup::new().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "session_id": "session-1",
            "client_session_token": "token-1",
        })))
        .mount(&setup.upstream)
        .await;

    let response = setup.send_request(Method::POST, "/sessions").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"]["code"], "invalid_upstream_response");
}

#[tokio::test]
async fn test_get_session_summary() {
    let setup = TestSetup::new().await;
    Mock::given(method("GET"))
        .and(path("/sessions/session-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "session-1",
            "state": "COMPLETED",
            "checks": [{
                "type": "LIVENESS",
                "state": "DONE",
                "report": { "recommendation": { "value": "APPROVE" }, "breakdown": [] }
            }],
            "resources": {
                "liveness_capture": [{
                    "liveness_type": "ZOOM",
                    "frames": [{ "media": { "id": "frame-1", "type": "IMAGE" } }]
                }]
            }
        })))
        .mount(&setup.upstream)
        .await;

    let response = setup.send_get_request("/sessions/session-1").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["state"], "COMPLETED");
    assert_eq!(body["checks"][0]["type"], "LIVENESS");
    assert_eq!(body["checks"][0]["recommendation"], "APPROVE");
    assert_eq!(body["mediaIds"], json!(["frame-1"]));
}

#[tokio::test]
async fn test_get_unknown_session() {
    let setup = TestSetup::new().await;
    Mock::given(method("GET"))
        .and(path("/sessions/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&setup.upstream)
        .await;

    let response = setup.send_get_request("/sessions/missing").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_session() {
    let setup = TestSetup::new().await;
    Mock::given(method("DELETE"))
        .and(path("/sessions/session-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&setup.upstream)
        .await;

    let response = setup
        .send_request(Method::DELETE, "/sessions/session-1")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_image_media_is_stored() {
    let setup = TestSetup::new().await;
    Mock::given(method("GET"))
        .and(path("/sessions/session-1/media/frame-1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"))
        .mount(&setup.upstream)
        .await;

    let response = setup
        .send_get_request("/sessions/session-1/media/frame-1")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["mimeType"], "image/png");
    assert_eq!(body["dataUri"], "data:image/png;base64,iVBORw==");
    assert_eq!(body["storedAs"], "frame-1.png");

    let stored = std::fs::read(setup.static_dir.path().join("frame-1.png")).unwrap();
    assert_eq!(stored, [0x89, 0x50, 0x4e, 0x47]);

    let served = setup.send_get_request("/static/frame-1.png").await.unwrap();
    assert_eq!(served.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generic_media_is_not_stored() {
    let setup = TestSetup::new().await;
    Mock::given(method("GET"))
        .and(path("/sessions/session-1/media/doc-fields/content"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"{\"name\":\"x\"}".to_vec(), "application/json"),
        )
        .mount(&setup.upstream)
        .await;

    let response = setup
        .send_get_request("/sessions/session-1/media/doc-fields")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["mimeType"], "application/json");
    assert!(body["storedAs"].is_null());
    assert!(!setup.static_dir.path().join("doc-fields.bin").exists());
}

#[tokio::test]
async fn test_media_without_content() {
    let setup = TestSetup::new().await;
    Mock::given(method("GET"))
        .and(path("/sessions/session-1/media/empty/content"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&setup.upstream)
        .await;

    let response = setup
        .send_get_request("/sessions/session-1/media/empty")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

fn profile_attributes() -> Vec<Attribute> {
    let attribute = |name: &str, content_type: ContentType, value: &[u8]| Attribute {
        name: name.to_string(),
        value: value.to_vec(),
        content_type: content_type.into(),
    };

    vec![
        attribute("given_names", ContentType::String, b"Jane"),
        attribute("full_name", ContentType::String, b"Jane Doe"),
        attribute("email_address", ContentType::String, b"jane@example.com"),
        attribute("phone_number", ContentType::String, b"+447700900000"),
        attribute("selfie", ContentType::Jpeg, &[0xff, 0xd8, 0xff]),
        attribute("age_over:18", ContentType::String, b"true"),
    ]
}

#[tokio::test]
async fn test_profile_stores_selfie() {
    let setup = TestSetup::new().await;
    let public_key = setup.public_key();
    Mock::given(method("GET"))
        .and(path(format!("/profile/{}", fixtures::RECEIPT_TOKEN)))
        .and(query_param("appId", SDK_ID))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::receipt(&public_key, &profile_attributes())),
        )
        .expect(1)
        .mount(&setup.upstream)
        .await;

    let token = fixtures::encrypt_token(&public_key, fixtures::RECEIPT_TOKEN);
    let response = setup
        .send_get_request(&format!("/profile?token={}", token.trim_end_matches('=')))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["rememberMeId"], fixtures::REMEMBER_ME_ID);
    assert_eq!(body["parentRememberMeId"], fixtures::PARENT_REMEMBER_ME_ID);
    assert_eq!(body["fullName"], "Jane Doe");
    assert_eq!(body["selfieUri"], "data:image/jpeg;base64,/9j/");
    assert_eq!(body["selfieStoredAs"], "YotiSelfie.jpeg");

    let labels: Vec<&str> = body["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["label"].as_str())
        .collect();
    assert_eq!(
        labels,
        ["Given names", "Email address", "Mobile number", "Age Verification"]
    );
    assert_eq!(body["attributes"][3]["ageVerification"]["passed"], true);

    let stored = std::fs::read(setup.static_dir.path().join("YotiSelfie.jpeg")).unwrap();
    assert_eq!(stored, [0xff, 0xd8, 0xff]);
}

#[tokio::test]
async fn test_profile_without_token() {
    let setup = TestSetup::new().await;

    for route in ["/profile", "/profile?token="] {
        let response = setup.send_get_request(route).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response).await;
        assert_eq!(body["error"]["code"], "missing_token");
        assert_eq!(body["error"]["message"], "No token has been provided.");
    }

    assert!(setup.upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_profile_with_foreign_token() {
    let setup = TestSetup::new().await;

    let response = setup.send_get_request("/profile?token=abc").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"]["code"], "invalid_token");
    assert!(setup.upstream.received_requests().await.unwrap().is_empty());
}
