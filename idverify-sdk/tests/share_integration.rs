//! Share URL creation and profile retrieval against a mock HTTP server.

mod common;

use base64::{engine::general_purpose::STANDARD, Engine};
use common::{TestContext, SDK_ID};
use idverify_sdk::profile::fixtures;
use idverify_sdk::profile::proto::{Attribute, ContentType};
use idverify_sdk::share::extension::LocationConstraintExtensionBuilder;
use idverify_sdk::share::policy::DynamicPolicyBuilder;
use idverify_sdk::share::scenario::{DynamicScenario, DynamicScenarioBuilder};
use idverify_sdk::SdkError;
use rsa::{pkcs8::DecodePublicKey, RsaPublicKey};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

fn scenario() -> DynamicScenario {
    let location = LocationConstraintExtensionBuilder::new()
        .with_latitude(51.5074)
        .with_longitude(-0.1278)
        .with_radius(6000.0)
        .build()
        .unwrap();

    let policy = DynamicPolicyBuilder::new()
        .with_wanted_attribute_by_name("email_address")
        .with_full_name()
        .with_selfie()
        .with_phone_number()
        .with_age_over(18)
        .build();

    DynamicScenarioBuilder::new()
        .with_callback_endpoint("/profile")
        .with_policy(policy)
        .with_extension(location)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_create_share_url() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(format!("/qrcodes/apps/{SDK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "qrcode": "https://code.example.com/share/abc",
            "ref_id": "some-ref",
        })))
        .mount(&ctx.server)
        .await;

    let result = ctx.share.create_share_url(&scenario()).await.unwrap();
    assert_eq!(result.share_url(), "https://code.example.com/share/abc");
    assert_eq!(result.ref_id(), "some-ref");

    let request = ctx.only_request().await;
    ctx.assert_signed(&request);

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["callback_endpoint"], "/profile");
    assert_eq!(body["policy"]["wanted"].as_array().unwrap().len(), 5);
    assert_eq!(body["policy"]["wanted"][4]["derivation"], "age_over:18");
    assert_eq!(
        body["extensions"][0]["content"]["expected_device_location"]["radius"],
        6000.0
    );

    let query: Vec<_> = request.url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(query, ["nonce", "timestamp"]);
}

#[tokio::test]
async fn test_create_share_url_invalid_response() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(format!("/qrcodes/apps/{SDK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ref_id": "some-ref" })))
        .mount(&ctx.server)
        .await;

    let err = ctx.share.create_share_url(&scenario()).await.unwrap_err();
    assert_eq!(err.to_string(), "qrcode must be a string");
}

#[tokio::test]
async fn test_create_share_url_bad_request() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&ctx.server)
        .await;

    let err = ctx.share.create_share_url(&scenario()).await.unwrap_err();
    assert_eq!(err.to_string(), "Bad Request");
}

#[tokio::test]
async fn test_get_activity_details() {
    let ctx = TestContext::new().await;
    let attributes = [
        Attribute {
            name: "given_names".to_string(),
            value: b"Jane".to_vec(),
            content_type: ContentType::String.into(),
        },
        Attribute {
            name: "selfie".to_string(),
            value: vec![0xff, 0xd8, 0xff],
            content_type: ContentType::Jpeg.into(),
        },
        Attribute {
            name: "age_over:18".to_string(),
            value: b"true".to_vec(),
            content_type: ContentType::String.into(),
        },
    ];

    Mock::given(method("GET"))
        .and(path(format!("/profile/{}", fixtures::RECEIPT_TOKEN)))
        .and(query_param("appId", SDK_ID))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::receipt(&ctx.public_key, &attributes)),
        )
        .mount(&ctx.server)
        .await;

    let token = fixtures::encrypt_token(&ctx.public_key, fixtures::RECEIPT_TOKEN);
    let details = ctx.share.get_activity_details(&token).await.unwrap();

    assert_eq!(details.receipt_id(), fixtures::RECEIPT_ID);
    assert_eq!(details.remember_me_id(), Some(fixtures::REMEMBER_ME_ID));
    assert_eq!(
        details.parent_remember_me_id(),
        Some(fixtures::PARENT_REMEMBER_ME_ID)
    );
    assert_eq!(
        details.profile().given_names().and_then(|a| a.value().as_str()),
        Some("Jane")
    );
    assert_eq!(
        details.base64_selfie_uri().as_deref(),
        Some("data:image/jpeg;base64,/9j/")
    );
    assert!(details
        .profile()
        .find_age_over_verification(18)
        .is_some_and(|v| v.passed()));

    let request = ctx.only_request().await;
    ctx.assert_signed(&request);
    let auth_key = request
        .headers
        .get("X-Yoti-Auth-Key")
        .and_then(|value| value.to_str().ok())
        .unwrap();
    let der = STANDARD.decode(auth_key).unwrap();
    assert_eq!(RsaPublicKey::from_public_key_der(&der).unwrap(), ctx.public_key);
}

#[tokio::test]
async fn test_unsuccessful_share_is_reported() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "receipt": {
                "receipt_id": "r",
                "wrapped_receipt_key": "",
                "sharing_outcome": "FAILURE",
            }
        })))
        .mount(&ctx.server)
        .await;

    let token = fixtures::encrypt_token(&ctx.public_key, fixtures::RECEIPT_TOKEN);
    let err = ctx.share.get_activity_details(&token).await.unwrap_err();

    assert!(matches!(err, SdkError::ShareFailed(_)));
}
