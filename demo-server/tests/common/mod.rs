#![allow(unused_imports, dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use demo_server::{media_storage::MediaStorage, server, types::DemoConfig};
use http_body_util::BodyExt;
use idverify_sdk::request::signer::RequestSigner;
use idverify_sdk::{ClientConfig, DocScanService, ShareClient};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::MockServer;

pub const SDK_ID: &str = "demo-sdk-id";
pub const SCENARIO_ID: &str = "demo-scenario-id";

/// PKCS#8 RSA key shared with the SDK tests
pub const TEST_KEY: &str = include_str!("../../../idverify-sdk/tests/fixtures/test-key.pem");

/// Setup test environment variables and logging
pub fn setup_test_env() {
    dotenvy::from_path(".env.example").ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to a mock verification API and a temporary static directory
pub struct TestSetup {
    pub router: Router,
    pub upstream: MockServer,
    pub static_dir: TempDir,
}

impl TestSetup {
    pub async fn new() -> Self {
        setup_test_env();

        let upstream = MockServer::start().await;
        let static_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let client_config = ClientConfig::default()
            .with_doc_scan_api_url(upstream.uri())
            .with_connect_api_url(upstream.uri());

        let config = Arc::new(
            DemoConfig::new(SDK_ID, SCENARIO_ID, "unused.pem").with_static_dir(static_dir.path()),
        );
        let doc_scan = Arc::new(
            DocScanService::new(SDK_ID, TEST_KEY, &client_config)
                .expect("Failed to create doc scan service"),
        );
        let share_client = Arc::new(
            ShareClient::new(SDK_ID, TEST_KEY, &client_config).expect("Failed to create share client"),
        );
        let media_storage = Arc::new(MediaStorage::new(static_dir.path()));

        let router = server::app(config, doc_scan, share_client, media_storage);

        Self {
            router,
            upstream,
            static_dir,
        }
    }

    /// Public half of the key the services sign with
    pub fn public_key(&self) -> idverify_sdk::request::signer::RsaPublicKey {
        RequestSigner::from_pem(TEST_KEY)
            .expect("Fixture key must load")
            .public_key()
    }

    pub async fn send_request(
        &self,
        method: Method,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_request(Method::GET, route).await
    }
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
