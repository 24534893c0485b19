// Not every helper is used in every test binary
#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use base64::{engine::general_purpose::STANDARD, Engine};
use idverify_sdk::request::signer::RequestSigner;
use idverify_sdk::{ClientConfig, DocScanService, ShareClient};
use rsa::{
    pkcs1v15::{Signature, VerifyingKey},
    signature::Verifier,
    RsaPublicKey,
};
use sha2::Sha256;
use tracing::subscriber::DefaultGuard;
use wiremock::{MockServer, Request};

pub const SDK_ID: &str = "app-123";

/// PKCS#8 RSA key shared by every test
pub const TEST_KEY: &str = include_str!("../fixtures/test-key.pem");

pub fn test_signer() -> Arc<RequestSigner> {
    Arc::new(RequestSigner::from_pem(TEST_KEY).expect("Fixture key must load"))
}

pub fn public_key() -> RsaPublicKey {
    test_signer().public_key()
}

pub struct TestContext {
    pub server: MockServer,
    pub public_key: RsaPublicKey,
    pub doc_scan: DocScanService,
    pub share: ShareClient,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::default()
            .with_doc_scan_api_url(server.uri())
            .with_connect_api_url(server.uri());

        let doc_scan = DocScanService::new(SDK_ID, TEST_KEY, &config)
            .expect("Failed to create doc scan service");
        let share =
            ShareClient::new(SDK_ID, TEST_KEY, &config).expect("Failed to create share client");

        Self {
            server,
            public_key: public_key(),
            doc_scan,
            share,
        }
    }

    /// The single request the mock server saw
    pub async fn only_request(&self) -> Request {
        let mut requests = self
            .server
            .received_requests()
            .await
            .expect("Request recording is disabled");
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }

    /// Checks the digest header against the request line and body
    pub fn assert_signed(&self, request: &Request) {
        let digest = request
            .headers
            .get("X-Yoti-Auth-Digest")
            .and_then(|value| value.to_str().ok())
            .expect("Missing digest header");
        let bytes = STANDARD.decode(digest).expect("Digest is not base64");
        let signature =
            Signature::try_from(bytes.as_slice()).expect("Digest is not an RSA signature");

        let mut message = format!(
            "{}&{}?{}",
            request.method,
            request.url.path(),
            request.url.query().unwrap_or_default()
        );
        if !request.body.is_empty() {
            message.push('&');
            message.push_str(&STANDARD.encode(&request.body));
        }

        VerifyingKey::<Sha256>::new(self.public_key.clone())
            .verify(message.as_bytes(), &signature)
            .expect("Signature does not cover the request");
    }
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Routes this thread's events into the buffer until the guard drops
    pub fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
