use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use demo_server::{
    media_storage::MediaStorage,
    server,
    types::{DemoConfig, Environment},
};
use idverify_sdk::{
    config::ClientConfig,
    request::{executor::HttpExecutor, signer::RequestSigner},
    DocScanService, ShareClient,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Upstream calls give up after this long
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(20);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();

    // JSON logs for staging/production, human readable locally
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let config = Arc::new(DemoConfig::from_env()?);
    let pem = tokio::fs::read_to_string(config.key_file_path())
        .await
        .with_context(|| format!("Failed to read {}", config.key_file_path().display()))?;

    let client_config = ClientConfig::from_env();
    let signer = Arc::new(RequestSigner::from_pem(&pem)?);
    let executor = Arc::new(HttpExecutor::with_client(
        reqwest::Client::builder().timeout(UPSTREAM_TIMEOUT).build()?,
    ));

    let doc_scan = Arc::new(DocScanService::with_executor(
        config.client_sdk_id(),
        signer.clone(),
        client_config.doc_scan_api_url(),
        executor.clone(),
    ));
    let share_client = Arc::new(ShareClient::with_executor(
        config.client_sdk_id(),
        signer,
        client_config.connect_api_url(),
        executor,
    ));
    let media_storage = Arc::new(MediaStorage::new(config.static_dir()));

    server::start(config, doc_scan, share_client, media_storage).await
}
