//! Dynamic sharing: build a policy, wrap it in a scenario, and exchange it
//! for a share URL the user can open. Once the user has shared, the token
//! sent to the callback is exchanged for their profile.

pub mod attribute;
pub mod constants;
pub mod extension;
pub mod policy;
pub mod result;
pub mod scenario;

use std::sync::Arc;

use http::Method;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::profile::{crypto, ActivityDetails};
use crate::request::executor::{Executor, HttpExecutor};
use crate::request::signer::RequestSigner;
use crate::request::{encode_path_segment, Payload, RequestBuilder, AUTH_KEY_HEADER};
use result::ShareUrlResult;
use scenario::DynamicScenario;

/// Client for the sharing API
pub struct ShareClient {
    sdk_id: String,
    signer: Arc<RequestSigner>,
    api_url: String,
    executor: Arc<dyn Executor>,
}

impl ShareClient {
    /// Creates a client that talks to `config.connect_api_url()` over HTTP
    ///
    /// # Errors
    /// - `SdkError::Credential` if `pem` is not a usable RSA private key
    /// - `SdkError::Transport` if the HTTP client cannot be created
    pub fn new(sdk_id: impl Into<String>, pem: &str, config: &ClientConfig) -> SdkResult<Self> {
        let signer = Arc::new(RequestSigner::from_pem(pem)?);
        let executor = Arc::new(HttpExecutor::new()?);

        Ok(Self::with_executor(
            sdk_id,
            signer,
            config.connect_api_url(),
            executor,
        ))
    }

    #[must_use]
    pub fn with_executor(
        sdk_id: impl Into<String>,
        signer: Arc<RequestSigner>,
        api_url: impl Into<String>,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            sdk_id: sdk_id.into(),
            signer,
            api_url: api_url.into(),
            executor,
        }
    }

    #[must_use]
    pub fn sdk_id(&self) -> &str {
        &self.sdk_id
    }

    /// Registers `scenario` and returns the URL to send the user to
    ///
    /// # Errors
    /// Fails on transport or HTTP errors, or if the response lacks `qrcode`
    /// or `ref_id`
    #[instrument(skip_all, fields(callback = scenario.callback_endpoint()))]
    pub async fn create_share_url(&self, scenario: &DynamicScenario) -> SdkResult<ShareUrlResult> {
        let request = RequestBuilder::new()
            .with_base_url(&self.api_url)
            .with_endpoint(format!("/qrcodes/apps/{}", self.sdk_id))
            .with_method(Method::POST)
            .with_payload(Payload::from_serializable(scenario)?)
            .with_signer(Arc::clone(&self.signer))
            .build()?;

        let response = self.executor.execute(&request, false).await?;
        let body = response.json().cloned().unwrap_or_default();
        ShareUrlResult::try_from(&body)
    }

    /// Exchanges the one-time `token` from the callback for the shared profile
    ///
    /// # Errors
    /// - `SdkError::Decryption` if the token was not issued for this application
    /// - transport or HTTP errors from the profile call
    /// - `SdkError::Schema` if the response carries no receipt
    /// - any error of [`ActivityDetails::from_receipt`]
    #[instrument(skip_all)]
    pub async fn get_activity_details(&self, token: &str) -> SdkResult<ActivityDetails> {
        let receipt_token = crypto::decrypt_token(&self.signer, token)?;

        let request = RequestBuilder::new()
            .with_base_url(&self.api_url)
            .with_endpoint(format!("/profile/{}", encode_path_segment(&receipt_token)))
            .with_query_param("appId", &self.sdk_id)
            .with_header(AUTH_KEY_HEADER, self.signer.public_key_base64()?)
            .with_signer(Arc::clone(&self.signer))
            .build()?;

        let response = self.executor.execute(&request, false).await?;
        let receipt = response
            .receipt()
            .ok_or_else(|| SdkError::Schema("receipt must be an object".to_string()))?;

        let details = ActivityDetails::from_receipt(receipt, &self.signer)?;
        tracing::info!("Retrieved activity details for receipt {}", details.receipt_id());
        Ok(details)
    }
}
