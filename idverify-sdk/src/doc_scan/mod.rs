//! Document scan (IDV) sessions.
//!
//! [`DocScanService`] wraps the session endpoints: create a session from a
//! [`SessionSpecification`], poll it for results, fetch the media the user
//! captured, and clean up afterwards.

pub mod constants;
pub mod session;
pub mod support;

use std::sync::Arc;

use http::{Method, StatusCode};
use serde_json::Value;
use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::SdkResult;
use crate::media::Media;
use crate::request::executor::{Executor, HttpExecutor};
use crate::request::response::Response;
use crate::request::signer::RequestSigner;
use crate::request::{encode_path_segment, Payload, RequestBuilder};
use session::create::{CreateSessionResult, SessionSpecification};
use session::retrieve::GetSessionResult;
use support::SupportedDocumentsResponse;

/// Client for the document scan API
pub struct DocScanService {
    sdk_id: String,
    signer: Arc<RequestSigner>,
    api_url: String,
    executor: Arc<dyn Executor>,
}

impl DocScanService {
    /// Creates a service that talks to `config.doc_scan_api_url()` over HTTP
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
            config.doc_scan_api_url(),
            executor,
        ))
    }

    /// Creates a service with an explicit executor
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

    /// Application SDK id
    #[must_use]
    pub fn sdk_id(&self) -> &str {
        &self.sdk_id
    }

    fn request(&self, method: Method, endpoint: String) -> RequestBuilder {
        RequestBuilder::new()
            .with_base_url(&self.api_url)
            .with_endpoint(endpoint)
            .with_method(method)
            .with_query_param("sdkId", &self.sdk_id)
            .with_signer(Arc::clone(&self.signer))
    }

    async fn fetch_json(&self, builder: RequestBuilder) -> SdkResult<Value> {
        let request = builder.build()?;
        let response = self.executor.execute(&request, false).await?;
        Ok(body_json(&response))
    }

    /// Creates a session
    ///
    /// # Errors
    /// Fails on transport or HTTP errors, or if the response is not a valid
    /// creation result
    #[instrument(skip_all)]
    pub async fn create_session(
        &self,
        specification: &SessionSpecification,
    ) -> SdkResult<CreateSessionResult> {
        let builder = self
            .request(Method::POST, "/sessions".to_string())
            .with_payload(Payload::from_serializable(specification)?);

        let body = self.fetch_json(builder).await?;
        CreateSessionResult::try_from(&body)
    }

    /// Retrieves a session with its checks and resources
    ///
    /// # Errors
    /// Fails on transport or HTTP errors, or if `session_id` is missing from
    /// the response
    #[instrument(skip(self))]
    pub async fn get_session(&self, session_id: &str) -> SdkResult<GetSessionResult> {
        let builder = self.request(Method::GET, session_endpoint(session_id));

        let body = self.fetch_json(builder).await?;
        GetSessionResult::try_from(&body)
    }

    /// Deletes a session and everything captured in it
    ///
    /// # Errors
    /// Fails on transport or HTTP errors
    #[instrument(skip(self))]
    pub async fn delete_session(&self, session_id: &str) -> SdkResult<()> {
        let request = self
            .request(Method::DELETE, session_endpoint(session_id))
            .build()?;

        self.executor.execute(&request, false).await?;
        Ok(())
    }

    /// Downloads a media object. `None` when the API has no content for it.
    ///
    /// # Errors
    /// Fails on transport or HTTP errors, or if the response has no
    /// `content-type`
    #[instrument(skip(self))]
    pub async fn get_media_content(
        &self,
        session_id: &str,
        media_id: &str,
    ) -> SdkResult<Option<Media>> {
        let request = self
            .request(Method::GET, media_endpoint(session_id, media_id))
            .build()?;

        let response = self.executor.execute(&request, true).await?;
        if response.status_code() == StatusCode::NO_CONTENT.as_u16() {
            return Ok(None);
        }

        Media::from_response(&response).map(Some)
    }

    /// Deletes a media object
    ///
    /// # Errors
    /// Fails on transport or HTTP errors
    #[instrument(skip(self))]
    pub async fn delete_media_content(&self, session_id: &str, media_id: &str) -> SdkResult<()> {
        let request = self
            .request(Method::DELETE, media_endpoint(session_id, media_id))
            .build()?;

        self.executor.execute(&request, false).await?;
        Ok(())
    }

    /// Lists the countries and document types the service accepts
    ///
    /// # Errors
    /// Fails on transport or HTTP errors
    #[instrument(skip_all)]
    pub async fn get_supported_documents(&self) -> SdkResult<SupportedDocumentsResponse> {
        let builder = self.request(Method::GET, "/supported-documents".to_string());

        let body = self.fetch_json(builder).await?;
        Ok(SupportedDocumentsResponse::from(&body))
    }
}

fn session_endpoint(session_id: &str) -> String {
    format!("/sessions/{}", encode_path_segment(session_id))
}

fn media_endpoint(session_id: &str, media_id: &str) -> String {
    format!(
        "{}/media/{}/content",
        session_endpoint(session_id),
        encode_path_segment(media_id)
    )
}

fn body_json(response: &Response) -> Value {
    response.json().cloned().unwrap_or_default()
}
