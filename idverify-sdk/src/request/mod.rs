//! Signed request model.
//!
//! A [`Request`] is assembled once by [`RequestBuilder`] and never mutated
//! afterwards. Building a request signs it, so the signature always matches
//! the method, path, query and payload that will be sent.

pub mod executor;
pub mod response;
pub mod signer;

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;
use url::{form_urlencoded, Url};

use crate::error::{SdkError, SdkResult};
use signer::RequestSigner;

/// Header carrying the request signature
pub const AUTH_DIGEST_HEADER: &str = "X-Yoti-Auth-Digest";
/// Header carrying the application's public key on profile requests
pub const AUTH_KEY_HEADER: &str = "X-Yoti-Auth-Key";
/// Header naming the SDK implementation
pub const SDK_HEADER: &str = "X-Yoti-SDK";
/// Header carrying the SDK version
pub const SDK_VERSION_HEADER: &str = "X-Yoti-SDK-Version";

const SDK_NAME: &str = "Rust";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encodes an id for use as one path segment, so that reserved
/// characters cannot leak into the query or fragment
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Whether requests with this method carry a body
#[must_use]
pub fn can_send_payload(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// JSON request payload
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

impl Payload {
    /// Wraps an already-built JSON value
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Serializes any value into a payload
    ///
    /// # Errors
    /// Returns `SdkError::Json` if the value cannot be represented as JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> SdkResult<Self> {
        Ok(Self(serde_json::to_value(value)?))
    }

    /// The payload as a JSON value
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.0
    }

    /// The payload as a JSON string
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// The JSON string, base64-encoded, as it appears in the signed message
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_json_string())
    }
}

/// An authenticated HTTP request ready for dispatch
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: BTreeMap<String, String>,
    payload: Option<Payload>,
}

impl Request {
    /// HTTP method
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute URL including the signed query string
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Headers to send, including the authentication headers
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Payload as set on the builder, regardless of method
    #[must_use]
    pub const fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Serialized body, only for methods that carry one
    #[must_use]
    pub fn body(&self) -> Option<String> {
        self.payload
            .as_ref()
            .filter(|_| can_send_payload(&self.method))
            .map(Payload::to_json_string)
    }
}

/// Builds and signs a [`Request`]
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    base_url: Option<String>,
    endpoint: String,
    method: Method,
    headers: BTreeMap<String, String>,
    query_params: Vec<(String, String)>,
    payload: Option<Payload>,
    signer: Option<Arc<RequestSigner>>,
    nonce: Option<String>,
    timestamp: Option<i64>,
}

impl RequestBuilder {
    /// Starts an empty `GET` request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// API base URL, e.g. `https://api.yoti.com/idverify/v1`
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Path relative to the base URL, e.g. `/sessions`
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// HTTP method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a header; a later value for the same name wins
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Appends a query parameter
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Request payload
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Key used to sign the request
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Fixes the nonce instead of generating one
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Fixes the timestamp (milliseconds since the epoch) instead of reading the clock
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Assembles the URL, signs it and produces the request
    ///
    /// # Errors
    /// - `SdkError::MissingField` if no base URL or signer was set
    /// - `SdkError::InvalidUrl` if the URL cannot be parsed
    pub fn build(self) -> SdkResult<Request> {
        let base_url = self.base_url.ok_or(SdkError::MissingField("base_url"))?;
        let signer = self.signer.ok_or(SdkError::MissingField("signer"))?;

        let nonce = self
            .nonce
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Utc::now().timestamp_millis());

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query_params)
            .append_pair("nonce", &nonce)
            .append_pair("timestamp", &timestamp.to_string())
            .finish();
        let path_and_query = format!("{}?{query}", self.endpoint);
        let url = Url::parse(&format!(
            "{}{path_and_query}",
            base_url.trim_end_matches('/')
        ))?;

        let signed_payload = self.payload.as_ref().filter(|_| can_send_payload(&self.method));
        let digest = signer.sign(&self.method, &path_and_query, signed_payload);

        let mut headers = self.headers;
        headers.insert(AUTH_DIGEST_HEADER.to_string(), digest);
        headers.insert(SDK_HEADER.to_string(), SDK_NAME.to_string());
        headers.insert(
            SDK_VERSION_HEADER.to_string(),
            format!("{SDK_NAME}-{}", env!("CARGO_PKG_VERSION")),
        );
        headers
            .entry("Accept".to_string())
            .or_insert_with(|| mime::APPLICATION_JSON.to_string());
        if signed_payload.is_some() {
            headers
                .entry("Content-Type".to_string())
                .or_insert_with(|| mime::APPLICATION_JSON.to_string());
        }

        Ok(Request {
            method: self.method,
            url,
            headers,
            payload: self.payload,
        })
    }
}
