//! API endpoint configuration

use std::env;

/// Default base URL of the sharing (Connect) API
pub const DEFAULT_CONNECT_API_URL: &str = "https://api.yoti.com/api/v1";

/// Default base URL of the document scan (IDV) API
pub const DEFAULT_DOC_SCAN_API_URL: &str = "https://api.yoti.com/idverify/v1";

/// Base URLs the SDK talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    connect_api_url: String,
    doc_scan_api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_api_url: DEFAULT_CONNECT_API_URL.to_string(),
            doc_scan_api_url: DEFAULT_DOC_SCAN_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `IDVERIFY_CONNECT_API_URL` and `IDVERIFY_DOC_SCAN_API_URL`,
    /// falling back to the production endpoints
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            connect_api_url: env::var("IDVERIFY_CONNECT_API_URL")
                .unwrap_or(defaults.connect_api_url),
            doc_scan_api_url: env::var("IDVERIFY_DOC_SCAN_API_URL")
                .unwrap_or(defaults.doc_scan_api_url),
        }
    }

    /// Overrides the sharing API base URL
    #[must_use]
    pub fn with_connect_api_url(mut self, url: impl Into<String>) -> Self {
        self.connect_api_url = url.into();
        self
    }

    /// Overrides the document scan API base URL
    #[must_use]
    pub fn with_doc_scan_api_url(mut self, url: impl Into<String>) -> Self {
        self.doc_scan_api_url = url.into();
        self
    }

    /// Sharing API base URL
    #[must_use]
    pub fn connect_api_url(&self) -> &str {
        &self.connect_api_url
    }

    /// Document scan API base URL
    #[must_use]
    pub fn doc_scan_api_url(&self) -> &str {
        &self.doc_scan_api_url
    }
}
