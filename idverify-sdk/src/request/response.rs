use http::HeaderMap;
use serde_json::Value;

use crate::error::SdkResult;

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body, or an empty body in non-buffered mode
    Empty,
    /// Body parsed as JSON
    Json(Value),
    /// Raw bytes, returned when the caller asked for a buffered response
    Bytes(Vec<u8>),
}

/// A successful API response
#[derive(Debug, Clone)]
pub struct Response {
    body: ResponseBody,
    status_code: u16,
    headers: HeaderMap,
    receipt: Option<Value>,
}

impl Response {
    /// Builds a response from an already decoded body, hoisting any `receipt`
    #[must_use]
    pub fn new(status_code: u16, headers: HeaderMap, body: ResponseBody) -> Self {
        let receipt = match &body {
            ResponseBody::Json(json) => json.get("receipt").filter(|r| !r.is_null()).cloned(),
            ResponseBody::Empty | ResponseBody::Bytes(_) => None,
        };

        Self {
            body,
            status_code,
            headers,
            receipt,
        }
    }

    /// Decodes raw body bytes.
    ///
    /// Buffered responses keep the bytes untouched. Otherwise a non-empty body
    /// is parsed as JSON whatever the `content-type` says.
    ///
    /// # Errors
    /// Returns `SdkError::Json` if a non-buffered body is not valid JSON
    pub fn from_raw(
        status_code: u16,
        headers: HeaderMap,
        bytes: &[u8],
        buffer_response: bool,
    ) -> SdkResult<Self> {
        let body = if buffer_response {
            ResponseBody::Bytes(bytes.to_vec())
        } else if bytes.iter().all(u8::is_ascii_whitespace) {
            ResponseBody::Empty
        } else {
            ResponseBody::Json(serde_json::from_slice(bytes)?)
        };

        Ok(Self::new(status_code, headers, body))
    }

    /// Decoded body
    #[must_use]
    pub const fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Parsed JSON body, if any
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(json) => Some(json),
            _ => None,
        }
    }

    /// HTTP status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// All response headers
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value by case-insensitive name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// The body's `receipt` field, when it had one
    #[must_use]
    pub const fn receipt(&self) -> Option<&Value> {
        self.receipt.as_ref()
    }

    /// Consumes the response, returning the body
    #[must_use]
    pub fn into_body(self) -> ResponseBody {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use http::header::CONTENT_TYPE;
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    #[test]
    fn test_receipt_is_hoisted_from_body() {
        let body = br#"{"receipt":{"receipt_id":"abc"},"other":1}"#;
        let response = Response::from_raw(200, HeaderMap::new(), body, false).unwrap();

        assert_eq!(response.receipt(), Some(&json!({ "receipt_id": "abc" })));
        assert_eq!(response.json().unwrap()["other"], 1);
    }

    #[test]
    fn test_missing_receipt_is_none() {
        let response = Response::from_raw(200, HeaderMap::new(), br#"{"a":1}"#, false).unwrap();
        assert!(response.receipt().is_none());

        let array = Response::from_raw(200, HeaderMap::new(), b"[1,2]", false).unwrap();
        assert!(array.receipt().is_none());
    }

    #[test]
    fn test_empty_body_is_empty() {
        let response = Response::from_raw(204, HeaderMap::new(), b"", false).unwrap();
        assert_eq!(response.body(), &ResponseBody::Empty);
        assert_eq!(response.status_code(), 204);
    }

    #[test]
    fn test_buffer_flag_wins_over_content_type() {
        let body = br#"{"receipt":"r"}"#;
        let response = Response::from_raw(200, json_headers(), body, true).unwrap();

        assert_eq!(response.body(), &ResponseBody::Bytes(body.to_vec()));
        assert!(response.receipt().is_none());
    }

    #[test]
    fn test_json_parsed_without_content_type() {
        let response = Response::from_raw(200, HeaderMap::new(), br#"{"x":true}"#, false).unwrap();
        assert_eq!(response.json(), Some(&json!({ "x": true })));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = Response::from_raw(200, json_headers(), b"{not json", false);
        assert!(matches!(result, Err(SdkError::Json(_))));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = Response::new(200, json_headers(), ResponseBody::Empty);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
    }
}
