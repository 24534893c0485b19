use serde::Serialize;
use strum::Display;

use crate::error::{SdkError, SdkResult};

/// When a human reviewer looks at a check or task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ManualCheck {
    /// Always review
    Always,
    /// Review only when the automated result is inconclusive
    Fallback,
    /// Never review
    Never,
}

/// Liveness capture technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LivenessType {
    /// 3D face map capture
    Zoom,
    /// Single static selfie
    Static,
}

/// A check to run once the user has submitted their resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "config")]
pub enum RequestedCheck {
    /// Document authenticity
    #[serde(rename = "ID_DOCUMENT_AUTHENTICITY")]
    DocumentAuthenticity(DocumentAuthenticityConfig),
    /// Face on the document against the liveness capture
    #[serde(rename = "ID_DOCUMENT_FACE_MATCH")]
    FaceMatch(FaceMatchConfig),
    /// Liveness of the user
    #[serde(rename = "LIVENESS")]
    Liveness(LivenessConfig),
}

/// Configuration of [`RequestedCheck::DocumentAuthenticity`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentAuthenticityConfig {}

/// Configuration of [`RequestedCheck::FaceMatch`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceMatchConfig {
    manual_check: ManualCheck,
}

/// Configuration of [`RequestedCheck::Liveness`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivenessConfig {
    liveness_type: LivenessType,
    max_retries: u32,
}

/// Builds a [`RequestedCheck::DocumentAuthenticity`]
#[derive(Debug, Clone, Default)]
pub struct RequestedDocumentAuthenticityCheckBuilder;

impl RequestedDocumentAuthenticityCheckBuilder {
    /// Creates the builder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the check
    #[must_use]
    pub fn build(self) -> RequestedCheck {
        RequestedCheck::DocumentAuthenticity(DocumentAuthenticityConfig::default())
    }
}

/// Builds a [`RequestedCheck::FaceMatch`]
#[derive(Debug, Clone, Default)]
pub struct RequestedFaceMatchCheckBuilder {
    manual_check: Option<ManualCheck>,
}

impl RequestedFaceMatchCheckBuilder {
    /// Creates the builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Always request manual review
    #[must_use]
    pub const fn with_manual_check_always(self) -> Self {
        self.with_manual_check(ManualCheck::Always)
    }

    /// Request manual review when automation is inconclusive
    #[must_use]
    pub const fn with_manual_check_fallback(self) -> Self {
        self.with_manual_check(ManualCheck::Fallback)
    }

    /// Never request manual review
    #[must_use]
    pub const fn with_manual_check_never(self) -> Self {
        self.with_manual_check(ManualCheck::Never)
    }

    /// Sets the manual check mode
    #[must_use]
    pub const fn with_manual_check(mut self, manual_check: ManualCheck) -> Self {
        self.manual_check = Some(manual_check);
        self
    }

    /// Builds the check
    ///
    /// # Errors
    /// Returns `SdkError::MissingField` if no manual check mode was chosen
    pub fn build(self) -> SdkResult<RequestedCheck> {
        let manual_check = self
            .manual_check
            .ok_or(SdkError::MissingField("manual_check"))?;

        Ok(RequestedCheck::FaceMatch(FaceMatchConfig { manual_check }))
    }
}

/// Builds a [`RequestedCheck::Liveness`]
#[derive(Debug, Clone)]
pub struct RequestedLivenessCheckBuilder {
    liveness_type: Option<LivenessType>,
    max_retries: u32,
}

impl Default for RequestedLivenessCheckBuilder {
    fn default() -> Self {
        Self {
            liveness_type: None,
            max_retries: 1,
        }
    }
}

impl RequestedLivenessCheckBuilder {
    /// Creates the builder, allowing a single retry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use 3D face map liveness
    #[must_use]
    pub const fn for_zoom_liveness(self) -> Self {
        self.for_liveness_type(LivenessType::Zoom)
    }

    /// Use static selfie liveness
    #[must_use]
    pub const fn for_static_liveness(self) -> Self {
        self.for_liveness_type(LivenessType::Static)
    }

    /// Sets the liveness type
    #[must_use]
    pub const fn for_liveness_type(mut self, liveness_type: LivenessType) -> Self {
        self.liveness_type = Some(liveness_type);
        self
    }

    /// Number of attempts the user gets after the first one
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Builds the check
    ///
    /// # Errors
    /// Returns `SdkError::MissingField` if no liveness type was chosen
    pub fn build(self) -> SdkResult<RequestedCheck> {
        let liveness_type = self
            .liveness_type
            .ok_or(SdkError::MissingField("liveness_type"))?;

        Ok(RequestedCheck::Liveness(LivenessConfig {
            liveness_type,
            max_retries: self.max_retries,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_authenticity_serializes_with_empty_config() {
        let check = RequestedDocumentAuthenticityCheckBuilder::new().build();
        assert_eq!(
            serde_json::to_value(check).unwrap(),
            json!({ "type": "ID_DOCUMENT_AUTHENTICITY", "config": {} })
        );
    }

    #[test]
    fn test_face_match_serializes_manual_check() {
        let check = RequestedFaceMatchCheckBuilder::new()
            .with_manual_check_fallback()
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(check).unwrap(),
            json!({ "type": "ID_DOCUMENT_FACE_MATCH", "config": { "manual_check": "FALLBACK" } })
        );
    }

    #[test]
    fn test_face_match_requires_manual_check() {
        let result = RequestedFaceMatchCheckBuilder::new().build();
        assert!(matches!(result, Err(SdkError::MissingField("manual_check"))));
    }

    #[test]
    fn test_liveness_serializes_type_and_retries() {
        let check = RequestedLivenessCheckBuilder::new()
            .for_zoom_liveness()
            .with_max_retries(3)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(check).unwrap(),
            json!({ "type": "LIVENESS", "config": { "liveness_type": "ZOOM", "max_retries": 3 } })
        );
    }

    #[test]
    fn test_liveness_requires_type() {
        let result = RequestedLivenessCheckBuilder::new().with_max_retries(2).build();
        assert!(matches!(result, Err(SdkError::MissingField("liveness_type"))));
    }

    #[test]
    fn test_manual_check_display() {
        assert_eq!(ManualCheck::Always.to_string(), "ALWAYS");
        assert_eq!(LivenessType::Static.to_string(), "STATIC");
    }
}
