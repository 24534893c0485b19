use serde::Serialize;

use super::{
    check::RequestedCheck, document::RequiredDocument, notification::NotificationConfig,
    sdk_config::SdkConfig, task::RequestedTask,
};

/// Everything the API needs to open a document scan session.
///
/// Serialized verbatim as the body of the create-session request. Only
/// structure is checked locally; the API decides whether the combination of
/// checks and tasks is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    client_session_token_ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resources_ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_tracking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notifications: Option<NotificationConfig>,
    requested_checks: Vec<RequestedCheck>,
    requested_tasks: Vec<RequestedTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sdk_config: Option<SdkConfig>,
    required_documents: Vec<RequiredDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_biometric_consent: Option<bool>,
}

impl SessionSpecification {
    /// Requested checks, in the order they were added
    #[must_use]
    pub fn requested_checks(&self) -> &[RequestedCheck] {
        &self.requested_checks
    }

    /// Requested tasks, in the order they were added
    #[must_use]
    pub fn requested_tasks(&self) -> &[RequestedTask] {
        &self.requested_tasks
    }

    /// Required documents
    #[must_use]
    pub fn required_documents(&self) -> &[RequiredDocument] {
        &self.required_documents
    }

    /// Tracking id chosen by the caller
    #[must_use]
    pub fn user_tracking_id(&self) -> Option<&str> {
        self.user_tracking_id.as_deref()
    }
}

/// Builds a [`SessionSpecification`]
#[derive(Debug, Clone, Default)]
pub struct SessionSpecificationBuilder {
    spec: SessionSpecification,
}

impl SessionSpecificationBuilder {
    /// Creates an empty specification builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifetime of the client session token, in seconds
    #[must_use]
    pub fn with_client_session_token_ttl(mut self, ttl: u32) -> Self {
        self.spec.client_session_token_ttl = Some(ttl);
        self
    }

    /// How long submitted resources are kept, in seconds
    #[must_use]
    pub fn with_resources_ttl(mut self, ttl: u32) -> Self {
        self.spec.resources_ttl = Some(ttl);
        self
    }

    /// Caller-side identifier of the end user
    #[must_use]
    pub fn with_user_tracking_id(mut self, id: impl Into<String>) -> Self {
        self.spec.user_tracking_id = Some(id.into());
        self
    }

    /// Callback configuration
    #[must_use]
    pub fn with_notifications(mut self, notifications: NotificationConfig) -> Self {
        self.spec.notifications = Some(notifications);
        self
    }

    /// Adds a check
    #[must_use]
    pub fn with_requested_check(mut self, check: RequestedCheck) -> Self {
        self.spec.requested_checks.push(check);
        self
    }

    /// Adds a task
    #[must_use]
    pub fn with_requested_task(mut self, task: RequestedTask) -> Self {
        self.spec.requested_tasks.push(task);
        self
    }

    /// Capture UI configuration
    #[must_use]
    pub fn with_sdk_config(mut self, sdk_config: SdkConfig) -> Self {
        self.spec.sdk_config = Some(sdk_config);
        self
    }

    /// Adds a required document
    #[must_use]
    pub fn with_required_document(mut self, document: RequiredDocument) -> Self {
        self.spec.required_documents.push(document);
        self
    }

    /// Stops the session when the user declines biometric consent
    #[must_use]
    pub fn with_block_biometric_consent(mut self, block: bool) -> Self {
        self.spec.block_biometric_consent = Some(block);
        self
    }

    /// Builds the specification
    #[must_use]
    pub fn build(self) -> SessionSpecification {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc_scan::session::create::{
        RequestedDocumentAuthenticityCheckBuilder, RequestedLivenessCheckBuilder,
        RequestedTextExtractionTaskBuilder, RequiredIdDocumentBuilder, SdkConfigBuilder,
    };
    use serde_json::json;

    #[test]
    fn test_empty_specification() {
        let spec = SessionSpecificationBuilder::new().build();
        assert_eq!(
            serde_json::to_value(spec).unwrap(),
            json!({ "requested_checks": [], "requested_tasks": [], "required_documents": [] })
        );
    }

    #[test]
    fn test_full_specification() {
        let spec = SessionSpecificationBuilder::new()
            .with_client_session_token_ttl(600)
            .with_resources_ttl(90_000)
            .with_user_tracking_id("user-1")
            .with_requested_check(RequestedDocumentAuthenticityCheckBuilder::new().build())
            .with_requested_check(
                RequestedLivenessCheckBuilder::new()
                    .for_static_liveness()
                    .build()
                    .unwrap(),
            )
            .with_requested_task(
                RequestedTextExtractionTaskBuilder::new()
                    .with_manual_check_fallback()
                    .build()
                    .unwrap(),
            )
            .with_sdk_config(SdkConfigBuilder::new().with_allows_camera().build())
            .with_required_document(RequiredIdDocumentBuilder::new().build())
            .build();

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["client_session_token_ttl"], 600);
        assert_eq!(value["resources_ttl"], 90_000);
        assert_eq!(value["user_tracking_id"], "user-1");
        assert_eq!(value["requested_checks"][0]["type"], "ID_DOCUMENT_AUTHENTICITY");
        assert_eq!(value["requested_checks"][1]["config"]["liveness_type"], "STATIC");
        assert_eq!(value["requested_tasks"][0]["config"]["manual_check"], "FALLBACK");
        assert_eq!(value["sdk_config"]["allowed_capture_methods"], "CAMERA");
        assert_eq!(value["required_documents"][0]["type"], "ID_DOCUMENT");
        assert_eq!(spec.requested_checks().len(), 2);
    }

    #[test]
    fn test_builder_order_does_not_matter() {
        let first = SessionSpecificationBuilder::new()
            .with_user_tracking_id("u")
            .with_resources_ttl(10)
            .build();
        let second = SessionSpecificationBuilder::new()
            .with_resources_ttl(10)
            .with_user_tracking_id("u")
            .build();

        assert_eq!(first, second);
    }
}
