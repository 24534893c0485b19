use serde_json::Value;

use super::check::{CheckKind, CheckResponse};
use super::resource::ResourceContainer;
use crate::error::{SdkError, SdkResult};
use crate::parse::{array, object, opt_i64, opt_str, require_str};

/// State of a doc scan session as returned by `GET /sessions/{id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSessionResult {
    session_id: String,
    state: Option<String>,
    client_session_token: Option<String>,
    client_session_token_ttl: Option<i64>,
    user_tracking_id: Option<String>,
    checks: Vec<CheckResponse>,
    resources: ResourceContainer,
}

impl GetSessionResult {
    /// Id of the session, the only field the API must send
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Session state, e.g. `ONGOING` or `COMPLETED`
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Token the client-side web view authenticates with
    #[must_use]
    pub fn client_session_token(&self) -> Option<&str> {
        self.client_session_token.as_deref()
    }

    /// Seconds the client session token remains valid
    #[must_use]
    pub const fn client_session_token_ttl(&self) -> Option<i64> {
        self.client_session_token_ttl
    }

    /// Caller-supplied id echoed back from session creation
    #[must_use]
    pub fn user_tracking_id(&self) -> Option<&str> {
        self.user_tracking_id.as_deref()
    }

    /// All checks in the order the API listed them
    #[must_use]
    pub fn checks(&self) -> &[CheckResponse] {
        &self.checks
    }

    /// Documents and liveness captures gathered during the session
    #[must_use]
    pub const fn resources(&self) -> &ResourceContainer {
        &self.resources
    }

    fn checks_of(&self, kind: &CheckKind) -> Vec<&CheckResponse> {
        self.checks
            .iter()
            .filter(|check| check.kind() == kind)
            .collect()
    }

    /// `ID_DOCUMENT_AUTHENTICITY` checks
    #[must_use]
    pub fn authenticity_checks(&self) -> Vec<&CheckResponse> {
        self.checks_of(&CheckKind::DocumentAuthenticity)
    }

    /// `ID_DOCUMENT_FACE_MATCH` checks
    #[must_use]
    pub fn face_match_checks(&self) -> Vec<&CheckResponse> {
        self.checks_of(&CheckKind::FaceMatch)
    }

    /// `ID_DOCUMENT_TEXT_DATA_CHECK` checks
    #[must_use]
    pub fn text_data_checks(&self) -> Vec<&CheckResponse> {
        self.checks_of(&CheckKind::TextData)
    }

    /// `LIVENESS` checks
    #[must_use]
    pub fn liveness_checks(&self) -> Vec<&CheckResponse> {
        self.checks_of(&CheckKind::Liveness)
    }
}

impl TryFrom<&Value> for GetSessionResult {
    type Error = SdkError;

    fn try_from(value: &Value) -> SdkResult<Self> {
        Ok(Self {
            session_id: require_str(value, "session_id")?,
            state: opt_str(value, "state"),
            client_session_token: opt_str(value, "client_session_token"),
            client_session_token_ttl: opt_i64(value, "client_session_token_ttl"),
            user_tracking_id: opt_str(value, "user_tracking_id"),
            checks: array(value, "checks")
                .iter()
                .map(CheckResponse::from)
                .collect(),
            resources: object(value, "resources")
                .map(ResourceContainer::from)
                .unwrap_or_default(),
        })
    }
}
